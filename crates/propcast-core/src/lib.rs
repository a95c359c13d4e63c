//! Conversion of TypeScript component props into PropTypes descriptors.
//!
//! This crate provides the core logic: extracting a component's props from a
//! resolved type graph, classifying each prop type into a runtime validator,
//! and assembling a component view for code emitters.

pub mod assembler;
pub mod classifier;
pub mod converter;
pub mod extractor;
pub mod hook;
pub mod options;
pub mod registry;
pub mod validator;
pub mod view;

pub use assembler::{assemble, Assembly};
pub use classifier::{ClassifyError, Classifier};
pub use converter::{Converter, GraphConversion};
pub use extractor::{extract_properties, ComponentNotFound};
pub use hook::{
    ComponentOverrides, CustomizationHook, InjectedProperty, NoCustomization, OverrideHook,
};
pub use options::ConversionOptions;
pub use registry::{ComponentRegistry, LoadedGraph, RegistryError};
pub use validator::Validator;
pub use view::{
    skip_summary, ComponentProperty, ComponentView, EventView, ForwardedProperty, SkipReason,
    SkippedProperty,
};
