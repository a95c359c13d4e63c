//! Resolved type graph for propcast.
//!
//! This crate defines the [`TypeGraph`] capability the classifier consumes,
//! together with an in-memory implementation loaded from a graph document
//! dumped by the TypeScript checker, and a builder for constructing graphs
//! by hand.

pub mod builder;
pub mod document;
pub mod flags;
pub mod graph;
pub mod memory;

pub use builder::GraphBuilder;
pub use document::{load_document, ComponentEntry, GraphDocument, GraphError, TypeNode};
pub use flags::TypeFlags;
pub use graph::{PropertySymbol, Signature, TypeGraph, TypeId};
pub use memory::{load_graph, MemoryGraph};
