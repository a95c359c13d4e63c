//! Locates the props of a function component.

use propcast_graph::{TypeGraph, TypeId};

use crate::options::ConversionOptions;
use crate::view::ComponentProperty;

/// The candidate type is not a component.
///
/// Usually this simply means the export is something else, so callers report
/// it per component instead of treating it as fatal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ComponentNotFound {
    #[error("Expected to find a call signature for component")]
    NoCallSignature,

    #[error("Expected a call signature with a single props parameter, found {0} parameters")]
    ParameterCount(usize),

    #[error("Component function should return an Element, found {}", .0.as_deref().unwrap_or("no symbol"))]
    NotAnElement(Option<String>),
}

/// Extract the props of the component typed `ty`.
///
/// The type must be callable with exactly one parameter and return one of the
/// configured element types. Properties come back in the graph's order.
pub fn extract_properties<G: TypeGraph + ?Sized>(
    graph: &G,
    ty: TypeId,
    options: &ConversionOptions,
) -> Result<Vec<ComponentProperty>, ComponentNotFound> {
    let signature = graph
        .call_signatures(ty)
        .first()
        .ok_or(ComponentNotFound::NoCallSignature)?;

    let [props] = signature.parameters.as_slice() else {
        return Err(ComponentNotFound::ParameterCount(
            signature.parameters.len(),
        ));
    };

    let return_symbol = graph.symbol_name(signature.return_type);
    if !return_symbol.is_some_and(|s| options.is_element_marker(s)) {
        return Err(ComponentNotFound::NotAnElement(
            return_symbol.map(str::to_string),
        ));
    }

    let properties = graph
        .properties(*props)
        .iter()
        .map(|symbol| ComponentProperty {
            name: symbol.name.clone(),
            documentation: split_documentation(&symbol.documentation),
            default_value: None,
            ty: symbol.ty,
        })
        .collect();

    Ok(properties)
}

fn split_documentation(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split('\n').map(str::to_string).collect()
}
