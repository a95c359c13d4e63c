//! Splits extracted properties into forwarded and skipped sets.

use propcast_graph::TypeGraph;

use crate::classifier::{ClassifyError, Classifier};
use crate::options::ConversionOptions;
use crate::validator::Validator;
use crate::view::{ComponentProperty, ForwardedProperty, SkipReason, SkippedProperty};

/// Outcome of assembling a component's properties.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Assembly {
    /// Forwarded properties in extraction order
    pub forwarded: Vec<ForwardedProperty>,

    /// Skipped properties in extraction order
    pub skipped: Vec<SkippedProperty>,

    /// Warnings for the caller to surface
    pub warnings: Vec<String>,
}

/// Classify every property and route it to the forwarded or skipped list.
pub fn assemble<G: TypeGraph + ?Sized>(
    graph: &G,
    properties: &[ComponentProperty],
    options: &ConversionOptions,
) -> Assembly {
    let classifier = Classifier::new(graph, options);
    let mut assembly = Assembly::default();

    for property in properties {
        if options.is_reserved(&property.name) {
            tracing::debug!("Skipping reserved property {}", property.name);
            assembly.skipped.push(skip(
                graph,
                property,
                SkipReason::ReservedName,
                "reserved property name".to_string(),
            ));
            continue;
        }

        // Only the children slot may carry nodes; other node props still take primitives.
        if classifier.is_node(property.ty) && property.name != options.children_prop {
            let warning = format!(
                "Defining node property {} as any instead of {}",
                property.name,
                graph.type_to_string(property.ty)
            );
            tracing::warn!("{}", warning);
            assembly.warnings.push(warning);
            assembly.forwarded.push(forward(property, &Validator::Any));
            continue;
        }

        match classifier.classify(property.ty) {
            Ok(validator) => assembly.forwarded.push(forward(property, &validator)),
            Err(e @ ClassifyError::FunctionType { .. }) => {
                tracing::debug!("Skipping function property {}", property.name);
                assembly
                    .skipped
                    .push(skip(graph, property, SkipReason::FunctionType, e.to_string()));
            }
            Err(e @ ClassifyError::Unclassifiable { .. }) => {
                tracing::warn!(
                    "Could not create PropType, skipping property {}: {}",
                    property.name,
                    e
                );
                assembly
                    .skipped
                    .push(skip(graph, property, SkipReason::Unclassifiable, e.to_string()));
            }
        }
    }

    assembly
}

fn forward(property: &ComponentProperty, validator: &Validator) -> ForwardedProperty {
    ForwardedProperty {
        name: property.name.clone(),
        documentation: property.documentation.clone(),
        default_value: property.default_value.clone(),
        prop_type: validator.to_string(),
        forward: true,
    }
}

fn skip<G: TypeGraph + ?Sized>(
    graph: &G,
    property: &ComponentProperty,
    reason: SkipReason,
    detail: String,
) -> SkippedProperty {
    SkippedProperty {
        name: property.name.clone(),
        documentation: property.documentation.clone(),
        type_name: graph.type_to_string(property.ty),
        reason,
        detail,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::skip_summary;
    use pretty_assertions::assert_eq;
    use propcast_graph::{GraphBuilder, MemoryGraph, TypeFlags, TypeId};

    fn property(name: &str, ty: TypeId) -> ComponentProperty {
        ComponentProperty {
            name: name.to_string(),
            documentation: vec![],
            default_value: None,
            ty,
        }
    }

    fn react_node(b: &mut GraphBuilder) -> TypeId {
        let string = b.string();
        let number = b.number();
        let element = b.named("ReactElement");
        let node = b.union(&[string, number, element]);
        b.display(node, "ReactNode")
    }

    fn names<T>(items: &[T], name: impl Fn(&T) -> &str) -> Vec<String> {
        items.iter().map(|i| name(i).to_string()).collect()
    }

    #[test]
    fn skips_reserved_names_without_classifying() {
        let mut b = GraphBuilder::new();
        let never = b.primitive(TypeFlags::NEVER);
        let boolean = b.boolean();
        let graph: MemoryGraph = b.build();
        let properties = vec![property("aria-hidden", boolean), property("classes", never)];

        let assembly = assemble(&graph, &properties, &ConversionOptions::default());

        assert!(assembly.forwarded.is_empty());
        assert!(assembly
            .skipped
            .iter()
            .all(|s| s.reason == SkipReason::ReservedName));
        assert!(skip_summary(&assembly.skipped).is_empty());
    }

    #[test]
    fn node_props_outside_children_become_any() {
        let mut b = GraphBuilder::new();
        let node = react_node(&mut b);
        let graph = b.build();
        let properties = vec![property("children", node), property("icon", node)];

        let assembly = assemble(&graph, &properties, &ConversionOptions::default());

        let types: Vec<(&str, &str)> = assembly
            .forwarded
            .iter()
            .map(|p| (p.name.as_str(), p.prop_type.as_str()))
            .collect();
        assert_eq!(
            types,
            vec![("children", "PropTypes.node"), ("icon", "PropTypes.any")]
        );
        assert!(assembly.skipped.is_empty());
        assert_eq!(assembly.warnings.len(), 1);
        assert!(assembly.warnings[0].contains("icon"));
    }

    #[test]
    fn routes_classifier_failures_to_skip_reasons() {
        let mut b = GraphBuilder::new();
        let void = b.primitive(TypeFlags::VOID);
        let handler = b.function(&[], void);
        let never = b.primitive(TypeFlags::NEVER);
        let string = b.string();
        let graph = b.build();
        let properties = vec![
            property("onClick", handler),
            property("impossible", never),
            property("label", string),
        ];

        let assembly = assemble(&graph, &properties, &ConversionOptions::default());

        assert_eq!(names(&assembly.forwarded, |p| p.name.as_str()), vec!["label"]);
        let reasons: Vec<SkipReason> = assembly.skipped.iter().map(|s| s.reason).collect();
        assert_eq!(
            reasons,
            vec![SkipReason::FunctionType, SkipReason::Unclassifiable]
        );
        assert_eq!(assembly.skipped[0].type_name, "() => void");

        let summary = skip_summary(&assembly.skipped);
        assert_eq!(names(&summary, |s| s.name.as_str()), vec!["impossible"]);
    }

    #[test]
    fn every_property_lands_in_exactly_one_list() {
        let mut b = GraphBuilder::new();
        let string = b.string();
        let never = b.primitive(TypeFlags::NEVER);
        let void = b.primitive(TypeFlags::VOID);
        let handler = b.function(&[string], void);
        let graph = b.build();
        let properties = vec![
            property("a", string),
            property("aria-x", string),
            property("b", never),
            property("c", handler),
            property("d", string),
        ];

        let assembly = assemble(&graph, &properties, &ConversionOptions::default());

        let mut seen = names(&assembly.forwarded, |p| p.name.as_str());
        seen.extend(names(&assembly.skipped, |s| s.name.as_str()));
        seen.sort();
        assert_eq!(seen, vec!["a", "aria-x", "b", "c", "d"]);
        assert_eq!(names(&assembly.forwarded, |p| p.name.as_str()), vec!["a", "d"]);
    }
}
