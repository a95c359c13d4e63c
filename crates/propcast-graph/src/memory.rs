//! In-memory type graph backed by a [`GraphDocument`].

use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::document::{load_document, ComponentEntry, GraphDocument, GraphError, TypeNode};
use crate::flags::TypeFlags;
use crate::graph::{PropertySymbol, Signature, TypeGraph, TypeId};

/// Rendering stops descending past this depth.
const MAX_RENDER_DEPTH: usize = 12;

/// A validated, read-only type graph held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryGraph {
    nodes: HashMap<TypeId, TypeNode>,
    components: Vec<ComponentEntry>,
}

impl MemoryGraph {
    /// Build a graph from a document, checking ids and references.
    pub fn from_document(doc: GraphDocument) -> Result<Self, GraphError> {
        let mut ids = HashSet::with_capacity(doc.types.len());
        for node in &doc.types {
            if !ids.insert(node.id) {
                return Err(GraphError::DuplicateId(node.id));
            }
        }

        for node in &doc.types {
            if let Some(missing) = node.references().find(|r| !ids.contains(r)) {
                return Err(GraphError::DanglingReference {
                    from: node.id,
                    to: missing,
                });
            }
        }

        for entry in &doc.components {
            if !ids.contains(&entry.ty) {
                return Err(GraphError::UnknownComponentType {
                    component: entry.name.clone(),
                    ty: entry.ty,
                });
            }
        }

        Ok(Self::from_parts(doc.types, doc.components))
    }

    /// Assemble a graph without validation. Callers guarantee consistency.
    pub(crate) fn from_parts(types: Vec<TypeNode>, components: Vec<ComponentEntry>) -> Self {
        Self {
            nodes: types.into_iter().map(|node| (node.id, node)).collect(),
            components,
        }
    }

    /// Components declared by the document this graph was loaded from.
    pub fn components(&self) -> &[ComponentEntry] {
        &self.components
    }

    /// Look up a component entry by exported name.
    pub fn component(&self, name: &str) -> Option<&ComponentEntry> {
        self.components.iter().find(|c| c.name == name)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn render(&self, ty: TypeId, depth: usize) -> String {
        let Some(node) = self.nodes.get(&ty) else {
            return format!("<unresolved {ty}>");
        };

        if let Some(display) = &node.display {
            return display.clone();
        }

        if depth >= MAX_RENDER_DEPTH {
            return "...".to_string();
        }

        if let Some(value) = &node.value {
            return value.to_string();
        }

        if !node.union.is_empty() {
            return self.render_list(&node.union, " | ", depth);
        }

        if !node.intersection.is_empty() {
            return self.render_list(&node.intersection, " & ", depth);
        }

        if let Some(symbol) = &node.symbol {
            return match node.type_arguments.as_slice() {
                [] => symbol.clone(),
                [element] if symbol == "Array" => {
                    let inner = self.render(*element, depth + 1);
                    if self.needs_parens(*element) {
                        format!("({inner})[]")
                    } else {
                        format!("{inner}[]")
                    }
                }
                args => format!("{symbol}<{}>", self.render_list(args, ", ", depth)),
            };
        }

        if let Some(sig) = node.signatures.first() {
            let params = sig
                .parameters
                .iter()
                .enumerate()
                .map(|(i, p)| format!("arg{i}: {}", self.render(*p, depth + 1)))
                .collect::<Vec<_>>()
                .join(", ");
            return format!("({params}) => {}", self.render(sig.return_type, depth + 1));
        }

        if !node.properties.is_empty() {
            let members = node
                .properties
                .iter()
                .map(|p| format!("{}: {};", p.name, self.render(p.ty, depth + 1)))
                .collect::<Vec<_>>()
                .join(" ");
            return format!("{{ {members} }}");
        }

        node.flags.keyword().unwrap_or("unknown").to_string()
    }

    fn render_list(&self, types: &[TypeId], separator: &str, depth: usize) -> String {
        types
            .iter()
            .map(|t| self.render(*t, depth + 1))
            .collect::<Vec<_>>()
            .join(separator)
    }

    fn needs_parens(&self, ty: TypeId) -> bool {
        self.nodes.get(&ty).is_some_and(|node| {
            node.display.is_none()
                && (!node.union.is_empty()
                    || !node.intersection.is_empty()
                    || (node.symbol.is_none() && !node.signatures.is_empty()))
        })
    }
}

impl TypeGraph for MemoryGraph {
    fn flags(&self, ty: TypeId) -> TypeFlags {
        self.nodes
            .get(&ty)
            .map(|node| node.flags)
            .unwrap_or_else(TypeFlags::empty)
    }

    fn type_to_string(&self, ty: TypeId) -> String {
        self.render(ty, 0)
    }

    fn symbol_name(&self, ty: TypeId) -> Option<&str> {
        self.nodes.get(&ty).and_then(|node| node.symbol.as_deref())
    }

    fn union_types(&self, ty: TypeId) -> Option<&[TypeId]> {
        self.nodes
            .get(&ty)
            .filter(|node| node.flags.contains(TypeFlags::UNION) || !node.union.is_empty())
            .map(|node| node.union.as_slice())
    }

    fn intersection_types(&self, ty: TypeId) -> Option<&[TypeId]> {
        self.nodes
            .get(&ty)
            .filter(|node| {
                node.flags.contains(TypeFlags::INTERSECTION) || !node.intersection.is_empty()
            })
            .map(|node| node.intersection.as_slice())
    }

    fn type_arguments(&self, ty: TypeId) -> &[TypeId] {
        self.nodes
            .get(&ty)
            .map(|node| node.type_arguments.as_slice())
            .unwrap_or(&[])
    }

    fn call_signatures(&self, ty: TypeId) -> &[Signature] {
        self.nodes
            .get(&ty)
            .map(|node| node.signatures.as_slice())
            .unwrap_or(&[])
    }

    fn properties(&self, ty: TypeId) -> &[PropertySymbol] {
        self.nodes
            .get(&ty)
            .map(|node| node.properties.as_slice())
            .unwrap_or(&[])
    }
}

/// Load and validate a graph document from disk.
pub fn load_graph(path: &Path) -> Result<MemoryGraph, GraphError> {
    MemoryGraph::from_document(load_document(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::GraphBuilder;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn renders_structural_types() {
        let mut b = GraphBuilder::new();
        let string = b.string();
        let number = b.number();
        let a = b.string_literal("a");
        let union = b.union(&[string, number]);
        let list = b.array(union);
        let literal_list = b.array(a);
        let func = b.function(&[string], number);
        let graph = b.build();

        assert_eq!(graph.type_to_string(union), "string | number");
        assert_eq!(graph.type_to_string(list), "(string | number)[]");
        assert_eq!(graph.type_to_string(literal_list), "\"a\"[]");
        assert_eq!(graph.type_to_string(func), "(arg0: string) => number");
    }

    #[test]
    fn unknown_ids_degrade_to_empty_values() {
        let graph = MemoryGraph::default();

        assert_eq!(graph.flags(TypeId(3)), TypeFlags::empty());
        assert_eq!(graph.type_to_string(TypeId(3)), "<unresolved #3>");
        assert!(graph.call_signatures(TypeId(3)).is_empty());
        assert!(!graph.is_union(TypeId(3)));
        assert!(!graph.is_intersection(TypeId(3)));
    }

    #[test]
    fn distinguishes_unions_from_intersections() {
        let mut b = GraphBuilder::new();
        let string = b.string();
        let number = b.number();
        let union = b.union(&[string, number]);
        let intersection = b.intersection(&[string, number]);
        let graph = b.build();

        assert!(graph.is_union(union));
        assert!(!graph.is_intersection(union));
        assert!(graph.is_intersection(intersection));
        assert!(!graph.is_union(intersection));
        assert_eq!(graph.type_to_string(intersection), "string & number");
    }

    #[test]
    fn rejects_duplicate_ids() {
        let doc = GraphDocument {
            types: vec![
                TypeNode::new(TypeId(0), TypeFlags::STRING),
                TypeNode::new(TypeId(0), TypeFlags::NUMBER),
            ],
            components: vec![],
        };

        let result = MemoryGraph::from_document(doc);

        assert!(matches!(result, Err(GraphError::DuplicateId(TypeId(0)))));
    }

    #[test]
    fn rejects_dangling_references() {
        let mut union = TypeNode::new(TypeId(1), TypeFlags::UNION);
        union.union = vec![TypeId(0), TypeId(7)];
        let doc = GraphDocument {
            types: vec![TypeNode::new(TypeId(0), TypeFlags::STRING), union],
            components: vec![],
        };

        let result = MemoryGraph::from_document(doc);

        assert!(matches!(
            result,
            Err(GraphError::DanglingReference {
                from: TypeId(1),
                to: TypeId(7)
            })
        ));
    }

    #[test]
    fn rejects_components_with_unknown_types() {
        let doc = GraphDocument {
            types: vec![],
            components: vec![ComponentEntry {
                name: "Button".to_string(),
                ty: TypeId(4),
            }],
        };

        let result = MemoryGraph::from_document(doc);

        assert!(matches!(
            result,
            Err(GraphError::UnknownComponentType { .. })
        ));
    }

    #[test]
    fn loads_graph_from_disk() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("badge.json");
        fs::write(
            &path,
            r#"{
  "types": [
    { "id": 0, "flags": "STRING", "display": "string" },
    { "id": 1, "flags": "OBJECT", "display": "BadgeProps",
      "properties": [{ "name": "label", "type": 0 }] }
  ],
  "components": [{ "name": "Badge", "type": 1 }]
}"#,
        )
        .unwrap();

        let graph = load_graph(&path).unwrap();

        assert_eq!(graph.len(), 2);
        assert_eq!(graph.component("Badge").map(|c| c.ty), Some(TypeId(1)));
        assert_eq!(graph.properties(TypeId(1))[0].name, "label");
        assert_eq!(graph.type_to_string(TypeId(1)), "BadgeProps");
    }
}
