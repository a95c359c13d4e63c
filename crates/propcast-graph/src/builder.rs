//! Programmatic construction of type graphs.

use crate::document::{ComponentEntry, GraphDocument, TypeNode};
use crate::flags::TypeFlags;
use crate::graph::{PropertySymbol, Signature, TypeId};
use crate::memory::MemoryGraph;

/// Builds a [`MemoryGraph`] one type at a time.
///
/// Every id handed out refers to a node created by the same builder, so the
/// result is consistent without validation.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: Vec<TypeNode>,
    components: Vec<ComponentEntry>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, configure: impl FnOnce(&mut TypeNode)) -> TypeId {
        let id = TypeId(self.nodes.len() as u32);
        let mut node = TypeNode::new(id, TypeFlags::empty());
        configure(&mut node);
        self.nodes.push(node);
        id
    }

    /// A type with the given flags and no structure.
    pub fn primitive(&mut self, flags: TypeFlags) -> TypeId {
        self.push(|node| node.flags = flags)
    }

    pub fn boolean(&mut self) -> TypeId {
        self.primitive(TypeFlags::BOOLEAN)
    }

    pub fn number(&mut self) -> TypeId {
        self.primitive(TypeFlags::NUMBER)
    }

    pub fn string(&mut self) -> TypeId {
        self.primitive(TypeFlags::STRING)
    }

    pub fn any(&mut self) -> TypeId {
        self.primitive(TypeFlags::ANY)
    }

    pub fn unknown(&mut self) -> TypeId {
        self.primitive(TypeFlags::UNKNOWN)
    }

    pub fn undefined(&mut self) -> TypeId {
        self.primitive(TypeFlags::UNDEFINED)
    }

    pub fn null(&mut self) -> TypeId {
        self.primitive(TypeFlags::NULL)
    }

    pub fn string_literal(&mut self, value: &str) -> TypeId {
        self.push(|node| {
            node.flags = TypeFlags::STRING_LITERAL;
            node.value = Some(serde_json::Value::from(value));
        })
    }

    pub fn number_literal(&mut self, value: i64) -> TypeId {
        self.push(|node| {
            node.flags = TypeFlags::NUMBER_LITERAL;
            node.value = Some(serde_json::Value::from(value));
        })
    }

    pub fn boolean_literal(&mut self, value: bool) -> TypeId {
        self.push(|node| {
            node.flags = TypeFlags::BOOLEAN_LITERAL;
            node.value = Some(serde_json::Value::from(value));
        })
    }

    pub fn union(&mut self, branches: &[TypeId]) -> TypeId {
        self.push(|node| {
            node.flags = TypeFlags::UNION;
            node.union = branches.to_vec();
        })
    }

    pub fn intersection(&mut self, branches: &[TypeId]) -> TypeId {
        self.push(|node| {
            node.flags = TypeFlags::INTERSECTION;
            node.intersection = branches.to_vec();
        })
    }

    pub fn array(&mut self, element: TypeId) -> TypeId {
        self.generic("Array", &[element])
    }

    /// A nominal object type such as `Element` or `ButtonProps`.
    pub fn named(&mut self, symbol: &str) -> TypeId {
        self.generic(symbol, &[])
    }

    /// A nominal generic instantiation such as `SxProps<Theme>`.
    pub fn generic(&mut self, symbol: &str, arguments: &[TypeId]) -> TypeId {
        self.push(|node| {
            node.flags = TypeFlags::OBJECT;
            node.symbol = Some(symbol.to_string());
            node.type_arguments = arguments.to_vec();
        })
    }

    pub fn object(&mut self, properties: Vec<PropertySymbol>) -> TypeId {
        self.push(|node| {
            node.flags = TypeFlags::OBJECT;
            node.properties = properties;
        })
    }

    pub fn function(&mut self, parameters: &[TypeId], return_type: TypeId) -> TypeId {
        self.push(|node| {
            node.flags = TypeFlags::OBJECT;
            node.signatures = vec![Signature {
                parameters: parameters.to_vec(),
                return_type,
            }];
        })
    }

    /// A function component `(props) => JSX.Element`, registered under `name`.
    pub fn component(&mut self, name: &str, props: TypeId) -> TypeId {
        let element = self.named("Element");
        let ty = self.function(&[props], element);
        self.export(name, ty)
    }

    /// List `ty` as an export, whether or not it is a component.
    pub fn export(&mut self, name: &str, ty: TypeId) -> TypeId {
        self.components.push(ComponentEntry {
            name: name.to_string(),
            ty,
        });
        ty
    }

    /// Override the checker rendering of an existing type.
    pub fn display(&mut self, ty: TypeId, display: &str) -> TypeId {
        if let Some(node) = self.nodes.get_mut(ty.0 as usize) {
            node.display = Some(display.to_string());
        }
        ty
    }

    pub fn into_document(self) -> GraphDocument {
        GraphDocument {
            types: self.nodes,
            components: self.components,
        }
    }

    pub fn build(self) -> MemoryGraph {
        MemoryGraph::from_parts(self.nodes, self.components)
    }
}
