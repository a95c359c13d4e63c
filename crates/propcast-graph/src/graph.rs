//! The type graph capability consumed by the classifier.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::flags::TypeFlags;

/// Handle to a type node in a [`TypeGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeId(pub u32);

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A call signature of a callable type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signature {
    /// Resolved types of the declared parameters, in order
    #[serde(default)]
    pub parameters: Vec<TypeId>,

    /// Resolved return type
    pub return_type: TypeId,
}

/// A named member of an object type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertySymbol {
    /// Property name as declared
    pub name: String,

    /// Resolved type of the property
    #[serde(rename = "type")]
    pub ty: TypeId,

    /// Documentation comment text, lines separated by `\n`
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub documentation: String,
}

impl PropertySymbol {
    pub fn new(name: impl Into<String>, ty: TypeId) -> Self {
        Self {
            name: name.into(),
            ty,
            documentation: String::new(),
        }
    }

    pub fn with_documentation(mut self, documentation: impl Into<String>) -> Self {
        self.documentation = documentation.into();
        self
    }
}

/// Read-only view over a fully resolved type graph.
///
/// Lookups of an id the graph does not know return empty values rather than
/// failing, so a classifier walking the graph degrades instead of panicking.
pub trait TypeGraph {
    /// Flag bits of the type.
    fn flags(&self, ty: TypeId) -> TypeFlags;

    /// Canonical rendering of the type, as the checker would print it.
    fn type_to_string(&self, ty: TypeId) -> String;

    /// Symbol name for nominal types (`Array`, `Element`, ...).
    fn symbol_name(&self, ty: TypeId) -> Option<&str>;

    /// Branches of a union type, or `None` if the type is not a union.
    fn union_types(&self, ty: TypeId) -> Option<&[TypeId]>;

    /// Branches of an intersection type, or `None` if the type is not an intersection.
    fn intersection_types(&self, ty: TypeId) -> Option<&[TypeId]>;

    /// Generic type arguments, e.g. the element type of `Array<T>`.
    fn type_arguments(&self, ty: TypeId) -> &[TypeId];

    /// Call signatures exposed by the type.
    fn call_signatures(&self, ty: TypeId) -> &[Signature];

    /// Members of the type in declaration order.
    fn properties(&self, ty: TypeId) -> &[PropertySymbol];

    fn is_union(&self, ty: TypeId) -> bool {
        self.union_types(ty).is_some()
    }

    fn is_intersection(&self, ty: TypeId) -> bool {
        self.intersection_types(ty).is_some()
    }
}
