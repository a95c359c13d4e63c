//! Serialized graph documents.
//!
//! A graph document is the checker-side dump of every type reachable from a
//! set of exported components. It can be written as JSON or YAML.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::flags::TypeFlags;
use crate::graph::{PropertySymbol, Signature, TypeId};

/// A serialized type graph plus the components it declares.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    /// Every type node in the graph
    #[serde(default)]
    pub types: Vec<TypeNode>,

    /// Exported components, in source order
    #[serde(default)]
    pub components: Vec<ComponentEntry>,
}

/// An exported declaration that may be a component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentEntry {
    /// Exported name
    pub name: String,

    /// Type of the exported value
    #[serde(rename = "type")]
    pub ty: TypeId,
}

/// One resolved type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeNode {
    pub id: TypeId,

    #[serde(default = "TypeFlags::empty")]
    pub flags: TypeFlags,

    /// Checker rendering; derived from the structure when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,

    /// Symbol name for nominal types
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,

    /// Value of a literal type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub union: Vec<TypeId>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub intersection: Vec<TypeId>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_arguments: Vec<TypeId>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub signatures: Vec<Signature>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<PropertySymbol>,
}

impl TypeNode {
    pub fn new(id: TypeId, flags: TypeFlags) -> Self {
        Self {
            id,
            flags,
            display: None,
            symbol: None,
            value: None,
            union: Vec::new(),
            intersection: Vec::new(),
            type_arguments: Vec::new(),
            signatures: Vec::new(),
            properties: Vec::new(),
        }
    }

    /// Every type id this node refers to.
    pub fn references(&self) -> impl Iterator<Item = TypeId> + '_ {
        self.union
            .iter()
            .chain(&self.intersection)
            .chain(&self.type_arguments)
            .copied()
            .chain(self.signatures.iter().flat_map(|sig| {
                sig.parameters
                    .iter()
                    .copied()
                    .chain(std::iter::once(sig.return_type))
            }))
            .chain(self.properties.iter().map(|prop| prop.ty))
    }
}

impl GraphDocument {
    /// Parse a JSON graph document.
    pub fn from_json(source: &str) -> Result<Self, GraphError> {
        serde_json::from_str(source).map_err(|e| GraphError::InvalidJson(e.to_string()))
    }

    /// Parse a YAML graph document.
    pub fn from_yaml(source: &str) -> Result<Self, GraphError> {
        serde_yaml::from_str(source).map_err(|e| GraphError::InvalidYaml(e.to_string()))
    }
}

/// Read a graph document from disk, picking the format from the extension.
pub fn load_document(path: &Path) -> Result<GraphDocument, GraphError> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    if !matches!(ext, "json" | "yaml" | "yml") {
        return Err(GraphError::UnsupportedFormat(path.display().to_string()));
    }

    let source = fs::read_to_string(path).map_err(|e| GraphError::Read {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    match ext {
        "json" => GraphDocument::from_json(&source),
        _ => GraphDocument::from_yaml(&source),
    }
}

/// Errors that can occur when loading a graph.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("Failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("Unsupported graph format: {0} (expected .json, .yaml or .yml)")]
    UnsupportedFormat(String),

    #[error("Invalid JSON in graph document: {0}")]
    InvalidJson(String),

    #[error("Invalid YAML in graph document: {0}")]
    InvalidYaml(String),

    #[error("Duplicate type id {0}")]
    DuplicateId(TypeId),

    #[error("Type {from} refers to unknown type {to}")]
    DanglingReference { from: TypeId, to: TypeId },

    #[error("Component {component} refers to unknown type {ty}")]
    UnknownComponentType { component: String, ty: TypeId },
}
