//! Component views handed to code emitters.

use std::fmt;

use propcast_graph::TypeId;
use serde::{Deserialize, Serialize};

/// A property extracted from a component's props type.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentProperty {
    /// Property name as declared
    pub name: String,

    /// Documentation comment, one entry per line
    pub documentation: Vec<String>,

    /// Default value as source text, filled in by a later pass
    pub default_value: Option<String>,

    /// Resolved type of the property
    pub ty: TypeId,
}

/// A property exposed on the generated component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForwardedProperty {
    pub name: String,

    #[serde(default)]
    pub documentation: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,

    /// PropTypes validator expression
    pub prop_type: String,

    /// Passed through to the wrapped component
    pub forward: bool,
}

/// Why a property was left out of the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkipReason {
    FunctionType,
    Unclassifiable,
    ReservedName,
}

impl SkipReason {
    /// Whether the skip needs the component author's attention.
    pub fn is_actionable(&self) -> bool {
        matches!(self, SkipReason::Unclassifiable)
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SkipReason::FunctionType => "function-type",
            SkipReason::Unclassifiable => "unclassifiable",
            SkipReason::ReservedName => "reserved-name",
        })
    }
}

/// A property that was not forwarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedProperty {
    pub name: String,

    #[serde(default)]
    pub documentation: Vec<String>,

    /// Checker rendering of the original type
    pub type_name: String,

    pub reason: SkipReason,

    /// Human-readable explanation
    #[serde(default)]
    pub detail: String,
}

/// An event exposed by the generated component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventView {
    pub name: String,

    #[serde(default)]
    pub documentation: Vec<String>,
}

/// Everything an emitter needs to generate one component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentView {
    /// Generated component name
    pub name: String,

    /// Forwarded properties in declaration order
    pub properties: Vec<ForwardedProperty>,

    /// Properties left out, with the reason
    #[serde(default)]
    pub skipped: Vec<SkippedProperty>,

    #[serde(default)]
    pub events: Vec<EventView>,

    /// Extra imports for the generated module
    #[serde(default)]
    pub imports: Vec<String>,

    /// Extra code placed before the component
    #[serde(default)]
    pub extra_code: Vec<String>,

    /// Custom rendering of the children prop
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children_rendering: Option<String>,

    /// Warnings collected while building the view
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl ComponentView {
    /// Skips the author should look at; expected skips are left out.
    pub fn skip_summary(&self) -> Vec<&SkippedProperty> {
        skip_summary(&self.skipped)
    }

    pub fn property(&self, name: &str) -> Option<&ForwardedProperty> {
        self.properties.iter().find(|p| p.name == name)
    }
}

/// Filter skipped properties down to the actionable ones.
pub fn skip_summary(skipped: &[SkippedProperty]) -> Vec<&SkippedProperty> {
    skipped.iter().filter(|s| s.reason.is_actionable()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skipped(name: &str, reason: SkipReason) -> SkippedProperty {
        SkippedProperty {
            name: name.to_string(),
            documentation: vec![],
            type_name: "unknown".to_string(),
            reason,
            detail: String::new(),
        }
    }

    #[test]
    fn summary_only_keeps_unclassifiable_skips() {
        let list = vec![
            skipped("onClick", SkipReason::FunctionType),
            skipped("aria-label", SkipReason::ReservedName),
            skipped("shape", SkipReason::Unclassifiable),
        ];

        let summary = skip_summary(&list);

        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0].name, "shape");
    }

    #[test]
    fn reasons_serialize_as_tags() {
        let json = serde_json::to_string(&SkipReason::FunctionType).unwrap();

        assert_eq!(json, "\"function-type\"");
        assert_eq!(SkipReason::ReservedName.to_string(), "reserved-name");
    }
}
