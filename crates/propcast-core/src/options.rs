//! Naming conventions the conversion relies on.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Names and markers recognized while converting a component.
///
/// Deserialized from the `[conversion]` table of `propcast.toml`; every field
/// has a default matching React's typings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionOptions {
    /// Property name prefix for markup accessibility attributes
    pub aria_prefix: String,

    /// The one property allowed to carry renderable children
    pub children_prop: String,

    /// Property names never forwarded
    pub reserved_names: Vec<String>,

    /// Renderings of the "anything renderable" type
    pub node_markers: Vec<String>,

    /// Symbol names a component's return type may have
    pub element_markers: Vec<String>,

    /// Symbol names of array-like generics
    pub array_markers: Vec<String>,

    /// Opaque style generics exposed as plain objects
    pub style_markers: Vec<String>,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            aria_prefix: "aria-".to_string(),
            children_prop: "children".to_string(),
            reserved_names: strings(&["component", "classes", "innerRef", "style"]),
            node_markers: strings(&["ReactNode"]),
            element_markers: strings(&["Element", "ReactElement"]),
            array_markers: strings(&["Array", "ReadonlyArray"]),
            style_markers: strings(&[
                "CSSProperties",
                "SxProps",
                "StyleProp",
                "SystemStyleObject",
            ]),
        }
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

static GENERIC_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Match: React.CSSProperties, SxProps<Theme>, StyleProp<ViewStyle | null>
    Regex::new(r"^\s*(?:[A-Za-z_$][\w$]*\.)*([A-Za-z_$][\w$]*)\s*(?:<.*>)?\s*$")
        .expect("Invalid generic name regex")
});

impl ConversionOptions {
    pub fn is_reserved(&self, name: &str) -> bool {
        (!self.aria_prefix.is_empty() && name.starts_with(&self.aria_prefix))
            || self.reserved_names.iter().any(|n| n == name)
    }

    pub fn is_node_marker(&self, rendered: &str) -> bool {
        self.node_markers.iter().any(|m| m == rendered)
    }

    pub fn is_element_marker(&self, symbol: &str) -> bool {
        self.element_markers.iter().any(|m| m == symbol)
    }

    pub fn is_array_marker(&self, symbol: &str) -> bool {
        self.array_markers.iter().any(|m| m == symbol)
    }

    /// Whether a rendered type is one of the style generics, ignoring any
    /// namespace qualifier and type arguments.
    pub fn is_style_marker(&self, rendered: &str) -> bool {
        base_type_name(rendered).is_some_and(|base| self.style_markers.iter().any(|m| m == base))
    }
}

/// Unqualified name of a possibly generic type reference.
pub fn base_type_name(rendered: &str) -> Option<&str> {
    GENERIC_NAME_RE
        .captures(rendered)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_namespaces_and_type_arguments() {
        assert_eq!(base_type_name("SxProps<Theme>"), Some("SxProps"));
        assert_eq!(base_type_name("React.CSSProperties"), Some("CSSProperties"));
        assert_eq!(
            base_type_name("StyleProp<ViewStyle | null>"),
            Some("StyleProp")
        );
        assert_eq!(base_type_name("string | number"), None);
    }

    #[test]
    fn recognizes_style_markers() {
        let options = ConversionOptions::default();

        assert!(options.is_style_marker("SxProps<Theme>"));
        assert!(options.is_style_marker("CSSProperties"));
        assert!(!options.is_style_marker("ButtonProps"));
        assert!(!options.is_style_marker("{ color: string; }"));
    }

    #[test]
    fn reserves_aria_and_listed_names() {
        let options = ConversionOptions::default();

        assert!(options.is_reserved("aria-label"));
        assert!(options.is_reserved("innerRef"));
        assert!(!options.is_reserved("label"));
    }

    #[test]
    fn partial_tables_keep_defaults() {
        let options: ConversionOptions =
            serde_json::from_str(r#"{ "children_prop": "content" }"#).unwrap();

        assert_eq!(options.children_prop, "content");
        assert_eq!(options.aria_prefix, "aria-");
        assert_eq!(options.node_markers, vec!["ReactNode".to_string()]);
    }
}
