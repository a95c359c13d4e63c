//! Per-component customization of assembled views.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::view::{ComponentView, EventView, ForwardedProperty, SkippedProperty};

/// Adjusts a component view after assembly and before emission.
///
/// Invoked once per component with the assembled view and the properties
/// that were skipped.
pub trait CustomizationHook: Send + Sync {
    fn customize(&self, view: &mut ComponentView, skipped: &[SkippedProperty]);
}

/// Leaves every view untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoCustomization;

impl CustomizationHook for NoCustomization {
    fn customize(&self, _view: &mut ComponentView, _skipped: &[SkippedProperty]) {}
}

/// A property added to a view by configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InjectedProperty {
    pub name: String,

    pub prop_type: String,

    #[serde(default)]
    pub documentation: Vec<String>,

    #[serde(default)]
    pub default_value: Option<String>,
}

/// Overrides for a single component, the `[components.<Name>]` table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentOverrides {
    /// New name for the generated component
    pub rename: Option<String>,

    /// Properties to drop
    pub remove: Vec<String>,

    /// Property renames, old name to new name
    pub rename_props: BTreeMap<String, String>,

    /// Explicit validators; also restores skipped properties
    pub prop_types: BTreeMap<String, String>,

    /// Properties to add or replace
    pub inject: Vec<InjectedProperty>,

    /// Properties listed here come first, in this order
    pub order: Vec<String>,

    pub events: Vec<EventView>,

    pub imports: Vec<String>,

    pub extra_code: Vec<String>,

    pub children_rendering: Option<String>,
}

/// Applies configured [`ComponentOverrides`] by component name.
#[derive(Debug, Default, Clone)]
pub struct OverrideHook {
    overrides: HashMap<String, ComponentOverrides>,
}

impl OverrideHook {
    pub fn new(overrides: HashMap<String, ComponentOverrides>) -> Self {
        Self { overrides }
    }
}

impl CustomizationHook for OverrideHook {
    fn customize(&self, view: &mut ComponentView, skipped: &[SkippedProperty]) {
        let Some(overrides) = self.overrides.get(&view.name) else {
            return;
        };

        view.properties
            .retain(|p| !overrides.remove.contains(&p.name));

        for (name, prop_type) in &overrides.prop_types {
            if let Some(index) = view.properties.iter().position(|p| &p.name == name) {
                view.properties[index].prop_type = prop_type.clone();
            } else if let Some(restored) = skipped.iter().find(|s| &s.name == name) {
                tracing::debug!("Restoring skipped property {} as {}", name, prop_type);
                view.skipped.retain(|s| &s.name != name);
                view.properties.push(ForwardedProperty {
                    name: restored.name.clone(),
                    documentation: restored.documentation.clone(),
                    default_value: None,
                    prop_type: prop_type.clone(),
                    forward: true,
                });
            } else {
                tracing::warn!(
                    "Override for unknown property {} on component {}",
                    name,
                    view.name
                );
            }
        }

        for property in &mut view.properties {
            if let Some(new_name) = overrides.rename_props.get(&property.name) {
                property.name = new_name.clone();
            }
        }

        for injected in &overrides.inject {
            let property = ForwardedProperty {
                name: injected.name.clone(),
                documentation: injected.documentation.clone(),
                default_value: injected.default_value.clone(),
                prop_type: injected.prop_type.clone(),
                forward: true,
            };
            match view.properties.iter().position(|p| p.name == injected.name) {
                Some(index) => view.properties[index] = property,
                None => view.properties.push(property),
            }
        }

        if !overrides.order.is_empty() {
            // Stable sort keeps unlisted properties in their original order.
            view.properties.sort_by_key(|p| {
                overrides
                    .order
                    .iter()
                    .position(|name| name == &p.name)
                    .unwrap_or(overrides.order.len())
            });
        }

        view.events.extend(overrides.events.iter().cloned());
        view.imports.extend(overrides.imports.iter().cloned());
        view.extra_code.extend(overrides.extra_code.iter().cloned());
        if overrides.children_rendering.is_some() {
            view.children_rendering = overrides.children_rendering.clone();
        }

        if let Some(name) = &overrides.rename {
            view.name = name.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::SkipReason;
    use pretty_assertions::assert_eq;

    fn forwarded(name: &str, prop_type: &str) -> ForwardedProperty {
        ForwardedProperty {
            name: name.to_string(),
            documentation: vec![],
            default_value: None,
            prop_type: prop_type.to_string(),
            forward: true,
        }
    }

    fn view() -> ComponentView {
        ComponentView {
            name: "Button".to_string(),
            properties: vec![
                forwarded("label", "PropTypes.string"),
                forwarded("size", "PropTypes.any"),
                forwarded("legacy", "PropTypes.bool"),
            ],
            ..ComponentView::default()
        }
    }

    fn prop_list(view: &ComponentView) -> Vec<(String, String)> {
        view.properties
            .iter()
            .map(|p| (p.name.clone(), p.prop_type.clone()))
            .collect()
    }

    #[test]
    fn no_customization_leaves_view_alone() {
        let mut v = view();
        NoCustomization.customize(&mut v, &[]);

        assert_eq!(v, view());
    }

    #[test]
    fn applies_component_overrides() {
        let overrides: ComponentOverrides = toml::from_str(
            r#"
rename = "DashButton"
remove = ["legacy"]
order = ["size"]
imports = ["import './button.css';"]

[rename_props]
label = "text"

[prop_types]
size = "PropTypes.oneOf(['sm', 'lg'])"

[[inject]]
name = "setProps"
prop_type = "PropTypes.func"
documentation = ["Dash-assigned callback."]

[[events]]
name = "click"
"#,
        )
        .unwrap();
        let hook = OverrideHook::new(HashMap::from([("Button".to_string(), overrides)]));

        let mut v = view();
        hook.customize(&mut v, &[]);

        assert_eq!(v.name, "DashButton");
        assert_eq!(
            prop_list(&v),
            vec![
                ("size".to_string(), "PropTypes.oneOf(['sm', 'lg'])".to_string()),
                ("text".to_string(), "PropTypes.string".to_string()),
                ("setProps".to_string(), "PropTypes.func".to_string()),
            ]
        );
        assert_eq!(v.events[0].name, "click");
        assert_eq!(v.imports, vec!["import './button.css';".to_string()]);
    }

    #[test]
    fn restores_skipped_property_with_explicit_type() {
        let skipped = vec![SkippedProperty {
            name: "onChange".to_string(),
            documentation: vec!["Called on change.".to_string()],
            type_name: "(value: string) => void".to_string(),
            reason: SkipReason::FunctionType,
            detail: String::new(),
        }];
        let overrides = ComponentOverrides {
            prop_types: BTreeMap::from([("onChange".to_string(), "PropTypes.func".to_string())]),
            ..ComponentOverrides::default()
        };
        let hook = OverrideHook::new(HashMap::from([("Button".to_string(), overrides)]));

        let mut v = view();
        v.skipped = skipped.clone();
        hook.customize(&mut v, &skipped);

        assert!(v.skipped.is_empty());
        let restored = v.property("onChange").unwrap();
        assert_eq!(restored.prop_type, "PropTypes.func");
        assert_eq!(restored.documentation, vec!["Called on change.".to_string()]);
    }

    #[test]
    fn ignores_other_components() {
        let hook = OverrideHook::new(HashMap::from([(
            "Card".to_string(),
            ComponentOverrides {
                rename: Some("DashCard".to_string()),
                ..ComponentOverrides::default()
            },
        )]));

        let mut v = view();
        hook.customize(&mut v, &[]);

        assert_eq!(v, view());
    }
}
