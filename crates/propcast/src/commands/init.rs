//! Initialize propcast in a project.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub fn run(config_path: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing propcast...");

    if config_path.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
        return Ok(());
    }

    fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    tracing::info!("Created {}", config_path.display());

    let graphs_dir = Path::new("graphs");
    if !graphs_dir.exists() {
        fs::create_dir_all(graphs_dir).context("Failed to create graphs directory")?;
    }

    let example_path = graphs_dir.join("button.json");
    if !example_path.exists() || yes {
        fs::write(&example_path, EXAMPLE_GRAPH).context("Failed to write graphs/button.json")?;
        tracing::info!("Created graphs/button.json");
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'propcast convert graphs' to generate component views.");

    Ok(())
}

pub(crate) const DEFAULT_CONFIG: &str = r#"# propcast configuration

[conversion]
# Properties starting with this prefix are never forwarded
aria_prefix = "aria-"

# The only property allowed to carry renderable children
children_prop = "children"

# Property names that are never forwarded
reserved_names = ["component", "classes", "innerRef", "style"]

# Renderings of the "anything renderable" type
node_markers = ["ReactNode"]

# Symbol names a component may return
element_markers = ["Element", "ReactElement"]

# Symbol names of array generics
array_markers = ["Array", "ReadonlyArray"]

# Style generics exposed as PropTypes.object
style_markers = ["CSSProperties", "SxProps", "StyleProp", "SystemStyleObject"]

[output]
# Directory for generated views (omit to print to stdout)
dir = "views"

# json or yaml
format = "json"

# Per-component overrides
# [components.Button]
# rename = "DashButton"
# remove = ["legacy"]
# order = ["children", "variant"]
#
# [components.Button.prop_types]
# onClick = "PropTypes.func"
"#;

const EXAMPLE_GRAPH: &str = r#"{
  "types": [
    { "id": 0, "flags": "BOOLEAN", "display": "boolean" },
    { "id": 1, "flags": "STRING", "display": "string" },
    { "id": 2, "flags": "STRING_LITERAL", "value": "primary" },
    { "id": 3, "flags": "STRING_LITERAL", "value": "secondary" },
    { "id": 4, "flags": "UNION", "union": [2, 3] },
    { "id": 5, "flags": "VOID", "display": "void" },
    { "id": 6, "flags": "OBJECT", "signatures": [{ "parameters": [], "return_type": 5 }] },
    { "id": 7, "flags": "UNION", "display": "ReactNode", "union": [1, 0] },
    {
      "id": 8,
      "flags": "OBJECT",
      "display": "ButtonProps",
      "properties": [
        { "name": "children", "type": 7, "documentation": "Button content." },
        { "name": "disabled", "type": 0, "documentation": "Disables interaction." },
        { "name": "variant", "type": 4, "documentation": "Visual style." },
        { "name": "onClick", "type": 6 },
        { "name": "aria-label", "type": 1 }
      ]
    },
    { "id": 9, "flags": "OBJECT", "symbol": "Element" },
    { "id": 10, "flags": "OBJECT", "signatures": [{ "parameters": [8], "return_type": 9 }] }
  ],
  "components": [{ "name": "Button", "type": 10 }]
}
"#;
