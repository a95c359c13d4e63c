//! Check command: reports properties that could not be converted.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::config::load_config;

/// Run the check command. Fails when any property needs attention.
pub fn run(config_path: &Path, input: PathBuf) -> Result<()> {
    let config = load_config(config_path)?;
    let conversions = super::convert_input(config, &input)?;

    let mut components = 0;
    let mut actionable = 0;

    for view in conversions.iter().flat_map(|c| &c.views) {
        components += 1;

        for warning in &view.warnings {
            tracing::info!("{}: {}", view.name, warning);
        }

        for skipped in view.skip_summary() {
            actionable += 1;
            tracing::warn!(
                "{}.{}: cannot convert {}: {}",
                view.name,
                skipped.name,
                skipped.type_name,
                skipped.detail
            );
        }
    }

    if actionable > 0 {
        anyhow::bail!(
            "{} properties across {} components could not be converted",
            actionable,
            components
        );
    }

    tracing::info!("All {} components converted cleanly", components);

    Ok(())
}
