//! Convert command: writes one view per component.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use propcast_core::ComponentView;

use crate::config::{load_config, OutputFormat};

/// Run the convert command.
pub fn run(
    config_path: &Path,
    input: PathBuf,
    output: Option<PathBuf>,
    format: Option<OutputFormat>,
) -> Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let output_dir = output.or_else(|| config.output.dir.clone());
    let format = format.unwrap_or(config.output.format);

    let conversions = super::convert_input(config, &input)?;
    let views: Vec<&ComponentView> = conversions.iter().flat_map(|c| &c.views).collect();

    match &output_dir {
        Some(dir) => {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
            for view in &views {
                let path = dir.join(format!("{}.{}", view.name, format.extension()));
                fs::write(&path, serialize(view, format)?)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                tracing::debug!("Wrote {}", path.display());
            }
        }
        None => {
            let mut stdout = io::stdout().lock();
            for view in &views {
                stdout.write_all(serialize(view, format)?.as_bytes())?;
                stdout.write_all(b"\n")?;
            }
        }
    }

    let actionable: usize = views.iter().map(|v| v.skip_summary().len()).sum();
    for view in &views {
        for skipped in view.skip_summary() {
            tracing::warn!(
                "{}: skipped {} ({}): {}",
                view.name,
                skipped.name,
                skipped.type_name,
                skipped.detail
            );
        }
    }

    tracing::info!(
        "Converted {} components in {}ms ({} properties need attention)",
        views.len(),
        start.elapsed().as_millis(),
        actionable
    );

    if let Some(dir) = output_dir {
        tracing::info!("Output: {}", dir.display());
    }

    Ok(())
}

fn serialize(view: &ComponentView, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(view).context("Failed to serialize view as JSON")
        }
        OutputFormat::Yaml => {
            serde_yaml::to_string(view).context("Failed to serialize view as YAML")
        }
    }
}
