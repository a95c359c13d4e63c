//! CLI subcommands.

pub mod check;
pub mod convert;
pub mod init;

use std::path::Path;

use anyhow::{Context, Result};
use propcast_core::{ComponentRegistry, Converter, GraphConversion, OverrideHook};
use rayon::prelude::*;

use crate::config::ConfigFile;

/// Load every graph under `input` and convert the components they export.
///
/// Graphs are independent, so they are converted in parallel; results keep
/// the registry's load order.
pub fn convert_input(config: ConfigFile, input: &Path) -> Result<Vec<GraphConversion>> {
    let mut registry = ComponentRegistry::new();
    let exports = registry
        .load(input)
        .with_context(|| format!("Failed to load graphs from {}", input.display()))?;

    tracing::info!(
        "Loaded {} exports from {} graph(s)",
        exports,
        registry.graphs().len()
    );

    let converter = Converter::with_hook(config.conversion, OverrideHook::new(config.components));

    let conversions: Vec<GraphConversion> = registry
        .graphs()
        .par_iter()
        .map(|loaded| converter.convert_graph(&loaded.graph))
        .collect();

    for (loaded, conversion) in registry.graphs().iter().zip(&conversions) {
        for (name, reason) in &conversion.rejected {
            tracing::info!(
                "Skipping export {} in {}: {}",
                name,
                loaded.source_path.display(),
                reason
            );
        }
    }

    Ok(conversions)
}
