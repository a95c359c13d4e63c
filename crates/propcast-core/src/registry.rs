//! Component registry over graph documents.
//!
//! Scans a directory of graph documents, loads each one, and provides
//! lookup by component name for conversion.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use propcast_graph::{load_graph, GraphError, MemoryGraph, TypeId};
use walkdir::WalkDir;

use crate::converter::Converter;
use crate::extractor::ComponentNotFound;
use crate::hook::CustomizationHook;
use crate::view::ComponentView;

/// A registry of loaded graphs and the components they export.
#[derive(Debug, Default)]
pub struct ComponentRegistry {
    graphs: Vec<LoadedGraph>,

    /// Component locations by name (lowercase)
    components: HashMap<String, ComponentLocation>,
}

/// A graph document loaded from disk.
#[derive(Debug)]
pub struct LoadedGraph {
    /// Source file path
    pub source_path: PathBuf,

    pub graph: MemoryGraph,
}

#[derive(Debug, Clone)]
struct ComponentLocation {
    name: String,
    graph: usize,
    ty: TypeId,
}

impl ComponentRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a single graph file or scan a directory of them.
    pub fn load(&mut self, path: &Path) -> Result<usize, RegistryError> {
        if path.is_dir() {
            self.scan(path)
        } else {
            self.load_file(path)
        }
    }

    /// Load one graph document. Returns the number of exports registered.
    pub fn load_file(&mut self, path: &Path) -> Result<usize, RegistryError> {
        let graph = load_graph(path)?;
        Ok(self.insert(path, graph))
    }

    /// Scan a directory for graph documents and populate the registry.
    ///
    /// Files that fail to load are logged and skipped.
    pub fn scan(&mut self, graphs_dir: &Path) -> Result<usize, RegistryError> {
        if !graphs_dir.exists() {
            return Err(RegistryError::DirectoryNotFound(
                graphs_dir.display().to_string(),
            ));
        }

        let mut count = 0;

        let mut paths: Vec<PathBuf> = WalkDir::new(graphs_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
            .map(|e| e.into_path())
            .filter(|path| {
                let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
                matches!(ext, "json" | "yaml" | "yml")
            })
            .collect();
        paths.sort();

        for path in paths {
            match load_graph(&path) {
                Ok(graph) => count += self.insert(&path, graph),
                Err(e) => tracing::warn!("Skipping {}: {}", path.display(), e),
            }
        }

        Ok(count)
    }

    /// Register a graph's exports. Returns how many new names became reachable.
    fn insert(&mut self, path: &Path, graph: MemoryGraph) -> usize {
        let index = self.graphs.len();
        let known = self.components.len();

        self.graphs.push(LoadedGraph {
            source_path: path.to_path_buf(),
            graph,
        });

        for entry in self.graphs[index].graph.components() {
            let location = ComponentLocation {
                name: entry.name.clone(),
                graph: index,
                ty: entry.ty,
            };
            if let Some(previous) = self.components.insert(entry.name.to_lowercase(), location) {
                let previous_path = self
                    .graphs
                    .get(previous.graph)
                    .map_or(path, |g| g.source_path.as_path());
                tracing::warn!(
                    "Component {} in {} shadows {} in {}",
                    entry.name,
                    path.display(),
                    previous.name,
                    previous_path.display()
                );
            }
        }

        self.components.len() - known
    }

    /// Loaded graphs, in load order.
    pub fn graphs(&self) -> &[LoadedGraph] {
        &self.graphs
    }

    /// Check if a component exists (case-insensitive).
    pub fn contains(&self, name: &str) -> bool {
        self.components.contains_key(&name.to_lowercase())
    }

    /// Get all registered export names.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.components.values().map(|c| c.name.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Convert a registered component by name (case-insensitive).
    pub fn convert<H: CustomizationHook>(
        &self,
        component_name: &str,
        converter: &Converter<H>,
    ) -> Result<ComponentView, RegistryError> {
        let location = self
            .components
            .get(&component_name.to_lowercase())
            .ok_or_else(|| RegistryError::ComponentNotFound(component_name.to_string()))?;

        let loaded = &self.graphs[location.graph];
        converter
            .convert_component(&loaded.graph, &location.name, location.ty)
            .map_err(|source| RegistryError::NotAComponent {
                name: location.name.clone(),
                source,
            })
    }
}

/// Errors that can occur with the registry.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Graph directory not found: {0}")]
    DirectoryNotFound(String),

    #[error("Component not found: {0}")]
    ComponentNotFound(String),

    #[error("{name} is not a component: {source}")]
    NotAComponent {
        name: String,
        source: ComponentNotFound,
    },

    #[error(transparent)]
    Graph(#[from] GraphError),
}
