//! Runs extraction, assembly and customization for components.

use propcast_graph::{MemoryGraph, TypeGraph, TypeId};

use crate::assembler::{assemble, Assembly};
use crate::extractor::{extract_properties, ComponentNotFound};
use crate::hook::{CustomizationHook, NoCustomization};
use crate::options::ConversionOptions;
use crate::view::ComponentView;

/// Converts component types into [`ComponentView`]s.
#[derive(Debug, Default)]
pub struct Converter<H = NoCustomization> {
    options: ConversionOptions,
    hook: H,
}

/// Result of converting every export of one graph.
#[derive(Debug, Default)]
pub struct GraphConversion {
    /// Views of the exports that are components, in export order
    pub views: Vec<ComponentView>,

    /// Exports that turned out not to be components
    pub rejected: Vec<(String, ComponentNotFound)>,
}

impl Converter {
    pub fn new(options: ConversionOptions) -> Self {
        Self {
            options,
            hook: NoCustomization,
        }
    }
}

impl<H: CustomizationHook> Converter<H> {
    pub fn with_hook(options: ConversionOptions, hook: H) -> Self {
        Self { options, hook }
    }

    /// Convert the component typed `ty`, exported as `name`.
    pub fn convert_component<G: TypeGraph + ?Sized>(
        &self,
        graph: &G,
        name: &str,
        ty: TypeId,
    ) -> Result<ComponentView, ComponentNotFound> {
        let properties = extract_properties(graph, ty, &self.options)?;
        let Assembly {
            forwarded,
            skipped,
            warnings,
        } = assemble(graph, &properties, &self.options);

        let mut view = ComponentView {
            name: name.to_string(),
            properties: forwarded,
            skipped: skipped.clone(),
            warnings,
            ..ComponentView::default()
        };
        self.hook.customize(&mut view, &skipped);

        tracing::debug!(
            "Converted {} with {} properties ({} skipped)",
            name,
            view.properties.len(),
            view.skipped.len()
        );

        Ok(view)
    }

    /// Convert every component listed by a graph document.
    pub fn convert_graph(&self, graph: &MemoryGraph) -> GraphConversion {
        let mut conversion = GraphConversion::default();

        for entry in graph.components() {
            match self.convert_component(graph, &entry.name, entry.ty) {
                Ok(view) => conversion.views.push(view),
                Err(e) => {
                    tracing::debug!("Export {} is not a component: {}", entry.name, e);
                    conversion.rejected.push((entry.name.clone(), e));
                }
            }
        }

        conversion
    }
}
