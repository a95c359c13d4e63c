//! Maps resolved TypeScript types onto PropTypes validators.
//!
//! Rules are tried in a fixed order and the first match wins: primitives,
//! `any`/`unknown`, arrays, the node marker, style generics, intersections,
//! unions, and finally plain objects. Anything left over is reported as
//! unclassifiable together with the checker's rendering of the type.

use propcast_graph::{TypeFlags, TypeGraph, TypeId};

use crate::options::ConversionOptions;
use crate::validator::{OrderedSet, Validator};

/// Why a type could not be mapped to a validator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassifyError {
    #[error("{type_name} is a function type")]
    FunctionType { type_name: String },

    #[error("Failed to find propType for {type_name}: {reason}")]
    Unclassifiable { type_name: String, reason: String },
}

/// Classifies types of a single graph.
pub struct Classifier<'a, G: TypeGraph + ?Sized> {
    graph: &'a G,
    options: &'a ConversionOptions,
}

impl<'a, G: TypeGraph + ?Sized> Classifier<'a, G> {
    pub fn new(graph: &'a G, options: &'a ConversionOptions) -> Self {
        Self { graph, options }
    }

    /// Find the validator for `ty`.
    pub fn classify(&self, ty: TypeId) -> Result<Validator, ClassifyError> {
        let mut in_progress = Vec::new();
        self.classify_in(ty, &mut in_progress)
    }

    /// Whether `ty` is the "anything renderable" marker.
    pub fn is_node(&self, ty: TypeId) -> bool {
        self.options
            .is_node_marker(&self.graph.type_to_string(ty))
    }

    fn classify_in(
        &self,
        ty: TypeId,
        in_progress: &mut Vec<TypeId>,
    ) -> Result<Validator, ClassifyError> {
        if in_progress.contains(&ty) {
            return Err(self.unclassifiable(ty, "circular type reference"));
        }

        in_progress.push(ty);
        let result = self.apply_rules(ty, in_progress);
        in_progress.pop();
        result
    }

    fn apply_rules(
        &self,
        ty: TypeId,
        in_progress: &mut Vec<TypeId>,
    ) -> Result<Validator, ClassifyError> {
        let flags = self.graph.flags(ty);
        let rendered = self.graph.type_to_string(ty);

        // Boolean props are frequently narrowed to `false` by defaults.
        if flags.contains(TypeFlags::BOOLEAN) || rendered == "false" {
            return Ok(Validator::Bool);
        }

        if flags.intersects(TypeFlags::NUMBER_LIKE) {
            return Ok(Validator::Number);
        }

        if flags.intersects(TypeFlags::STRING_LIKE) {
            return Ok(Validator::String);
        }

        if flags.intersects(TypeFlags::ANY | TypeFlags::UNKNOWN) {
            return Ok(Validator::Any);
        }

        if self
            .graph
            .symbol_name(ty)
            .is_some_and(|s| self.options.is_array_marker(s))
        {
            return self.classify_array(ty, in_progress);
        }

        if self.options.is_node_marker(&rendered) {
            return Ok(Validator::Node);
        }

        if self.options.is_style_marker(&rendered) {
            return Ok(Validator::Object);
        }

        if let Some(branches) = self.graph.intersection_types(ty) {
            return self.classify_intersection(ty, branches, in_progress);
        }

        if let Some(branches) = self.graph.union_types(ty) {
            return self.classify_union(ty, branches, in_progress);
        }

        if flags.contains(TypeFlags::OBJECT) {
            if !self.graph.call_signatures(ty).is_empty() {
                return Err(ClassifyError::FunctionType {
                    type_name: rendered,
                });
            }
            // Per-field shapes are not mapped; any object is accepted.
            return Ok(Validator::Any);
        }

        Err(ClassifyError::Unclassifiable {
            type_name: rendered,
            reason: "no validator matches this type".to_string(),
        })
    }

    /// Element failures fail the whole array.
    fn classify_array(
        &self,
        ty: TypeId,
        in_progress: &mut Vec<TypeId>,
    ) -> Result<Validator, ClassifyError> {
        match self.graph.type_arguments(ty) {
            [element] => {
                let element = self.classify_in(*element, in_progress)?;
                Ok(Validator::ArrayOf(Box::new(element)))
            }
            args => Err(self.unclassifiable(
                ty,
                &format!("expected one element type argument, found {}", args.len()),
            )),
        }
    }

    fn classify_intersection(
        &self,
        ty: TypeId,
        branches: &[TypeId],
        in_progress: &mut Vec<TypeId>,
    ) -> Result<Validator, ClassifyError> {
        let mut classified = Vec::new();

        for &branch in branches {
            let outcome = if self.graph.flags(branch).is_literal() {
                Ok(Validator::OneOf(vec![self.graph.type_to_string(branch)]))
            } else {
                self.classify_in(branch, in_progress)
            };

            match outcome {
                Ok(validator) => classified.push(validator),
                Err(e) => tracing::debug!("Dropping intersection branch: {}", e),
            }
        }

        let mut classified = classified.into_iter();
        let first = classified
            .next()
            .ok_or_else(|| self.unclassifiable(ty, "no intersection branch could be classified"))?;

        if !first.is_any() {
            return Ok(first);
        }

        // Intersections mostly narrow a typed base; keep the first real type.
        Ok(classified.find(|v| !v.is_any()).unwrap_or(first))
    }

    fn classify_union(
        &self,
        ty: TypeId,
        branches: &[TypeId],
        in_progress: &mut Vec<TypeId>,
    ) -> Result<Validator, ClassifyError> {
        let has_literal = |value: bool| {
            branches
                .iter()
                .any(|b| self.is_boolean_literal(*b, value))
        };
        let boolean_pair = has_literal(true) && has_literal(false);

        let mut parts: Vec<Validator> = Vec::new();
        let mut literal_slot: Option<usize> = None;
        let mut literals = OrderedSet::new();

        for &branch in branches {
            let flags = self.graph.flags(branch);

            if boolean_pair && flags.contains(TypeFlags::BOOLEAN_LITERAL) {
                parts.push(Validator::Bool);
                continue;
            }

            if flags.is_literal() {
                if literal_slot.is_none() {
                    literal_slot = Some(parts.len());
                    parts.push(Validator::OneOf(Vec::new()));
                }
                let value = self.graph.type_to_string(branch);
                literals.insert(value.clone(), value);
                continue;
            }

            match self.classify_in(branch, in_progress) {
                Ok(validator) => parts.push(validator),
                Err(e) => tracing::debug!("Dropping union branch: {}", e),
            }
        }

        if let Some(slot) = literal_slot {
            parts[slot] = Validator::OneOf(literals.into_vec());
        }

        if parts.is_empty() {
            tracing::warn!(
                "No branch of {} could be classified, using PropTypes.any",
                self.graph.type_to_string(ty)
            );
            return Ok(Validator::Any);
        }

        let mut unique = OrderedSet::new();
        for part in parts {
            unique.insert(part.to_string(), part);
        }

        let mut unique = unique.into_vec();
        if unique.len() == 1 {
            return Ok(unique.remove(0));
        }

        Ok(Validator::OneOfType(unique))
    }

    fn is_boolean_literal(&self, ty: TypeId, value: bool) -> bool {
        self.graph.flags(ty).contains(TypeFlags::BOOLEAN_LITERAL)
            && self.graph.type_to_string(ty) == if value { "true" } else { "false" }
    }

    fn unclassifiable(&self, ty: TypeId, reason: &str) -> ClassifyError {
        ClassifyError::Unclassifiable {
            type_name: self.graph.type_to_string(ty),
            reason: reason.to_string(),
        }
    }
}
