//! PropTypes validator descriptors.

use std::collections::HashSet;
use std::fmt;

/// A runtime validator, rendered as a `PropTypes` expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validator {
    Bool,
    Number,
    String,
    Any,
    Node,
    Object,
    ArrayOf(Box<Validator>),
    /// Exact literal values, as rendered by the checker
    OneOf(Vec<String>),
    OneOfType(Vec<Validator>),
}

impl Validator {
    pub fn is_any(&self) -> bool {
        matches!(self, Validator::Any)
    }
}

impl fmt::Display for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Validator::Bool => f.write_str("PropTypes.bool"),
            Validator::Number => f.write_str("PropTypes.number"),
            Validator::String => f.write_str("PropTypes.string"),
            Validator::Any => f.write_str("PropTypes.any"),
            Validator::Node => f.write_str("PropTypes.node"),
            Validator::Object => f.write_str("PropTypes.object"),
            Validator::ArrayOf(element) => write!(f, "PropTypes.arrayOf({element})"),
            Validator::OneOf(values) => write!(f, "PropTypes.oneOf([{}])", values.join(", ")),
            Validator::OneOfType(types) => {
                let types = types.iter().map(|t| t.to_string()).collect::<Vec<_>>();
                write!(f, "PropTypes.oneOfType([{}])", types.join(", "))
            }
        }
    }
}

/// Insertion-ordered set keyed by a string rendering. First occurrence wins.
#[derive(Debug)]
pub(crate) struct OrderedSet<T> {
    items: Vec<T>,
    seen: HashSet<String>,
}

impl<T> OrderedSet<T> {
    pub(crate) fn new() -> Self {
        Self {
            items: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Insert `item` unless an item with the same key is already present.
    pub(crate) fn insert(&mut self, key: String, item: T) -> bool {
        if self.seen.insert(key) {
            self.items.push(item);
            true
        } else {
            false
        }
    }

    pub(crate) fn into_vec(self) -> Vec<T> {
        self.items
    }
}
