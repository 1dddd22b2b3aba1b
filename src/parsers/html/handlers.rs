//! The attribute handler table: which attribute names can carry local
//! dependencies, and what syntactic shape each one holds. Both the
//! extraction and substitution passes drive off this table in its
//! declaration order, so the two always agree on what qualifies.

use std::path::{Path, PathBuf};

use super::srcset::parse_srcset;
use crate::utils::url::split_url_ref;

/// How raw references map onto the filesystem during classification.
///
/// Extraction implements this over the document's graph node and the real
/// filesystem; classification itself stays pure, so tests can substitute an
/// in-memory view.
pub trait Resolver {
    /// Resolves a reference (as written in the document) to an absolute path
    fn resolve(&self, reference: &str) -> PathBuf;

    /// Whether an absolute path names an existing local file
    fn is_local_file(&self, path: &Path) -> bool;
}

/// Syntactic shape of a dependency-bearing attribute value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrShape {
    /// The whole value is one URL reference
    Single,
    /// The value is a comma-separated list of URL + descriptor entries
    Srcset,
}

pub struct AttrHandler {
    pub attr: &'static str,
    pub shape: AttrShape,
}

/// The fixed handler table. Order matters: marks record qualifying
/// attribute names in this order, and substitution replays them in the same
/// order.
pub const HANDLERS: [AttrHandler; 3] = [
    AttrHandler {
        attr: "src",
        shape: AttrShape::Single,
    },
    AttrHandler {
        attr: "href",
        shape: AttrShape::Single,
    },
    AttrHandler {
        attr: "srcset",
        shape: AttrShape::Srcset,
    },
];

/// Looks up the handler for an attribute name
pub fn handler_for(attr_name: &str) -> Option<&'static AttrHandler> {
    HANDLERS.iter().find(|handler| handler.attr == attr_name)
}

impl AttrShape {
    /// Classifies an attribute value: the absolute paths of the local files
    /// it references, or an empty list when it references none.
    ///
    /// Classification is pure with respect to the dependency graph —
    /// unparseable values, remote URLs, and references to files that don't
    /// exist all classify to nothing, never to an error. Edge registration
    /// is the extraction pass's explicit follow-up step.
    pub fn classify(&self, value: &str, resolver: &dyn Resolver) -> Vec<PathBuf> {
        match self {
            AttrShape::Single => split_url_ref(value)
                .map(|url_ref| resolver.resolve(url_ref.path))
                .filter(|path| resolver.is_local_file(path))
                .into_iter()
                .collect(),
            AttrShape::Srcset => parse_srcset(value)
                .iter()
                .filter_map(|candidate| split_url_ref(candidate.url))
                .map(|url_ref| resolver.resolve(url_ref.path))
                .filter(|path| resolver.is_local_file(path))
                .collect(),
        }
    }
}
