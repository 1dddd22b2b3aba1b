//! The extraction pass: one document-order walk over the element tree that
//! registers dependency edges and produces the mark list consumed by the
//! substitution pass. The mark list is the single source of truth for what
//! gets rewritten — substitution never re-evaluates qualification.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use markup5ever_rcdom::Handle;
use tracing::debug;

use super::dom::{find_elements, get_node_attr};
use super::handlers::{Resolver, HANDLERS};
use crate::graph::{AssetGraph, AssetNode};

/// An element recorded during extraction, together with the attribute names
/// on it that held at least one local dependency. Attribute names appear in
/// handler-table order; an element appears in the mark list at most once and
/// only with a non-empty attribute set.
pub struct Mark {
    pub node: Handle,
    pub attrs: Vec<&'static str>,
}

/// Extraction-side view of one document: its graph node plus the shared
/// graph that dependency targets are created in
pub struct ExtractSession<'a> {
    pub graph: &'a AssetGraph,
    pub document: Arc<AssetNode>,
}

impl Resolver for ExtractSession<'_> {
    fn resolve(&self, reference: &str) -> PathBuf {
        self.document.resolve(reference)
    }

    fn is_local_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}

/// Walks the element tree rooted at `node` in document order, classifies
/// every handler-table attribute present, registers a dependency edge per
/// local file referenced, and returns the marks for substitution.
///
/// References that fail to parse, resolve outside the filesystem (remote
/// URLs, data URIs, bare fragments), or name files that don't exist are
/// silently ignored — they are non-dependencies, not errors.
pub fn extract_assets(session: &ExtractSession, node: &Handle) -> Vec<Mark> {
    let mut marks: Vec<Mark> = Vec::new();

    let elements = find_elements(node, &|element| {
        HANDLERS
            .iter()
            .any(|handler| get_node_attr(element, handler.attr).is_some())
    });

    for element in elements {
        let mut attrs: Vec<&'static str> = Vec::new();

        for handler in &HANDLERS {
            if let Some(value) = get_node_attr(&element, handler.attr) {
                let paths = handler.shape.classify(&value, session);
                if paths.is_empty() {
                    continue;
                }

                for path in &paths {
                    let target = session.graph.get(path);
                    session.document.depend_on(&target);
                }

                attrs.push(handler.attr);
            }
        }

        if !attrs.is_empty() {
            marks.push(Mark {
                node: element,
                attrs,
            });
        }
    }

    debug!(
        "marked {} element(s) in {}",
        marks.len(),
        session.document.path().display()
    );

    marks
}
