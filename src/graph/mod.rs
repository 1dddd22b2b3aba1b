//! # Dependency graph module
//!
//! The project-wide asset graph shared by every document in a run. Nodes are
//! keyed by normalized absolute path and created on first lookup; edges
//! record "document depends on asset". The graph hands out `Arc`-shared
//! nodes and accepts edge insertion through `&self`, so extraction of
//! several documents may register edges concurrently.

use std::path::{Component, Path, PathBuf};
use std::sync::{Arc, Mutex};

use dashmap::DashMap;
use tracing::debug;

use crate::utils::url::decode_reference;

/// Lexically normalizes a path, folding `.` and `..` components.
///
/// Purely textual on purpose: the paths being resolved usually don't exist
/// yet (or never will, for remote references), so `fs::canonicalize` is not
/// an option here.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    normalized.push(component.as_os_str());
                }
            }
            _ => normalized.push(component.as_os_str()),
        }
    }

    normalized
}

/// A single file participating in the build: an HTML document or an asset it
/// references. Owns the outgoing dependency edges recorded for it.
pub struct AssetNode {
    path: PathBuf,
    root: PathBuf,
    dependencies: Mutex<Vec<PathBuf>>,
}

impl AssetNode {
    fn new(path: PathBuf, root: PathBuf) -> AssetNode {
        AssetNode {
            path,
            root,
            dependencies: Mutex::new(Vec::new()),
        }
    }

    /// Absolute path of the file this node stands for
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolves a raw reference found in this file against its location.
    ///
    /// References are percent-decoded first; a leading `/` resolves against
    /// the graph root, anything else against this file's directory. The
    /// result is lexically normalized, not required to exist.
    pub fn resolve(&self, reference: &str) -> PathBuf {
        let decoded = decode_reference(reference);

        let joined = if let Some(root_relative) = decoded.strip_prefix('/') {
            self.root.join(root_relative)
        } else {
            self.path
                .parent()
                .unwrap_or(self.root.as_path())
                .join(&decoded)
        };

        normalize_path(&joined)
    }

    /// Records an edge from this node to `target`. Registering the same
    /// dependency twice keeps a single edge.
    pub fn depend_on(&self, target: &AssetNode) {
        let mut dependencies = self.dependencies.lock().unwrap();
        if !dependencies.iter().any(|path| path == &target.path) {
            debug!(
                "dependency edge: {} -> {}",
                self.path.display(),
                target.path.display()
            );
            dependencies.push(target.path.clone());
        }
    }

    /// Paths this node depends on, in registration order
    pub fn dependencies(&self) -> Vec<PathBuf> {
        self.dependencies.lock().unwrap().clone()
    }
}

/// Project-wide dependency graph with get-or-create node lookup
pub struct AssetGraph {
    root: PathBuf,
    nodes: DashMap<PathBuf, Arc<AssetNode>>,
}

impl AssetGraph {
    pub fn new(root: PathBuf) -> AssetGraph {
        AssetGraph {
            root: normalize_path(&root),
            nodes: DashMap::new(),
        }
    }

    /// Directory that root-relative references resolve against
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the node for `path`, creating it on first lookup
    pub fn get(&self, path: &Path) -> Arc<AssetNode> {
        let key = normalize_path(path);

        self.nodes
            .entry(key.clone())
            .or_insert_with(|| Arc::new(AssetNode::new(key, self.root.clone())))
            .clone()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Total number of dependency edges across all nodes
    pub fn edge_count(&self) -> usize {
        self.nodes
            .iter()
            .map(|entry| entry.value().dependencies().len())
            .sum()
    }

    /// Sorted, deduplicated union of every node's dependencies; these are
    /// the files the pipeline must hash and copy
    pub fn dependency_targets(&self) -> Vec<PathBuf> {
        let mut targets: Vec<PathBuf> = self
            .nodes
            .iter()
            .flat_map(|entry| entry.value().dependencies())
            .collect();

        targets.sort();
        targets.dedup();
        targets
    }
}
