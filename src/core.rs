use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use markup5ever_rcdom::RcDom;
use thiserror::Error;
use tracing::{debug, info};

use crate::graph::{normalize_path, AssetGraph, AssetNode};
use crate::hashing::AssetHasher;
use crate::parsers::html::{
    extract_assets, html_to_dom, serialize_document, substitute_assets, ExtractSession, Mark,
    SubstituteSession,
};

/// Errors that abort a revisioning run.
///
/// Per-reference decisions (unparseable values, remote URLs, missing files)
/// are never errors — they just mean "not a dependency". Only whole-document
/// failures and cross-pass inconsistencies escalate.
#[derive(Debug, Error)]
pub enum RevstaticError {
    #[error("unable to read {}: {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unable to write {}: {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An asset accepted during extraction could not be read when its hash
    /// was needed
    #[error("unable to hash {}: {source}", .path.display())]
    HashFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The substitution pass hit state the extraction pass did not record;
    /// the two passes observed different filesystem or tree state
    #[error("extraction and substitution disagree about {detail} in {}", .document.display())]
    PassDisagreement { document: PathBuf, detail: String },

    #[error("unable to determine the project root: {0}")]
    NoRoot(io::Error),
}

/// Configuration options for a revisioning run
#[derive(Default, Clone)]
pub struct RevstaticOptions {
    /// Directory that root-relative references resolve against; defaults to
    /// the current working directory
    pub root: Option<PathBuf>,
    /// Charset label used to decode documents and re-encode output
    pub encoding: Option<String>,
    /// Analyze and report, but write nothing
    pub dry_run: bool,
    /// Rewrite documents without emitting hashed asset copies
    pub no_copy: bool,
    /// Suppress CLI output
    pub silent: bool,
}

/// What a run did: counts for reporting and for asserting in tests
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RevisionSummary {
    pub documents: usize,
    pub assets: usize,
    pub edges: usize,
}

struct PendingDocument {
    path: PathBuf,
    node: Arc<AssetNode>,
    dom: RcDom,
    marks: Vec<Mark>,
}

/// Runs the whole pipeline over a batch of HTML documents.
///
/// Phases never interleave:
///
/// 1. every document is read, parsed, and extracted (dependency edges land
///    in the shared graph, marks are kept per document);
/// 2. every referenced asset is content-hashed — before any file is
///    rewritten, so digests don't depend on document processing order;
/// 3. every document is substituted, serialized, and overwritten in place;
/// 4. each referenced asset is copied to its hashed filename next to the
///    original, so the rewritten references resolve.
pub fn revision_documents(
    options: &RevstaticOptions,
    targets: &[PathBuf],
) -> Result<RevisionSummary, RevstaticError> {
    let root = match &options.root {
        Some(root) => normalize_path(root),
        None => std::env::current_dir().map_err(RevstaticError::NoRoot)?,
    };
    let encoding = options.encoding.clone().unwrap_or_default();
    let graph = AssetGraph::new(root);

    // Phase 1: extraction
    let mut pending: Vec<PendingDocument> = Vec::with_capacity(targets.len());
    for target in targets {
        let path = document_path(graph.root(), target);
        let data = fs::read(&path).map_err(|source| RevstaticError::ReadFailed {
            path: path.clone(),
            source,
        })?;

        let dom = html_to_dom(&data, encoding.clone());
        let node = graph.get(&path);
        let session = ExtractSession {
            graph: &graph,
            document: node.clone(),
        };
        let marks = extract_assets(&session, &dom.document);

        info!(
            "extracted {} dependency-bearing element(s) from {}",
            marks.len(),
            path.display()
        );
        pending.push(PendingDocument {
            path,
            node,
            dom,
            marks,
        });
    }

    // Phase 2: hash every referenced asset while all sources are still
    // untouched
    let hasher = AssetHasher::new();
    let assets = graph.dependency_targets();
    for asset in &assets {
        hasher.digest(asset)?;
    }

    // Phase 3: substitution and write-back
    let mut documents: usize = 0;
    for document in pending {
        let session = SubstituteSession {
            document: document.node.clone(),
            hasher: &hasher,
        };
        substitute_assets(&session, &document.marks)?;

        let output = serialize_document(document.dom, encoding.clone());
        if !options.dry_run {
            fs::write(&document.path, output).map_err(|source| RevstaticError::WriteFailed {
                path: document.path.clone(),
                source,
            })?;
            info!("wrote {}", document.path.display());
        }

        documents += 1;
    }

    // Phase 4: hashed copies
    if !options.no_copy && !options.dry_run {
        for asset in &assets {
            let file_name = hasher.hashed_file_name(asset)?;
            let destination = asset.with_file_name(&file_name);

            if !destination.exists() {
                fs::copy(asset, &destination).map_err(|source| RevstaticError::WriteFailed {
                    path: destination.clone(),
                    source,
                })?;
                debug!(
                    "copied {} -> {}",
                    asset.display(),
                    destination.display()
                );
            }
        }
    }

    Ok(RevisionSummary {
        documents,
        assets: assets.len(),
        edges: graph.edge_count(),
    })
}

/// Absolutizes a document target: relative targets resolve against the root
fn document_path(root: &Path, target: &Path) -> PathBuf {
    if target.is_absolute() {
        normalize_path(target)
    } else {
        normalize_path(&root.join(target))
    }
}
