//! The substitution pass: replays the mark list produced by extraction and
//! rewrites each marked attribute to point at hashed filenames. Trusts the
//! marks completely — a marked attribute that can no longer be rewritten
//! means the two passes observed different state, which is fatal.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use super::dom::{get_node_attr, set_node_attr};
use super::extract::Mark;
use super::handlers::{handler_for, AttrShape, Resolver};
use super::srcset::parse_srcset;
use crate::core::RevstaticError;
use crate::graph::AssetNode;
use crate::hashing::AssetHasher;
use crate::utils::url::split_url_ref;

/// Substitution-side view of one document: its graph node plus the hashing
/// collaborator that answers for every referenced asset
pub struct SubstituteSession<'a> {
    pub document: Arc<AssetNode>,
    pub hasher: &'a AssetHasher,
}

impl Resolver for SubstituteSession<'_> {
    fn resolve(&self, reference: &str) -> PathBuf {
        self.document.resolve(reference)
    }

    fn is_local_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}

/// Rewrites every marked attribute, in mark order, to its hashed form.
///
/// Attributes not present in any mark are left untouched. Query strings,
/// fragments, and srcset descriptors survive byte-for-byte; only path
/// portions change.
pub fn substitute_assets(
    session: &SubstituteSession,
    marks: &[Mark],
) -> Result<(), RevstaticError> {
    for mark in marks {
        for attr_name in &mark.attrs {
            let handler = handler_for(attr_name)
                .ok_or_else(|| disagreement(session, format!("the {attr_name} attribute")))?;

            let value = get_node_attr(&mark.node, handler.attr).ok_or_else(|| {
                disagreement(session, format!("the missing {attr_name} attribute"))
            })?;

            let rewritten = match handler.shape {
                AttrShape::Single => rewrite_single(session, handler.attr, &value)?,
                AttrShape::Srcset => rewrite_srcset(session, &value)?,
            };

            debug!(
                "rewrote {} in {}: {:?} -> {:?}",
                attr_name,
                session.document.path().display(),
                value,
                rewritten
            );
            set_node_attr(&mark.node, handler.attr, Some(rewritten));
        }
    }

    Ok(())
}

fn disagreement(session: &SubstituteSession, detail: String) -> RevstaticError {
    RevstaticError::PassDisagreement {
        document: session.document.path().to_path_buf(),
        detail,
    }
}

/// Replaces the path portion of a single-reference value, reattaching the
/// query/fragment trailing portion unchanged
fn rewrite_single(
    session: &SubstituteSession,
    attr_name: &str,
    value: &str,
) -> Result<String, RevstaticError> {
    let url_ref = split_url_ref(value).ok_or_else(|| {
        disagreement(
            session,
            format!("the unparseable {attr_name} value {value:?}"),
        )
    })?;

    let target = session.resolve(url_ref.path);
    let hashed = session.hasher.hashed_url(url_ref.path, &target)?;

    Ok(url_ref.with_path(&hashed))
}

/// Rebuilds a candidate list with every local entry's URL rewritten.
///
/// Entries whose URL does not resolve to a local file are dropped from the
/// list entirely rather than left as dead references; surviving entries keep
/// their relative order and descriptors.
fn rewrite_srcset(session: &SubstituteSession, value: &str) -> Result<String, RevstaticError> {
    let mut entries: Vec<String> = Vec::new();

    for candidate in parse_srcset(value) {
        let Some(url_ref) = split_url_ref(candidate.url) else {
            continue;
        };

        let target = session.resolve(url_ref.path);
        if !session.is_local_file(&target) {
            continue;
        }

        let hashed = session.hasher.hashed_url(url_ref.path, &target)?;
        let mut entry = url_ref.with_path(&hashed);
        if !candidate.descriptor.is_empty() {
            entry.push(' ');
            entry.push_str(candidate.descriptor);
        }

        entries.push(entry);
    }

    Ok(entries.join(", "))
}
