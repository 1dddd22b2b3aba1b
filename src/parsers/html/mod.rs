//! HTML analysis and rewriting.
//!
//! Split into focused submodules:
//!
//! - `dom`: parsing and basic DOM operations
//! - `srcset`: candidate-list grammar for responsive image attributes
//! - `handlers`: the attribute handler table shared by both passes
//! - `extract`: the extraction pass (marks + dependency edges)
//! - `substitute`: the substitution pass (hashed rewrites)
//! - `serializer`: serialization back to bytes

pub mod dom;
pub mod extract;
pub mod handlers;
pub mod serializer;
pub mod srcset;
pub mod substitute;

// Re-export the main public API
pub use dom::{find_elements, get_node_attr, get_node_name, html_to_dom, set_node_attr};
pub use extract::{extract_assets, ExtractSession, Mark};
pub use handlers::{handler_for, AttrHandler, AttrShape, Resolver, HANDLERS};
pub use serializer::serialize_document;
pub use srcset::{parse_srcset, SrcsetCandidate};
pub use substitute::{substitute_assets, SubstituteSession};
