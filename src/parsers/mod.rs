//! # Parser module
//!
//! Everything that reads or rewrites document syntax:
//!
//! - `html` - HTML parsing, DOM operations, the extraction and substitution
//!   passes, and serialization

pub mod html;

// Re-export commonly used items for convenience
pub use html::{
    extract_assets, find_elements, get_node_attr, get_node_name, html_to_dom, parse_srcset,
    serialize_document, set_node_attr, substitute_assets, ExtractSession, Mark, SubstituteSession,
};
