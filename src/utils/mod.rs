//! # Utility module
//!
//! Shared helpers used across the crate:
//!
//! - URL reference splitting (path vs query/fragment)
//! - Percent-decoding of references into filesystem paths

pub mod url;

// Re-export commonly used items for convenience
pub use url::{decode_reference, split_url_ref, UrlRef, WHITESPACES};
