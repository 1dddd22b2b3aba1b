//! # Revstatic Library
//!
//! A library (and CLI tool) for revisioning static assets referenced by
//! HTML documents: every `src`, `href`, and `srcset` reference that resolves
//! to a local file becomes an edge in a project-wide dependency graph, and
//! once all referenced assets are content-hashed the same attributes are
//! rewritten in place to point at the hashed, versioned filenames.
//!
//! ## Module organization
//!
//! - `core` - options, errors, and the batch pipeline
//! - `graph` - the shared dependency graph
//! - `hashing` - content digests and hashed filename construction
//! - `parsers` - HTML parsing, the extraction and substitution passes
//! - `utils` - URL reference splitting helpers

pub mod core;
pub mod graph;
pub mod hashing;
pub mod parsers;
pub mod utils;

// Re-export commonly used items for convenience
pub use crate::core::*;
pub use crate::graph::*;
pub use crate::hashing::*;
pub use crate::parsers::*;
pub use crate::utils::*;
