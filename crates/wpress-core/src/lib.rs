//! wpress-core - Typed records for WordPress REST API payloads.
//!
//! This crate turns decoded JSON from the WordPress REST API into typed
//! records. It does no networking: a transport fetches the JSON, and this
//! crate shapes it.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use wpress_core::{Model, Post};
//!
//! # fn example() -> Result<(), wpress_core::Error> {
//! let posts = Post::parse_list(&[
//!     json!({"id": 5, "date": "2020-01-02T03:04:05", "title": {"rendered": "Hi"}}),
//!     json!(null),
//!     json!({"id": 9, "slug": "second"}),
//! ])?;
//!
//! assert_eq!(posts.len(), 2);
//! assert_eq!(posts.ids(), vec![5, 9]);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod error;
pub mod model;
pub mod resources;
pub mod timestamp;

// Re-export primary types at crate root for convenience
pub use error::Error;
pub use model::{Identified, Model, ResultSet};
pub use resources::{Comment, Page, Post, Rendered, Term};
pub use timestamp::{Timestamp, TimestampError, parse_iso8601};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
