//! Record types for the WordPress REST API resources.
//!
//! Each type maps the JSON keys it knows onto typed fields and keeps
//! everything else in an `extra` map, so records stay usable when the API
//! or a plugin adds fields.

mod comment;
mod page;
mod post;
mod rendered;
mod term;

pub use comment::Comment;
pub use page::Page;
pub use post::Post;
pub use rendered::Rendered;
pub use term::Term;
