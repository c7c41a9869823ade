//! Content Repository Reader
//!
//! Read-only access to flat-file blog posts: one directory per locale under a
//! content root, one Markdown file per post with a `---` delimited metadata
//! header.
//!
//! Clean Architecture structure:
//! - `domain/` - Frontmatter parser, post records, locale value object, repository trait
//! - `application/` - Query use cases (list, filter, categories, lookup by slug)
//! - `infra/` - File-system repository
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! Every call reads the current on-disk state; nothing is cached here.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::ContentConfig;
pub use error::{ContentError, ContentResult};
pub use infra::fs::FsPostRepository;
pub use presentation::router::{content_router, content_router_generic};
