//! Application Layer
//!
//! Query use cases over the content store.

pub mod config;
pub mod get_post;
pub mod list_posts;

// Re-exports
pub use config::ContentConfig;
pub use get_post::GetPostUseCase;
pub use list_posts::ListPostsUseCase;
