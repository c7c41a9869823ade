//! Data Transfer Objects
//!
//! Responses serialize the domain records directly.

use serde::Deserialize;

/// `GET /api/blog/{locale}?category=...`
#[derive(Debug, Default, Deserialize)]
pub struct ListPostsQuery {
    pub category: Option<String>,
}
