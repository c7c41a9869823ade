//! Domain Layer
//!
//! - Frontmatter parser (raw text to loose key/value map plus body)
//! - Post records (strict projection of the loose map, with defaults)
//! - Locale value object
//! - Repository trait

pub mod entities;
pub mod frontmatter;
pub mod repository;
pub mod value_objects;
