//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (SessionToken, RateLimitRecord)
//! - Domain services (password verification)
//! - Repository traits (token and login-attempt stores)

pub mod entities;
pub mod repository;
pub mod services;
