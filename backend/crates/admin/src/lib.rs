//! Admin Session Guard
//!
//! Clean Architecture structure:
//! - `domain/` - Session token entity, store traits, password check
//! - `application/` - Use cases (sign in, sign out, session check, rate limiting)
//! - `infra/` - In-memory store implementation
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Security Model
//! - A single shared password gates the admin editing surface
//! - Password comparison is constant-time and fails closed
//! - 5 failures per client IP inside 15 minutes block further attempts
//! - Successful login issues a 256-bit random bearer token valid for 24 hours,
//!   delivered as an HttpOnly, SameSite=Strict cookie
//! - Expiry is checked lazily on access; no background sweeper runs
//! - State is per process: restarts drop all sessions and counters, and
//!   separate instances do not share state

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AdminConfig;
pub use error::{AdminError, AdminResult};
pub use infra::memory::MemoryAdminStore;
pub use presentation::router::{admin_router, admin_router_generic};
