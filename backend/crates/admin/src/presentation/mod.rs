//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::AdminAppState;
pub use middleware::{ADMIN_AUTH_REQUIRED_HEADER, require_admin_session};
pub use router::{admin_router, admin_router_generic};
