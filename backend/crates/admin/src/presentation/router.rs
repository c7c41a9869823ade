//! Admin Router

use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get, post},
};
use kernel::clock::SystemClock;

use crate::application::config::AdminConfig;
use crate::domain::repository::{LoginAttemptRepository, SessionTokenRepository};
use crate::infra::memory::MemoryAdminStore;
use crate::presentation::handlers::{self, AdminAppState};

/// Create the Admin router with the in-memory store and the system clock
pub fn admin_router(store: MemoryAdminStore, config: AdminConfig) -> Router {
    admin_router_generic(AdminAppState::new(store, config, Arc::new(SystemClock)))
}

/// Create a generic Admin router for any store implementation
pub fn admin_router_generic<R>(state: AdminAppState<R>) -> Router
where
    R: SessionTokenRepository + LoginAttemptRepository + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/login", post(handlers::login::<R>))
        .route("/logout", delete(handlers::logout::<R>))
        .route("/status", get(handlers::session_status::<R>))
        .with_state(state)
}
