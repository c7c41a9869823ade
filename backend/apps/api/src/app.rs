//! Router assembly

use admin::{MemoryAdminStore, admin_router};
use axum::Router;
use axum::http::{HeaderValue, Method, header};
use content::content_router;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;

/// Full application router
pub fn build_router(config: ApiConfig) -> Router {
    let cors = cors_layer(config.frontend_origins);

    Router::new()
        .nest("/api/admin", admin_router(MemoryAdminStore::new(), config.admin))
        .nest("/api/blog", content_router(&config.content))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

fn cors_layer(allowed_origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([header::CONTENT_TYPE, header::ACCEPT]))
        .allow_credentials(true)
}
