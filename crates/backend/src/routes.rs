use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;

/// All application routes
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // Order list and mutations
        .route("/", get(handlers::orders::list))
        .route("/add", post(handlers::orders::add))
        .route("/update/:id", post(handlers::orders::update_status))
        .route("/delete/:id", post(handlers::orders::delete))
        // Session language
        .route("/set-language", post(handlers::language::set_language))
        // Summary dashboard
        .route("/dashboard", get(handlers::dashboard::summary))
}
