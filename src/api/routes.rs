//! API Routes
//!
//! Configures the Axum router with all student registry endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    create_handler, delete_handler, get_handler, health_handler, list_handler, update_handler,
    AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /students` - List every student
/// - `POST /students` - Create a student
/// - `GET /students/:id` - Fetch one student (`null` when absent)
/// - `PUT /students/:id` - Create or replace the student at `id`
/// - `DELETE /students/:id` - Remove a student
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/students", get(list_handler).post(create_handler))
        .route(
            "/students/:id",
            get(get_handler).put(update_handler).delete(delete_handler),
        )
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
