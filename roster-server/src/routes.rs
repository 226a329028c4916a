use std::path::Path;

use axum::{
    Router,
    response::Redirect,
    routing::{delete, get, post},
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::handlers;
use crate::state::AppState;

/// Assemble the application router.
///
/// `static_dir` is where the landing page assets are served from; requests
/// for files it does not contain get a plain 404.
pub fn create_app(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/", get(root_redirect))
        .route("/health", get(handlers::health))
        // Roster API
        .route("/activities", get(handlers::list_activities))
        .route("/activities/{name}/signup", post(handlers::signup))
        .route("/activities/{name}/unregister", delete(handlers::unregister))
        // Bundled landing page
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root_redirect() -> Redirect {
    Redirect::temporary("/static/index.html")
}
