use std::path::Path;

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

use crate::state::AppState;

/// Ficheros de la PWA y el directorio `/static`
pub fn create_static_router(static_dir: &Path) -> Router<AppState> {
    Router::new()
        .route_service("/manifest.json", ServeFile::new(static_dir.join("manifest.json")))
        .route_service(
            "/service-worker.js",
            ServeFile::new(static_dir.join("service-worker.js")),
        )
        .nest_service("/static", ServeDir::new(static_dir))
}
