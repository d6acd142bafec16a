//! Vehicle Tracker
//!
//! Registro de vehículos que se mueven entre ubicaciones del taller, con
//! historial por vehículo y persistencia en un fichero JSON.

pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;

use axum::{extract::State, routing::get, Json, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use dto::location_dto::HealthResponse;
use middleware::cors::cors_for;
use state::AppState;

/// Router completo de la aplicación
pub fn create_app(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();
    let cors = cors_for(&state.config);

    Router::new()
        .route("/health", get(health))
        .merge(routes::vehicle_routes::create_vehicle_router())
        .merge(routes::location_routes::create_location_router())
        .merge(routes::static_routes::create_static_router(&static_dir))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

/// Health check simple
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let data = state.read().await;
    Json(HealthResponse {
        status: "ok",
        vehicles: data.vehicles.len(),
        locations: data.locations.len(),
    })
}
