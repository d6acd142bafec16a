use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect},
    routing::{get, post},
    Form, Json, Router,
};
use http::header;

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::vehicle_dto::{
    AddVehicleForm, AddVehicleView, MoveVehicleForm, MoveVehicleView, SearchQuery,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard))
        .route("/add", get(add_vehicle_form).post(add_vehicle))
        .route("/move/:reg", get(move_vehicle_form).post(move_vehicle))
        .route("/delete/:reg", post(delete_vehicle))
}

async fn dashboard(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    let controller = VehicleController::new(state);
    let view = controller.dashboard(query.search).await?;
    Ok((
        [
            (header::CACHE_CONTROL, "no-cache, no-store, must-revalidate"),
            (header::PRAGMA, "no-cache"),
            (header::EXPIRES, "0"),
        ],
        Json(view),
    ))
}

async fn add_vehicle_form(State(state): State<AppState>) -> Json<AddVehicleView> {
    let controller = VehicleController::new(state);
    Json(controller.add_form().await)
}

async fn add_vehicle(
    State(state): State<AppState>,
    Form(form): Form<AddVehicleForm>,
) -> Result<Redirect, AppError> {
    let controller = VehicleController::new(state);
    controller.create(form).await?;
    Ok(Redirect::to("/"))
}

async fn move_vehicle_form(
    State(state): State<AppState>,
    Path(reg): Path<String>,
) -> Result<Json<MoveVehicleView>, AppError> {
    let controller = VehicleController::new(state);
    let view = controller.move_form(&reg).await?;
    Ok(Json(view))
}

async fn move_vehicle(
    State(state): State<AppState>,
    Path(reg): Path<String>,
    Form(form): Form<MoveVehicleForm>,
) -> Result<Redirect, AppError> {
    let controller = VehicleController::new(state);
    controller.relocate(&reg, form).await?;
    Ok(Redirect::to("/"))
}

async fn delete_vehicle(
    State(state): State<AppState>,
    Path(reg): Path<String>,
) -> Result<Redirect, AppError> {
    let controller = VehicleController::new(state);
    controller.delete(&reg).await?;
    Ok(Redirect::to("/"))
}
