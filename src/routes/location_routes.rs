use axum::{
    extract::{Path, State},
    response::Redirect,
    routing::{get, post},
    Form, Json, Router,
};
use crate::controllers::location_controller::LocationController;
use crate::dto::location_dto::{EditLocationView, LocationForm, LocationListView};
use crate::state::AppState;
use crate::utils::errors::AppError;

const LOCATIONS_PAGE: &str = "/add-location";

pub fn create_location_router() -> Router<AppState> {
    Router::new()
        .route(LOCATIONS_PAGE, get(list_locations).post(add_location))
        .route("/edit-location/:loc", get(edit_location_form).post(rename_location))
        .route("/delete-location/:loc", post(delete_location))
}

async fn list_locations(State(state): State<AppState>) -> Json<LocationListView> {
    let controller = LocationController::new(state);
    Json(controller.list().await)
}

async fn add_location(
    State(state): State<AppState>,
    Form(form): Form<LocationForm>,
) -> Result<Redirect, AppError> {
    let controller = LocationController::new(state);
    controller.create(&form.location).await?;
    Ok(Redirect::to(LOCATIONS_PAGE))
}

async fn edit_location_form(
    State(state): State<AppState>,
    Path(loc): Path<String>,
) -> Json<EditLocationView> {
    let controller = LocationController::new(state);
    Json(controller.edit_form(&loc).await)
}

async fn rename_location(
    State(state): State<AppState>,
    Path(loc): Path<String>,
    Form(form): Form<LocationForm>,
) -> Result<Redirect, AppError> {
    let controller = LocationController::new(state);
    controller.rename(&loc, &form.location).await?;
    Ok(Redirect::to(LOCATIONS_PAGE))
}

async fn delete_location(
    State(state): State<AppState>,
    Path(loc): Path<String>,
) -> Result<Redirect, AppError> {
    let controller = LocationController::new(state);
    controller.delete(&loc).await?;
    Ok(Redirect::to(LOCATIONS_PAGE))
}
