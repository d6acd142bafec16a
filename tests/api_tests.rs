use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use vehicle_tracker::config::environment::EnvironmentConfig;
use vehicle_tracker::create_app;
use vehicle_tracker::repositories::JsonFileStore;
use vehicle_tracker::state::AppState;

struct TestApp {
    app: Router,
    dir: TempDir,
}

impl TestApp {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let config = EnvironmentConfig {
            data_file: dir.path().join("data.json"),
            static_dir: dir.path().join("static"),
            ..EnvironmentConfig::default()
        };
        let state = AppState::load(config).unwrap();
        Self {
            app: create_app(state),
            dir,
        }
    }

    fn data_file(&self) -> std::path::PathBuf {
        self.dir.path().join("data.json")
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let response = self
            .app
            .clone()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    async fn post(&self, uri: &str, form: &str) -> axum::response::Response {
        self.app
            .clone()
            .oneshot(
                Request::post(uri)
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(form.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }
}

fn location_header(response: &axum::response::Response) -> &str {
    response.headers()[header::LOCATION].to_str().unwrap()
}

fn registrations(body: &Value) -> Vec<String> {
    body["vehicles"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["reg"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::new();
    let (status, body) = app.get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["locations"], 4);
}

#[tokio::test]
async fn test_add_vehicle_redirects_and_persists() {
    let app = TestApp::new();

    let response = app.post("/add", "reg=ab123&location=Showroom&moved_by=+Ana+").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location_header(&response), "/");

    let data = JsonFileStore::new(app.data_file()).load().unwrap();
    assert_eq!(data.vehicles.len(), 1);
    let vehicle = &data.vehicles[0];
    assert_eq!(vehicle.registration, "AB123");
    assert_eq!(vehicle.current_location, "Showroom");
    assert_eq!(vehicle.moved_by, "Ana");
    assert_eq!(vehicle.history.len(), 1);
    assert_eq!(vehicle.history[0].moved_at, vehicle.moved_at);
}

#[tokio::test]
async fn test_add_vehicle_with_empty_fields_is_ignored() {
    let app = TestApp::new();

    let response = app.post("/add", "reg=+&location=Showroom&moved_by=Ana").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location_header(&response), "/");

    let response = app.post("/add", "reg=AB1&location=&moved_by=Ana").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let response = app.post("/add", "").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(!app.data_file().exists());
}

#[tokio::test]
async fn test_dashboard_search_and_cache_headers() {
    let app = TestApp::new();
    app.post("/add", "reg=AB123XY&location=Showroom&moved_by=Ana").await;
    app.post("/add", "reg=ZZ999&location=Body+Fitter&moved_by=Ana").await;

    let response = app
        .app
        .clone()
        .oneshot(Request::get("/?search=ab1").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CACHE_CONTROL],
        "no-cache, no-store, must-revalidate"
    );
    assert_eq!(response.headers()[header::PRAGMA], "no-cache");
    assert_eq!(response.headers()[header::EXPIRES], "0");

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["search"], "AB1");
    assert_eq!(registrations(&body), vec!["AB123XY"]);
    assert_eq!(body["vehicles"][0]["color"], "primary");

    let (_, all) = app.get("/").await;
    assert_eq!(registrations(&all), vec!["AB123XY", "ZZ999"]);
}

#[tokio::test]
async fn test_move_vehicle_appends_history() {
    let app = TestApp::new();
    app.post("/add", "reg=AB123&location=Showroom&moved_by=Ana").await;

    let response = app.post("/move/AB123", "location=Repair+Shop&moved_by=Luis").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let (status, body) = app.get("/move/AB123").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["vehicle"]["location"], "Repair Shop");
    assert_eq!(body["vehicle"]["moved_by"], "Luis");
    assert_eq!(body["vehicle"]["history"].as_array().unwrap().len(), 2);
    assert_eq!(body["vehicle"]["history"][1][0], "Repair Shop");
    assert_eq!(body["locations"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_move_missing_vehicle_is_404_without_writing() {
    let app = TestApp::new();

    let (status, _) = app.get("/move/NOPE").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let response = app.post("/move/NOPE", "location=Showroom&moved_by=Ana").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Sin cuerpo sigue siendo 404, no un error de extracción del formulario
    let response = app.post("/move/NOPE", "").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(!app.data_file().exists());
}

#[tokio::test]
async fn test_move_with_empty_location_is_ignored() {
    let app = TestApp::new();
    app.post("/add", "reg=AB123&location=Showroom&moved_by=Ana").await;
    let before = std::fs::read_to_string(app.data_file()).unwrap();

    let response = app.post("/move/AB123", "location=+&moved_by=Luis").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location_header(&response), "/");

    let after = std::fs::read_to_string(app.data_file()).unwrap();
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_dashboard_does_not_write_when_colors_complete() {
    let app = TestApp::new();

    let (status, _) = app.get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(!app.data_file().exists());

    app.post("/add", "reg=AB1&location=Showroom&moved_by=Ana").await;
    let before = std::fs::metadata(app.data_file()).unwrap().modified().unwrap();
    app.get("/").await;
    let after = std::fs::metadata(app.data_file()).unwrap().modified().unwrap();
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_delete_vehicle_removes_all_matches() {
    let app = TestApp::new();
    app.post("/add", "reg=AB1&location=Showroom&moved_by=Ana").await;
    app.post("/add", "reg=AB1&location=Body+Fitter&moved_by=Ana").await;
    app.post("/add", "reg=CD2&location=Showroom&moved_by=Ana").await;

    let response = app.post("/delete/AB1", "").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let (_, body) = app.get("/").await;
    assert_eq!(registrations(&body), vec!["CD2"]);

    let response = app.post("/delete/NOPE", "").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_add_location_assigns_next_color() {
    let app = TestApp::new();

    let response = app.post("/add-location", "location=Car+Wash").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location_header(&response), "/add-location");

    let (_, body) = app.get("/add-location").await;
    let locations = body["locations"].as_array().unwrap();
    assert_eq!(locations.len(), 5);
    assert_eq!(locations[4]["name"], "Car Wash");
    assert_eq!(locations[4]["color"], "warning");
}

#[tokio::test]
async fn test_duplicate_location_is_silently_ignored() {
    let app = TestApp::new();

    let response = app.post("/add-location", "location=Showroom").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let response = app.post("/add-location", "location=").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let (_, body) = app.get("/add-location").await;
    assert_eq!(body["locations"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_rename_location_cascades() {
    let app = TestApp::new();
    app.post("/add", "reg=AB1&location=Showroom&moved_by=Ana").await;

    let response = app.post("/edit-location/Showroom", "location=Main+Bay").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location_header(&response), "/add-location");

    let (_, body) = app.get("/move/AB1").await;
    assert_eq!(body["vehicle"]["location"], "Main Bay");
    assert_eq!(body["vehicle"]["history"][0][0], "Main Bay");
    assert_eq!(body["vehicle"]["color"], "primary");

    let (_, form) = app.get("/edit-location/Main%20Bay").await;
    assert_eq!(form["location"], "Main Bay");
    assert_eq!(form["color"], "primary");
}

#[tokio::test]
async fn test_rename_to_existing_location_is_noop() {
    let app = TestApp::new();
    app.post("/add", "reg=AB1&location=Showroom&moved_by=Ana").await;
    let before = std::fs::read_to_string(app.data_file()).unwrap();

    let response = app.post("/edit-location/Showroom", "location=Repair+Shop").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let after = std::fs::read_to_string(app.data_file()).unwrap();
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_delete_location_moves_vehicles_to_unknown() {
    let app = TestApp::new();
    app.post("/add", "reg=AB1&location=Repair+Shop&moved_by=Ana").await;

    let response = app.post("/delete-location/Repair%20Shop", "").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let (_, body) = app.get("/move/AB1").await;
    let history = body["vehicle"]["history"].as_array().unwrap();
    assert_eq!(body["vehicle"]["location"], "Unknown");
    assert_eq!(history.len(), 2);
    assert_eq!(history[0][0], "Repair Shop");
    assert_eq!(history[1][0], "Unknown");
    assert_eq!(history[1][1], "system");

    // El dashboard asigna color a Unknown y lo persiste
    let (_, dashboard) = app.get("/").await;
    assert!(dashboard["location_colors"]["Unknown"].is_string());
    let data = JsonFileStore::new(app.data_file()).load().unwrap();
    assert!(data.color_of("Unknown").is_some());
    assert!(!data.has_location("Repair Shop"));
}

#[tokio::test]
async fn test_state_survives_restart() {
    let app = TestApp::new();
    app.post("/add", "reg=AB1&location=Showroom&moved_by=Ana").await;
    app.post("/add-location", "location=Car+Wash").await;

    let config = EnvironmentConfig {
        data_file: app.data_file(),
        ..EnvironmentConfig::default()
    };
    let restarted = create_app(AppState::load(config).unwrap());
    let response = restarted
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(body["vehicles"], 1);
    assert_eq!(body["locations"], 5);
}
