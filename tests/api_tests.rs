//! Tests del contrato HTTP de la API

use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use serde_json::{json, Value};
use tempfile::TempDir;

use board_routing::config::environment::EnvironmentConfig;
use board_routing::persistence::PersistenceManager;
use board_routing::routes::board_routes::create_board_router;
use board_routing::services::asset_service::AssetManager;
use board_routing::services::board_service::BoardService;
use board_routing::state::AppState;

// Función helper para crear el server de test sobre un directorio aislado
fn create_test_server(dir: &TempDir) -> TestServer {
    let persistence = PersistenceManager::new(dir.path().join("board_data.json"));
    let (data, _) = persistence.load();
    let assets = AssetManager::new(dir.path().join("uploads"));
    let store = BoardService::new(data, persistence, assets);

    let config = EnvironmentConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        data_file: dir.path().join("board_data.json"),
        uploads_dir: dir.path().join("uploads"),
    };

    let app = create_board_router().with_state(AppState::new(store, config));
    TestServer::new(app).unwrap()
}

fn png_upload(field: &str) -> MultipartForm {
    MultipartForm::new().add_part(
        field,
        Part::bytes(b"\x89PNG\r\n\x1a\nfake-image-bytes".to_vec())
            .file_name("board.png")
            .mime_type("image/png"),
    )
}

#[tokio::test]
async fn current_board_is_null_on_a_fresh_store() {
    let dir = TempDir::new().unwrap();
    let server = create_test_server(&dir);

    let response = server.get("/api/current-board").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["board"], Value::Null);
    assert_eq!(body["routes"], json!([]));
}

#[tokio::test]
async fn get_data_returns_the_full_document() {
    let dir = TempDir::new().unwrap();
    let server = create_test_server(&dir);

    let response = server.get("/api/data").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["boards"], json!([]));
    assert_eq!(body["currentBoard"], Value::Null);
    assert_eq!(body["routes"], json!([]));
}

#[tokio::test]
async fn saving_zones_without_a_board_is_a_400() {
    let dir = TempDir::new().unwrap();
    let server = create_test_server(&dir);

    let response = server
        .post("/api/zones")
        .json(&json!({ "zones": [{ "id": "z1" }] }))
        .expect_failure()
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "No board selected");
}

#[tokio::test]
async fn saving_a_route_without_a_board_is_a_400() {
    let dir = TempDir::new().unwrap();
    let server = create_test_server(&dir);

    let response = server
        .post("/api/routes")
        .json(&json!({ "name": "R1", "selectedZones": [] }))
        .expect_failure()
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn deleting_a_route_without_a_board_is_a_400() {
    let dir = TempDir::new().unwrap();
    let server = create_test_server(&dir);

    let response = server.delete("/api/routes/R1").expect_failure().await;
    response.assert_status_bad_request();
}

#[tokio::test]
async fn uploading_an_image_creates_a_board() {
    let dir = TempDir::new().unwrap();
    let server = create_test_server(&dir);

    let response = server
        .post("/api/upload-image")
        .multipart(png_upload("boardImage"))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["success"], true);
    let board = &body["board"];
    assert!(board["id"].is_string());
    assert!(board["imagePath"]
        .as_str()
        .unwrap()
        .starts_with("/uploads/board-image-"));
    assert_eq!(board["zones"], json!([]));

    // La imagen quedó escrita en el directorio de uploads
    let image_name = board["imagePath"]
        .as_str()
        .unwrap()
        .rsplit('/')
        .next()
        .unwrap()
        .to_string();
    assert!(dir.path().join("uploads").join(image_name).exists());

    // Y el board quedó como actual
    let current: Value = server.get("/api/current-board").await.json();
    assert_eq!(current["board"]["id"], board["id"]);
}

#[tokio::test]
async fn uploading_without_a_file_is_a_400() {
    let dir = TempDir::new().unwrap();
    let server = create_test_server(&dir);

    let form = MultipartForm::new().add_text("otherField", "value");
    let response = server
        .post("/api/upload-image")
        .multipart(form)
        .expect_failure()
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["error"], "No file uploaded");
}

#[tokio::test]
async fn uploading_a_non_image_is_a_400() {
    let dir = TempDir::new().unwrap();
    let server = create_test_server(&dir);

    let form = MultipartForm::new().add_part(
        "boardImage",
        Part::bytes(b"not an image".to_vec())
            .file_name("notes.txt")
            .mime_type("text/plain"),
    );
    let response = server
        .post("/api/upload-image")
        .multipart(form)
        .expect_failure()
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["error"], "Only image files are allowed");
}

#[tokio::test]
async fn deleting_the_board_when_none_is_selected_succeeds() {
    let dir = TempDir::new().unwrap();
    let server = create_test_server(&dir);

    let response = server.delete("/api/board-image").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn full_board_and_route_lifecycle() {
    let dir = TempDir::new().unwrap();
    let server = create_test_server(&dir);

    // Subir imagen → board nuevo
    let upload: Value = server
        .post("/api/upload-image")
        .multipart(png_upload("boardImage"))
        .await
        .json();
    let board_id = upload["board"]["id"].as_str().unwrap().to_string();

    // Guardar zonas
    let response = server
        .post("/api/zones")
        .json(&json!({ "zones": [{ "id": "z1" }, { "id": "z2" }] }))
        .await;
    response.assert_status_ok();

    // Guardar una ruta dos veces con el mismo nombre → upsert
    for zones in [json!([{ "id": "z1" }]), json!([{ "id": "z2" }])] {
        let response = server
            .post("/api/routes")
            .json(&json!({ "name": "R1", "selectedZones": zones }))
            .await;
        response.assert_status_ok();
    }

    let current: Value = server.get("/api/current-board").await.json();
    assert_eq!(current["board"]["id"], board_id.as_str());
    assert_eq!(current["board"]["zones"], json!([{ "id": "z1" }, { "id": "z2" }]));
    assert_eq!(current["routes"].as_array().unwrap().len(), 1);
    assert_eq!(current["routes"][0]["zones"], json!([{ "id": "z2" }]));
    assert_eq!(current["routes"][0]["boardId"], board_id.as_str());

    // Borrar la ruta (idempotente)
    for _ in 0..2 {
        let response = server.delete("/api/routes/R1").await;
        response.assert_status_ok();
    }

    // Borrar el board actual
    let response = server.delete("/api/board-image").await;
    response.assert_status_ok();

    let current: Value = server.get("/api/current-board").await.json();
    assert_eq!(current["board"], Value::Null);
    assert_eq!(current["routes"], json!([]));
}
