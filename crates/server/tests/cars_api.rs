use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use configs::{AppConfig, SeedConfig};
use serde_json::{json, Value};
use tower::Service;
use uuid::Uuid;

async fn build_app(seed: bool) -> Router {
    let mut cfg = AppConfig::default();
    cfg.seed = SeedConfig { on_startup: seed };
    server::startup::build_app(&cfg).await
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> anyhow::Result<(StatusCode, Value)> {
    let mut req = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            req = req.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&v)?)
        }
        None => Body::empty(),
    };
    let resp = app.clone().call(req.body(body)?).await?;
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    Ok((status, value))
}

#[tokio::test]
async fn health_is_ok() -> anyhow::Result<()> {
    let app = build_app(false).await;
    let (status, body) = send(&app, "GET", "/health", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn startup_seed_populates_cars() -> anyhow::Result<()> {
    let app = build_app(true).await;
    let (status, body) = send(&app, "GET", "/cars", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(3));

    let (status, body) = send(&app, "GET", "/cars/sku/2", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["brand"], "Honda");
    assert_eq!(body["model"], "Civic");
    Ok(())
}

#[tokio::test]
async fn car_crud_flow() -> anyhow::Result<()> {
    let app = build_app(false).await;

    // Create
    let (status, created) = send(&app, "POST", "/cars", Some(json!({"brand": "Ford", "model": "Focus", "sku": "4"}))).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["sku"], 4);
    let id = created["id"].as_str().expect("id").to_string();

    // Get
    let (status, found) = send(&app, "GET", &format!("/cars/{id}"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found, created);

    // Update
    let (status, updated) = send(&app, "PATCH", &format!("/cars/{id}"), Some(json!({"model": "Fiesta"}))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated, json!({"id": id, "brand": "Ford", "model": "Fiesta", "sku": 4}));

    // Delete
    let (status, body) = send(&app, "DELETE", &format!("/cars/{id}"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], format!("Car with id {id} deleted"));

    let (status, body) = send(&app, "GET", &format!("/cars/{id}"), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["statusCode"], 404);
    assert_eq!(body["message"], format!("Car with id {id} not found"));
    Ok(())
}

#[tokio::test]
async fn create_reports_itemized_validation_errors() -> anyhow::Result<()> {
    let app = build_app(false).await;
    let (status, body) = send(&app, "POST", "/cars", Some(json!({"brand": "Ford", "model": "Fo", "color": "red"}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Bad Request");
    let msgs = body["message"].as_array().expect("message list");
    assert!(msgs.contains(&json!("property color should not exist")));
    assert!(msgs.contains(&json!("model must be longer than or equal to 3 characters")));
    assert!(msgs.contains(&json!("The SKU must be a number")));

    let (status, body) = send(&app, "GET", "/cars", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
    Ok(())
}

#[tokio::test]
async fn update_with_mismatched_body_id_is_rejected() -> anyhow::Result<()> {
    let app = build_app(true).await;
    let (_, cars) = send(&app, "GET", "/cars", None).await?;
    let id = cars[0]["id"].as_str().expect("id").to_string();

    let other = Uuid::new_v4().to_string();
    let (status, body) = send(&app, "PATCH", &format!("/cars/{id}"), Some(json!({"id": other, "brand": "Lexus"}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Car id is not valid inside body");

    let (_, after) = send(&app, "GET", "/cars", None).await?;
    assert_eq!(after, cars);
    Ok(())
}

#[tokio::test]
async fn bad_path_params_are_rejected() -> anyhow::Result<()> {
    let app = build_app(false).await;

    let (status, body) = send(&app, "GET", "/cars/not-a-uuid", None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Validation failed (uuid v4 is expected)");

    let (status, _) = send(&app, "GET", "/cars/sku/abc", None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, "DELETE", "/cars/123", None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, "DELETE", &format!("/cars/{}", Uuid::new_v4()), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() -> anyhow::Result<()> {
    let app = build_app(false).await;
    let req = Request::builder()
        .method("POST")
        .uri("/cars")
        .header("content-type", "application/json")
        .body(Body::from("{\"brand\": "))?;
    let resp = app.clone().call(req).await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn brand_crud_and_seed_endpoint() -> anyhow::Result<()> {
    let app = build_app(false).await;

    let (status, created) = send(&app, "POST", "/brands", Some(json!({"name": "Tesla"}))).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["name"], "tesla");
    assert!(created.get("updatedAt").is_none());
    let id = created["id"].as_str().expect("id").to_string();

    let (status, updated) = send(&app, "PATCH", &format!("/brands/{id}"), Some(json!({"name": "Rivian"}))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "rivian");
    assert!(updated["updatedAt"].is_i64());

    let (status, _) = send(&app, "DELETE", &format!("/brands/{id}"), None).await?;
    assert_eq!(status, StatusCode::OK);

    // Seed twice: bulk load appends
    let (status, body) = send(&app, "GET", "/seed", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("Seed executed"));
    send(&app, "GET", "/seed", None).await?;
    let (_, brands) = send(&app, "GET", "/brands", None).await?;
    assert_eq!(brands.as_array().map(Vec::len), Some(6));
    let (_, cars) = send(&app, "GET", "/cars", None).await?;
    assert_eq!(cars.as_array().map(Vec::len), Some(6));
    Ok(())
}

#[tokio::test]
async fn openapi_document_is_served() -> anyhow::Result<()> {
    let app = build_app(false).await;
    let (status, body) = send(&app, "GET", "/api-docs/openapi.json", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/cars/{id}"].is_object());
    Ok(())
}
