use std::net::SocketAddr;

use configs::AppConfig;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let app = server::startup::build_app(&AppConfig::default()).await;
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::get(format!("{}/health", app.base_url)).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_catalog_scenario() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    // seeded on startup
    let cars: Vec<Value> = c.get(format!("{}/cars", app.base_url)).send().await?.json().await?;
    assert_eq!(cars.len(), 3);
    let toyota_id = cars
        .iter()
        .find(|car| car["sku"] == 1)
        .and_then(|car| car["id"].as_str())
        .expect("seeded toyota")
        .to_string();

    // create
    let res = c.post(format!("{}/cars", app.base_url))
        .json(&json!({"brand": "Ford", "model": "Focus", "sku": 4}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let ford: Value = res.json().await?;
    let ford_id = ford["id"].as_str().expect("id").to_string();

    // update
    let res = c.patch(format!("{}/cars/{}", app.base_url, ford_id))
        .json(&json!({"model": "Fiesta"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let updated: Value = res.json().await?;
    assert_eq!(updated["brand"], "Ford");
    assert_eq!(updated["model"], "Fiesta");
    assert_eq!(updated["sku"], 4);
    assert_eq!(updated["id"], ford["id"]);

    // delete toyota
    let res = c.delete(format!("{}/cars/{}", app.base_url, toyota_id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let cars: Vec<Value> = c.get(format!("{}/cars", app.base_url)).send().await?.json().await?;
    assert_eq!(cars.len(), 3);

    let res = c.get(format!("{}/cars/sku/1", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}
