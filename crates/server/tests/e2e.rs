use std::net::SocketAddr;

use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use configs::DatabaseConfig;
use server::startup::{build_app, build_state};

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let db = models::db::connect(&DatabaseConfig::sqlite_memory()).await?;
    let app = build_app(build_state(db));

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
async fn e2e_create_list_delete_over_http() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();
    let payload = json!({"title": "Lamp", "imgUrl": "http://x/lamp.png", "price": 25, "description": "Desk lamp"});

    let res = c.post(format!("{}/products", app.base_url)).json(&payload).send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let created = res.json::<Value>().await?;
    let id = created["id"].as_str().unwrap_or_default().to_string();
    assert!(!id.is_empty());

    let res = c.post(format!("{}/products", app.base_url)).json(&payload).send().await?;
    assert_eq!(res.status(), HttpStatusCode::CONFLICT);

    let list = c.get(format!("{}/products", app.base_url)).send().await?.json::<Vec<Value>>().await?;
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["title"], "Lamp");

    let res = c.delete(format!("{}/products/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?["id"], id.as_str());

    let res = c.delete(format!("{}/products/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}
