//! End-to-end: config manifest → registered router → HTTP.

use routemill::config::{parse_config, MillConfig, RouteConfig};
use routemill::lifecycle::{build_app, StartupError};
use routemill::routing::CatalogError;
use routemill::RouteInfo;
use serde_json::Value;

mod common;

fn route(method: &str, path: &str, handler: &str) -> RouteConfig {
    RouteConfig {
        method: method.into(),
        path: path.into(),
        handler: handler.into(),
    }
}

#[tokio::test]
async fn test_serves_manifest() {
    let config = parse_config(
        r#"
        [[routes]]
        method = "GET"
        path = "/health"
        handler = "health"

        [[routes]]
        method = "POST"
        path = "/echo"
        handler = "echo"

        [[routes]]
        method = "GET"
        path = "/routes"
        handler = "routes"
        "#,
    )
    .unwrap();
    let (addr, shutdown) = common::spawn_app(config).await;
    let client = reqwest::Client::builder().no_proxy().build().unwrap();

    let res = client.get(format!("http://{}/health", addr)).send().await.unwrap();
    assert_eq!(res.status(), 200);
    assert!(res.headers().contains_key("x-request-id"));
    assert_eq!(res.text().await.unwrap(), "ok");

    let res = client
        .post(format!("http://{}/echo", addr))
        .body("hello")
        .send()
        .await
        .unwrap();
    assert_eq!(res.text().await.unwrap(), "hello");

    let routes: Value = client
        .get(format!("http://{}/routes", addr))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let paths: Vec<&str> = routes
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["path"].as_str().unwrap())
        .collect();
    assert_eq!(paths, ["/health", "/echo", "/routes"]);

    let res = client.get(format!("http://{}/echo", addr)).send().await.unwrap();
    assert_eq!(res.status(), 405);

    shutdown.trigger();
}

#[tokio::test]
async fn test_request_id_is_kept() {
    let config = MillConfig::default();
    let (addr, shutdown) = common::spawn_app(config).await;

    let res = reqwest::Client::builder()
        .no_proxy()
        .build()
        .unwrap()
        .get(format!("http://{}/health", addr))
        .header("x-request-id", "abc-123")
        .send()
        .await
        .unwrap();
    assert_eq!(res.headers()["x-request-id"], "abc-123");

    shutdown.trigger();
}

#[test]
fn test_default_config_serves_builtins() {
    let app = build_app(&MillConfig::default()).unwrap();
    assert_eq!(
        app.routes,
        vec![
            RouteInfo::new("GET", "/health", "health"),
            RouteInfo::new("GET", "/version", "version"),
        ]
    );
}

#[tokio::test]
async fn test_default_config_answers_health() {
    let (addr, shutdown) = common::spawn_app(MillConfig::default()).await;
    let client = reqwest::Client::builder().no_proxy().build().unwrap();

    let res = client.get(format!("http://{}/health", addr)).send().await.unwrap();
    assert_eq!(res.status(), 200);

    let version: Value = client
        .get(format!("http://{}/version", addr))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(version["name"], "routemill");

    shutdown.trigger();
}

#[test]
fn test_unknown_handler_is_fatal() {
    let mut config = MillConfig::default();
    config.routes.push(route("GET", "/x", "nope"));

    let err = build_app(&config).unwrap_err();
    assert!(matches!(
        err,
        StartupError::Catalog(CatalogError::UnknownHandler { .. })
    ));
}

#[test]
fn test_duplicate_in_manifest() {
    let mut config = MillConfig::default();
    config.routes.clear();
    config.routes.push(route("GET", "/health", "health"));
    config.routes.push(route("GET", "/health", "version"));

    assert!(matches!(build_app(&config), Err(StartupError::Register(_))));

    config.registration.duplicate_policy = routemill::config::DuplicatePolicy::Ignore;
    let app = build_app(&config).unwrap();
    assert_eq!(app.routes.len(), 1);
    assert_eq!(app.routes[0].handler, "health");
}
