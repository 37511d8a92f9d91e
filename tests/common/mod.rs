#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use nba_stats_crud::{router, Store};
use serde_json::Value;
use tower::ServiceExt;

/// Router over a fresh in-memory database, resources mounted at `prefix`.
pub async fn test_app_with_prefix(prefix: &str) -> Router {
    let store = Store::in_memory().await.expect("in-memory store");
    store.migrate().await.expect("migrations");
    router(store, prefix)
}

pub async fn test_app() -> Router {
    test_app_with_prefix("").await
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::DELETE, uri, None).await
}

pub async fn create_team(app: &Router, name: &str, points_scored: i64, rebounds: i64, assists: i64) -> i64 {
    let (status, body) = post(
        app,
        "/teams",
        serde_json::json!({
            "name": name,
            "points_scored": points_scored,
            "rebounds": rebounds,
            "assists": assists,
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["team_id"].as_i64().unwrap()
}

pub async fn create_player(app: &Router, name: &str, team_id: i64, points: i64, rebounds: i64, assists: i64) -> i64 {
    let (status, body) = post(
        app,
        "/players",
        serde_json::json!({
            "name": name,
            "team_id": team_id,
            "points": points,
            "rebounds": rebounds,
            "assists": assists,
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["player_id"].as_i64().unwrap()
}
