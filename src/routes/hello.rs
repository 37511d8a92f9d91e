use axum::response::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct HelloResponse {
    hello: &'static str,
}

// GET /hello_api/hello
pub async fn hello() -> Json<HelloResponse> {
    Json(HelloResponse { hello: "world" })
}
