use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::db::Store;

pub mod health;
pub mod hello;
pub mod players;
pub mod teams;

/// Build the full application. `/teams` and `/players` are mounted under
/// `api_prefix` (e.g. "/nba_stats"); an empty prefix mounts them at the root.
pub fn router(store: Store, api_prefix: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/", get(|| async { "NBA Stats API - v1.0" }))
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/hello_api/hello", get(hello::hello));

    let app = if api_prefix.is_empty() {
        app.merge(resource_routes())
    } else {
        app.nest(api_prefix, resource_routes())
    };

    app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors),
    )
    .with_state(store)
}

fn resource_routes() -> Router<Store> {
    Router::new()
        // Team endpoints
        .route("/teams", get(teams::list_teams).post(teams::create_team))
        .route("/teams/", get(teams::list_teams).post(teams::create_team))
        .route(
            "/teams/{id}",
            get(teams::get_team).put(teams::update_team).delete(teams::delete_team),
        )

        // Player endpoints
        .route("/players", get(players::list_players).post(players::create_player))
        .route("/players/", get(players::list_players).post(players::create_player))
        .route(
            "/players/{id}",
            get(players::get_player).put(players::update_player).delete(players::delete_player),
        )
}
