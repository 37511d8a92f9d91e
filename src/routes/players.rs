use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use crate::db::{self, Store};
use crate::error::ApiError;
use crate::extract::{Json as JsonBody, PlayerId};
use crate::models::{MessageResponse, NewPlayer, Player, PlayerChanges, PlayerCreated};

// GET /players - List all players
pub async fn list_players(
    State(store): State<Store>,
) -> Result<Json<Vec<Player>>, ApiError> {
    let mut conn = store.session().await?;
    let players = db::list_players(&mut conn).await?;

    Ok(Json(players))
}

// GET /players/{id} - Get player by ID
pub async fn get_player(
    State(store): State<Store>,
    PlayerId(player_id): PlayerId,
) -> Result<Json<Player>, ApiError> {
    let mut conn = store.session().await?;
    let player = db::get_player_by_id(&mut conn, player_id)
        .await?
        .ok_or(ApiError::NotFound("Player"))?;

    Ok(Json(player))
}

// POST /players - Create a player. team_id is stored as given.
pub async fn create_player(
    State(store): State<Store>,
    JsonBody(payload): JsonBody<NewPlayer>,
) -> Result<(StatusCode, Json<PlayerCreated>), ApiError> {
    let mut conn = store.session().await?;
    let player = db::create_player(&mut conn, payload).await?;

    tracing::info!(player_id = player.id, team_id = player.team_id, "Player created");

    Ok((
        StatusCode::CREATED,
        Json(PlayerCreated {
            message: "Player created successfully".to_string(),
            player_id: player.id,
        }),
    ))
}

// PUT /players/{id} - Overwrite the non-empty, non-zero fields of a player
pub async fn update_player(
    State(store): State<Store>,
    PlayerId(player_id): PlayerId,
    JsonBody(payload): JsonBody<PlayerChanges>,
) -> Result<Json<MessageResponse>, ApiError> {
    let mut conn = store.session().await?;
    db::get_player_by_id(&mut conn, player_id)
        .await?
        .ok_or(ApiError::NotFound("Player"))?;

    let changes = payload.ignoring_falsy();
    if !db::update_player(&mut conn, player_id, &changes).await? {
        return Err(ApiError::NotFound("Player"));
    }

    tracing::info!(player_id, "Player updated");

    Ok(Json(MessageResponse::new("Player updated successfully")))
}

// DELETE /players/{id} - Delete a player
pub async fn delete_player(
    State(store): State<Store>,
    PlayerId(player_id): PlayerId,
) -> Result<Json<MessageResponse>, ApiError> {
    let mut conn = store.session().await?;
    db::get_player_by_id(&mut conn, player_id)
        .await?
        .ok_or(ApiError::NotFound("Player"))?;

    if !db::delete_player(&mut conn, player_id).await? {
        return Err(ApiError::NotFound("Player"));
    }

    tracing::info!(player_id, "Player deleted");

    Ok(Json(MessageResponse::new("Player deleted successfully")))
}
