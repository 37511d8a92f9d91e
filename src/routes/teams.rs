use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use crate::db::{self, Store};
use crate::error::ApiError;
use crate::extract::{Json as JsonBody, TeamId};
use crate::models::{MessageResponse, NewTeam, Team, TeamChanges, TeamCreated};

// GET /teams - List all teams
pub async fn list_teams(
    State(store): State<Store>,
) -> Result<Json<Vec<Team>>, ApiError> {
    let mut conn = store.session().await?;
    let teams = db::list_teams(&mut conn).await?;

    Ok(Json(teams))
}

// GET /teams/{id} - Get team by ID
pub async fn get_team(
    State(store): State<Store>,
    TeamId(team_id): TeamId,
) -> Result<Json<Team>, ApiError> {
    let mut conn = store.session().await?;
    let team = db::get_team_by_id(&mut conn, team_id)
        .await?
        .ok_or(ApiError::NotFound("Team"))?;

    Ok(Json(team))
}

// POST /teams - Create a team
pub async fn create_team(
    State(store): State<Store>,
    JsonBody(payload): JsonBody<NewTeam>,
) -> Result<(StatusCode, Json<TeamCreated>), ApiError> {
    let mut conn = store.session().await?;
    let team = db::create_team(&mut conn, payload).await?;

    tracing::info!(team_id = team.id, "Team created");

    Ok((
        StatusCode::CREATED,
        Json(TeamCreated {
            message: "Team created successfully".to_string(),
            team_id: team.id,
        }),
    ))
}

// PUT /teams/{id} - Overwrite the non-empty, non-zero fields of a team
pub async fn update_team(
    State(store): State<Store>,
    TeamId(team_id): TeamId,
    JsonBody(payload): JsonBody<TeamChanges>,
) -> Result<Json<MessageResponse>, ApiError> {
    let mut conn = store.session().await?;
    db::get_team_by_id(&mut conn, team_id)
        .await?
        .ok_or(ApiError::NotFound("Team"))?;

    let changes = payload.ignoring_falsy();
    if !db::update_team(&mut conn, team_id, &changes).await? {
        return Err(ApiError::NotFound("Team"));
    }

    tracing::info!(team_id, "Team updated");

    Ok(Json(MessageResponse::new("Team updated successfully")))
}

// DELETE /teams/{id} - Delete a team (its players are kept)
pub async fn delete_team(
    State(store): State<Store>,
    TeamId(team_id): TeamId,
) -> Result<Json<MessageResponse>, ApiError> {
    let mut conn = store.session().await?;
    db::get_team_by_id(&mut conn, team_id)
        .await?
        .ok_or(ApiError::NotFound("Team"))?;

    if !db::delete_team(&mut conn, team_id).await? {
        return Err(ApiError::NotFound("Team"));
    }

    tracing::info!(team_id, "Team deleted");

    Ok(Json(MessageResponse::new("Team deleted successfully")))
}
