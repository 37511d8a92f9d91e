use std::str::FromStr;

use sqlx::pool::PoolConnection;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection, SqlitePool, SqlitePoolOptions};
use sqlx::Sqlite;

use crate::config::DatabaseConfig;
use crate::models::*;

/// Handle to the entity store, built once at startup and shared as router state.
#[derive(Debug, Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        // team_id references are intentionally not enforced
        let options = SqliteConnectOptions::from_str(&config.url)?
            .create_if_missing(true)
            .foreign_keys(false);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await?;

        Ok(Store { pool })
    }

    /// Private in-memory database. Limited to one connection that is never
    /// recycled, since every SQLite memory connection is its own database.
    pub async fn in_memory() -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(false);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        Ok(Store { pool })
    }

    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("./migrations").run(&self.pool).await
    }

    /// Check out one connection for the duration of a request. Dropping it
    /// hands it back to the pool.
    pub async fn session(&self) -> Result<PoolConnection<Sqlite>, sqlx::Error> {
        self.pool.acquire().await
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

pub async fn ping(conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(&mut *conn).await?;
    Ok(())
}

// Team queries
pub async fn list_teams(conn: &mut SqliteConnection) -> Result<Vec<Team>, sqlx::Error> {
    sqlx::query_as::<_, Team>(
        r#"SELECT id, name, points_scored, rebounds, assists FROM teams ORDER BY id"#
    )
    .fetch_all(&mut *conn)
    .await
}

pub async fn get_team_by_id(conn: &mut SqliteConnection, team_id: i64) -> Result<Option<Team>, sqlx::Error> {
    sqlx::query_as::<_, Team>(
        r#"SELECT id, name, points_scored, rebounds, assists FROM teams WHERE id = ?"#
    )
    .bind(team_id)
    .fetch_optional(&mut *conn)
    .await
}

pub async fn create_team(conn: &mut SqliteConnection, team: NewTeam) -> Result<Team, sqlx::Error> {
    let id = sqlx::query(
        r#"INSERT INTO teams (name, points_scored, rebounds, assists) VALUES (?, ?, ?, ?)"#
    )
    .bind(&team.name)
    .bind(team.points_scored)
    .bind(team.rebounds)
    .bind(team.assists)
    .execute(&mut *conn)
    .await?
    .last_insert_rowid();

    Ok(team.with_id(id))
}

/// Overwrite the columns that are `Some` in `changes`; `None` keeps the
/// stored value. Returns false when no row has `team_id`.
pub async fn update_team(conn: &mut SqliteConnection, team_id: i64, changes: &TeamChanges) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"UPDATE teams SET
               name = COALESCE(?, name),
               points_scored = COALESCE(?, points_scored),
               rebounds = COALESCE(?, rebounds),
               assists = COALESCE(?, assists)
           WHERE id = ?"#
    )
    .bind(changes.name.as_deref())
    .bind(changes.points_scored)
    .bind(changes.rebounds)
    .bind(changes.assists)
    .bind(team_id)
    .execute(&mut *conn)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Players that reference the team are left in place.
pub async fn delete_team(conn: &mut SqliteConnection, team_id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(r#"DELETE FROM teams WHERE id = ?"#)
        .bind(team_id)
        .execute(&mut *conn)
        .await?;

    Ok(result.rows_affected() > 0)
}

// Player queries
pub async fn list_players(conn: &mut SqliteConnection) -> Result<Vec<Player>, sqlx::Error> {
    sqlx::query_as::<_, Player>(
        r#"SELECT id, name, team_id, points, rebounds, assists FROM players ORDER BY id"#
    )
    .fetch_all(&mut *conn)
    .await
}

pub async fn get_player_by_id(conn: &mut SqliteConnection, player_id: i64) -> Result<Option<Player>, sqlx::Error> {
    sqlx::query_as::<_, Player>(
        r#"SELECT id, name, team_id, points, rebounds, assists FROM players WHERE id = ?"#
    )
    .bind(player_id)
    .fetch_optional(&mut *conn)
    .await
}

pub async fn create_player(conn: &mut SqliteConnection, player: NewPlayer) -> Result<Player, sqlx::Error> {
    let id = sqlx::query(
        r#"INSERT INTO players (name, team_id, points, rebounds, assists) VALUES (?, ?, ?, ?, ?)"#
    )
    .bind(&player.name)
    .bind(player.team_id)
    .bind(player.points)
    .bind(player.rebounds)
    .bind(player.assists)
    .execute(&mut *conn)
    .await?
    .last_insert_rowid();

    Ok(player.with_id(id))
}

pub async fn update_player(conn: &mut SqliteConnection, player_id: i64, changes: &PlayerChanges) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"UPDATE players SET
               name = COALESCE(?, name),
               team_id = COALESCE(?, team_id),
               points = COALESCE(?, points),
               rebounds = COALESCE(?, rebounds),
               assists = COALESCE(?, assists)
           WHERE id = ?"#
    )
    .bind(changes.name.as_deref())
    .bind(changes.team_id)
    .bind(changes.points)
    .bind(changes.rebounds)
    .bind(changes.assists)
    .bind(player_id)
    .execute(&mut *conn)
    .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn delete_player(conn: &mut SqliteConnection, player_id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(r#"DELETE FROM players WHERE id = ?"#)
        .bind(player_id)
        .execute(&mut *conn)
        .await?;

    Ok(result.rows_affected() > 0)
}
