//! Fill a running server with synthetic teams and players over HTTP.
//!
//! SEED_API_URL (default http://127.0.0.1:5000, include any API_PREFIX),
//! SEED_TEAMS (default 5) and SEED_PLAYERS (default 10) control the run.

use nba_stats_crud::models::{PlayerCreated, TeamCreated};
use nba_stats_crud::seed::{generate_players, generate_teams};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> Result<T, String> {
    match std::env::var(name) {
        Ok(value) => value
            .parse()
            .map_err(|_| format!("{} is not in the correct format: {:?}", name, value)),
        Err(_) => Ok(default),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let base_url: String = env_or("SEED_API_URL", "http://127.0.0.1:5000".to_string())?;
    let base_url = base_url.trim_end_matches('/').to_string();
    let team_count: usize = env_or("SEED_TEAMS", 5)?;
    let player_count: usize = env_or("SEED_PLAYERS", 10)?;

    let client = reqwest::Client::new();
    let mut rng = rand::thread_rng();

    let mut team_ids = Vec::with_capacity(team_count);
    for team in generate_teams(&mut rng, team_count) {
        let created: TeamCreated = client
            .post(format!("{}/teams", base_url))
            .json(&team)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        tracing::info!(team_id = created.team_id, name = %team.name, "Seeded team");
        team_ids.push(created.team_id);
    }

    let mut seeded_players = 0;
    for player in generate_players(&mut rng, player_count, &team_ids) {
        let created: PlayerCreated = client
            .post(format!("{}/players", base_url))
            .json(&player)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        tracing::info!(player_id = created.player_id, name = %player.name, "Seeded player");
        seeded_players += 1;
    }

    tracing::info!("Seeded {} teams and {} players", team_ids.len(), seeded_players);

    Ok(())
}
