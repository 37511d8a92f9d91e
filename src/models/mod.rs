use serde::{Deserialize, Serialize};

/// Row from the teams table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Team {
    pub id: i64,
    pub name: String,
    pub points_scored: i64,
    pub rebounds: i64,
    pub assists: i64,
}

/// Body of `POST /teams`. Every field is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTeam {
    pub name: String,
    pub points_scored: i64,
    pub rebounds: i64,
    pub assists: i64,
}

impl NewTeam {
    pub fn with_id(self, id: i64) -> Team {
        Team {
            id,
            name: self.name,
            points_scored: self.points_scored,
            rebounds: self.rebounds,
            assists: self.assists,
        }
    }
}

/// Body of `PUT /teams/{id}`. Any subset of fields may be sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamChanges {
    pub name: Option<String>,
    pub points_scored: Option<i64>,
    pub rebounds: Option<i64>,
    pub assists: Option<i64>,
}

impl TeamChanges {
    /// Treat `0` and `""` the same as an absent field, so an update can
    /// never reset a stat to zero or blank out a name.
    pub fn ignoring_falsy(self) -> Self {
        TeamChanges {
            name: non_empty(self.name),
            points_scored: non_zero(self.points_scored),
            rebounds: non_zero(self.rebounds),
            assists: non_zero(self.assists),
        }
    }
}

/// Row from the players table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub team_id: i64,
    pub points: i64,
    pub rebounds: i64,
    pub assists: i64,
}

/// Body of `POST /players`. `team_id` is not checked against existing teams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPlayer {
    pub name: String,
    pub team_id: i64,
    pub points: i64,
    pub rebounds: i64,
    pub assists: i64,
}

impl NewPlayer {
    pub fn with_id(self, id: i64) -> Player {
        Player {
            id,
            name: self.name,
            team_id: self.team_id,
            points: self.points,
            rebounds: self.rebounds,
            assists: self.assists,
        }
    }
}

/// Body of `PUT /players/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerChanges {
    pub name: Option<String>,
    pub team_id: Option<i64>,
    pub points: Option<i64>,
    pub rebounds: Option<i64>,
    pub assists: Option<i64>,
}

impl PlayerChanges {
    pub fn ignoring_falsy(self) -> Self {
        PlayerChanges {
            name: non_empty(self.name),
            team_id: non_zero(self.team_id),
            points: non_zero(self.points),
            rebounds: non_zero(self.rebounds),
            assists: non_zero(self.assists),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

fn non_zero(value: Option<i64>) -> Option<i64> {
    value.filter(|n| *n != 0)
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TeamCreated {
    pub message: String,
    pub team_id: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PlayerCreated {
    pub message: String,
    pub player_id: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        MessageResponse { message: message.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn team_changes_drop_zero_and_empty() {
        let changes = TeamChanges {
            name: Some(String::new()),
            points_scored: Some(0),
            rebounds: Some(42),
            assists: None,
        }
        .ignoring_falsy();

        assert_eq!(
            changes,
            TeamChanges {
                name: None,
                points_scored: None,
                rebounds: Some(42),
                assists: None,
            }
        );
    }

    #[test]
    fn player_changes_keep_negative_values() {
        let changes = PlayerChanges {
            points: Some(-3),
            team_id: Some(0),
            ..Default::default()
        }
        .ignoring_falsy();

        assert_eq!(changes.points, Some(-3));
        assert_eq!(changes.team_id, None);
    }

    #[test]
    fn changes_accept_partial_json() {
        let changes: TeamChanges = serde_json::from_str(r#"{"name": "X"}"#).unwrap();
        assert_eq!(changes.name.as_deref(), Some("X"));
        assert!(changes.points_scored.is_none());

        let changes: PlayerChanges = serde_json::from_str(r#"{"assists": null}"#).unwrap();
        assert!(changes.assists.is_none());
    }

    #[test]
    fn new_team_requires_every_field() {
        let result: Result<NewTeam, _> =
            serde_json::from_str(r#"{"name": "Lakers", "points_scored": 110, "rebounds": 44}"#);
        assert!(result.is_err());
    }

    #[test]
    fn new_player_rejects_wrong_types() {
        let result: Result<NewPlayer, _> = serde_json::from_str(
            r#"{"name": "A", "team_id": "one", "points": 1, "rebounds": 1, "assists": 1}"#,
        );
        assert!(result.is_err());
    }
}
