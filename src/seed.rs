//! Synthetic teams and players for filling a development database.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{NewPlayer, NewTeam};

const CITIES: &[&str] = &[
    "Atlanta", "Boston", "Brooklyn", "Charlotte", "Chicago", "Cleveland", "Dallas", "Denver",
    "Detroit", "Houston", "Indiana", "Memphis", "Miami", "Milwaukee", "Minnesota", "Orlando",
    "Phoenix", "Portland", "Sacramento", "Toronto", "Utah", "Washington",
];

const NICKNAMES: &[&str] = &[
    "Hawks", "Comets", "Falcons", "Grizzlies", "Hornets", "Jaguars", "Kings", "Knights",
    "Lynx", "Mustangs", "Pioneers", "Rockets", "Stallions", "Titans", "Vipers", "Wolves",
];

const FIRST_NAMES: &[&str] = &[
    "Andre", "Ben", "Carlos", "Darius", "Elijah", "Felix", "Gabe", "Hassan", "Isaiah", "Jalen",
    "Kyle", "Luka", "Marcus", "Nikola", "Omar", "Paul", "Quentin", "Rudy", "Stephen", "Tyrese",
];

const LAST_NAMES: &[&str] = &[
    "Anderson", "Brown", "Chen", "Davis", "Edwards", "Fox", "Green", "Harris", "Irving", "Johnson",
    "King", "Lopez", "Mitchell", "Nance", "Okafor", "Parker", "Reid", "Smith", "Thompson", "Walker",
];

/// Up to `count` teams with distinct names. Fewer are returned once every
/// city/nickname pairing has been used.
pub fn generate_teams<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<NewTeam> {
    let mut names: Vec<String> = CITIES
        .iter()
        .flat_map(|city| NICKNAMES.iter().map(move |nick| format!("{} {}", city, nick)))
        .collect();
    names.shuffle(rng);

    names
        .into_iter()
        .take(count)
        .map(|name| NewTeam {
            name,
            points_scored: rng.gen_range(50..=120),
            rebounds: rng.gen_range(20..=70),
            assists: rng.gen_range(10..=50),
        })
        .collect()
}

/// `count` players, each assigned to a random id from `team_ids`.
pub fn generate_players<R: Rng + ?Sized>(rng: &mut R, count: usize, team_ids: &[i64]) -> Vec<NewPlayer> {
    if team_ids.is_empty() {
        return Vec::new();
    }

    (0..count)
        .filter_map(|_| {
            let team_id = *team_ids.choose(rng)?;
            let first = FIRST_NAMES.choose(rng)?;
            let last = LAST_NAMES.choose(rng)?;

            Some(NewPlayer {
                name: format!("{} {}", first, last),
                team_id,
                points: rng.gen_range(5..=30),
                rebounds: rng.gen_range(2..=15),
                assists: rng.gen_range(1..=10),
            })
        })
        .collect()
}
