//! Team, Acquisition, and the fixed league of 12 squads.

use crate::models::player::{Player, PlayerId};
use serde::{Deserialize, Serialize};

/// Unique identifier for a team (1..=12, stable for the session).
pub type TeamId = u32;

/// Points every team starts the auction with.
pub const INITIAL_BUDGET: u32 = 2000;

/// The 12 competing squads, in display order. Team ids are index + 1.
pub const TEAM_NAMES: [&str; 12] = [
    "Shaolin Monks",
    "Spitting Cobras",
    "ThunderDrakes FC",
    "Benzofury FC",
    "Royal Mariners",
    "Zenyx FC",
    "Timberwolves",
    "Jager Masters",
    "Unemployed XI FC",
    "Cosmic Knights",
    "United FC",
    "Blitzkrieg FC",
];

/// A finalized sale: snapshot of the player plus the hammer price.
/// Ownership is implicit in which team's roster holds the record.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Acquisition {
    pub player: Player,
    pub final_price: u32,
}

/// A team in the league: fixed identity and name, a points budget that only
/// shrinks through sales, and an append-only roster of acquisitions.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub budget: u32,
    pub roster: Vec<Acquisition>,
    /// Logo image reference (URL or data URL). Replaceable at any time.
    pub logo: String,
}

impl Team {
    /// Create a team with the full starting budget and a generated identicon logo.
    pub fn new(id: TeamId, name: impl Into<String>) -> Self {
        let name = name.into();
        let logo = default_logo(&name);
        Self {
            id,
            name,
            budget: INITIAL_BUDGET,
            roster: Vec::new(),
            logo,
        }
    }

    /// Whether this team's roster holds the given registry player.
    pub fn owns_player(&self, player_id: &str) -> bool {
        self.roster.iter().any(|a| a.player.id == player_id)
    }

    /// The acquisition record for a registry player, if this team bought them.
    pub fn acquisition(&self, player_id: &str) -> Option<&Acquisition> {
        self.roster.iter().find(|a| a.player.id == player_id)
    }
}

/// The 12 league teams in fixed order, ids 1..=12.
pub fn league_teams() -> Vec<Team> {
    TEAM_NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| Team::new(i as TeamId + 1, *name))
        .collect()
}

/// Per-team identicon so fresh sessions have distinct logos before any upload.
fn default_logo(name: &str) -> String {
    let seed: String = name
        .chars()
        .map(|c| if c == ' ' { '-' } else { c })
        .collect();
    format!(
        "https://api.dicebear.com/7.x/identicon/svg?seed={}&backgroundColor=b6e3f4,c0aede,d1d4f9",
        seed
    )
}
