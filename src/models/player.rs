//! Player, Position, and the player directory view structures.

use serde::{Deserialize, Serialize};

/// Registration id of a player in the auction registry (string key, e.g. "1").
pub type PlayerId = String;

/// Playing position of a registered player.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum Position {
    #[default]
    Forward,
    Midfielder,
    Defender,
    Goalkeeper,
}

/// A player eligible for auction. Players come from the fixed registry and are
/// never mutated by the simulator; a sale copies them into a team roster.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub position: Position,
    /// Opening price of the lot, in points.
    pub base_price: u32,
    pub desc: String,
    /// Avatar URL or data URL.
    pub image: String,
}

impl Player {
    pub fn new(
        id: impl Into<PlayerId>,
        name: impl Into<String>,
        position: Position,
        base_price: u32,
        desc: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            position,
            base_price,
            desc: desc.into(),
            image: image.into(),
        }
    }
}

/// Which half of the player directory to show.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectoryFilter {
    Sold,
    Unsold,
}

/// Directory row (for API / display): a registry player, joined with the owning
/// team and final price when the player has been sold.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    pub player: Player,
    /// Owning team name; `None` for unsold players.
    pub owner: Option<String>,
    /// Hammer price; `None` for unsold players.
    pub final_price: Option<u32>,
}
