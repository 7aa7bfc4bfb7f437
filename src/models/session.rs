//! AuctionSession and AuctionError.

use crate::models::player::{Player, PlayerId};
use crate::models::registry::registered_players;
use crate::models::team::{league_teams, Team, TeamId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors that can occur during auction operations.
///
/// The original UI handled all of these by disabling the triggering control;
/// we name them so the API can report why an action was rejected, while the
/// guarantee stays the same: a rejected operation changes no state.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AuctionError {
    /// The current lot has already been hammered; bid or re-sale rejected.
    AlreadySold,
    /// Sale attempted with no leading bid on the lot.
    NoLeadingBid,
    /// Bid increment must be positive.
    InvalidIncrement,
    /// The team's remaining budget cannot cover the raised bid.
    InsufficientBudget { team_id: TeamId },
    /// No team with this id in the league.
    TeamNotFound(TeamId),
    /// No player with this registration id in the registry.
    PlayerNotFound(PlayerId),
}

impl std::fmt::Display for AuctionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuctionError::AlreadySold => write!(f, "Lot is already sold"),
            AuctionError::NoLeadingBid => write!(f, "No leading bid on this lot"),
            AuctionError::InvalidIncrement => write!(f, "Bid increment must be positive"),
            AuctionError::InsufficientBudget { .. } => {
                write!(f, "Team budget cannot cover this bid")
            }
            AuctionError::TeamNotFound(id) => write!(f, "Team {} not found", id),
            AuctionError::PlayerNotFound(id) => write!(f, "No registered player with id {}", id),
        }
    }
}

/// Unique identifier for an auction session.
pub type SessionId = Uuid;

/// One live-auction session: the 12 teams, the read-only player registry, and
/// the state of the lot currently under the hammer.
///
/// Lifecycle per lot: Open (accepting bids) → Sold (buyer fixed, budget and
/// roster mutated) → Open again on advance. There is no terminal state; the
/// cycle wraps over the registry indefinitely. The whole session lives in
/// memory and is discarded when the client goes away.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuctionSession {
    pub id: SessionId,
    pub teams: Vec<Team>,
    /// Fixed catalog of auctionable players. Read-only after creation.
    pub registry: Vec<Player>,
    /// The lot: the player currently open for bidding. Never absent.
    pub current_player: Player,
    /// Highest bid on the lot; starts at the player's base price.
    pub current_bid: u32,
    /// Team holding the highest bid, if any bid has been placed.
    pub leading_team: Option<TeamId>,
    /// True once the lot has been hammered and not yet advanced past.
    pub sold: bool,
}

impl AuctionSession {
    /// Fresh session: full league, mock registry, first registry player on the block.
    pub fn new() -> Self {
        Self::with_registry(registered_players())
    }

    /// Session over a custom registry (must be non-empty; the registry is never
    /// empty in practice and empty-registry behavior is out of scope).
    pub fn with_registry(registry: Vec<Player>) -> Self {
        let current_player = registry[0].clone();
        let current_bid = current_player.base_price;
        Self {
            id: Uuid::new_v4(),
            teams: league_teams(),
            registry,
            current_player,
            current_bid,
            leading_team: None,
            sold: false,
        }
    }

    /// A team by id.
    pub fn get_team(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    /// Mutable reference to a team by id.
    pub fn get_team_mut(&mut self, id: TeamId) -> Option<&mut Team> {
        self.teams.iter_mut().find(|t| t.id == id)
    }

    /// Look up a registry player by registration id.
    pub fn find_registered(&self, player_id: &str) -> Option<&Player> {
        self.registry.iter().find(|p| p.id == player_id)
    }

    /// Replace a team's logo reference. Pure data update; repeating the same
    /// reference is a no-op in effect.
    pub fn update_team_logo(
        &mut self,
        team_id: TeamId,
        image_ref: impl Into<String>,
    ) -> Result<(), AuctionError> {
        let team = self
            .get_team_mut(team_id)
            .ok_or(AuctionError::TeamNotFound(team_id))?;
        team.logo = image_ref.into();
        Ok(())
    }

    /// Name of the team currently holding the highest bid.
    pub fn leading_team_name(&self) -> Option<&str> {
        self.leading_team
            .and_then(|id| self.get_team(id))
            .map(|t| t.name.as_str())
    }

    /// The team that bought a registry player, if anyone has.
    pub fn owner_of(&self, player_id: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.owns_player(player_id))
    }

    /// Total acquisitions across all rosters (the "total drafted" stat).
    /// Derived on demand rather than maintained incrementally.
    pub fn total_players_drafted(&self) -> usize {
        self.teams.iter().map(|t| t.roster.len()).sum()
    }
}

impl Default for AuctionSession {
    fn default() -> Self {
        Self::new()
    }
}
