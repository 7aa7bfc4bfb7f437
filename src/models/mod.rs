//! Data structures for the auction portal: teams, players, sessions, registrations.

mod player;
mod registration;
mod registry;
mod session;
mod team;

pub use player::{DirectoryEntry, DirectoryFilter, Player, PlayerId, Position};
pub use registration::{
    ManagerRegistrationForm, PlayerRegistrationForm, RegistrationError, RegistrationReceipt,
};
pub use registry::registered_players;
pub use session::{AuctionError, AuctionSession, SessionId};
pub use team::{league_teams, Acquisition, Team, TeamId, INITIAL_BUDGET, TEAM_NAMES};
