//! MSL auction portal: library with models and auction business logic.

pub mod logic;
pub mod models;

pub use logic::{advance_to_next_player, finalize_sale, list_directory, place_bid, search_player};
pub use models::{
    Acquisition, AuctionError, AuctionSession, DirectoryEntry, DirectoryFilter,
    ManagerRegistrationForm, Player, PlayerId, PlayerRegistrationForm, Position,
    RegistrationError, RegistrationReceipt, SessionId, Team, TeamId, INITIAL_BUDGET, TEAM_NAMES,
};
