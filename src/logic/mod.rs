//! Auction business logic: bidding, lot rotation, directory views.

mod bidding;
mod directory;
mod lot;

pub use bidding::{finalize_sale, place_bid};
pub use directory::list_directory;
pub use lot::{advance_to_next_player, search_player};
