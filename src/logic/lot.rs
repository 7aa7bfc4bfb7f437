//! Lot rotation: putting a player on the block by search or in registry order.

use crate::models::{AuctionError, AuctionSession, Player};

/// Put a registry player on the block by registration id.
///
/// Resets the bid to the player's base price and clears the leading team and
/// sold flag. Rejected (session unchanged) when the id is not in the registry.
pub fn search_player(session: &mut AuctionSession, player_id: &str) -> Result<(), AuctionError> {
    let player = session
        .find_registered(player_id)
        .cloned()
        .ok_or_else(|| AuctionError::PlayerNotFound(player_id.to_string()))?;
    open_lot(session, player);
    Ok(())
}

/// Move to the next player in fixed registry order, wrapping from last back to
/// first. Resets bid, leading team, and sold flag exactly as a search does.
pub fn advance_to_next_player(session: &mut AuctionSession) {
    let index = session
        .registry
        .iter()
        .position(|p| p.id == session.current_player.id)
        .unwrap_or(0);
    let next = session.registry[(index + 1) % session.registry.len()].clone();
    open_lot(session, next);
}

/// Open a fresh bidding cycle on the given player.
fn open_lot(session: &mut AuctionSession, player: Player) {
    session.current_bid = player.base_price;
    session.current_player = player;
    session.leading_team = None;
    session.sold = false;
}
