//! Bidding: raising the bid for a team and hammering the sale.

use crate::models::{Acquisition, AuctionError, AuctionSession, TeamId};

/// Raise the current bid by `increment` on behalf of a team.
///
/// Rejected (no state change) when the lot is already sold, the increment is
/// zero, the team is unknown, or the team's budget cannot cover the raised
/// bid. On success the team becomes the leading bidder.
pub fn place_bid(
    session: &mut AuctionSession,
    team_id: TeamId,
    increment: u32,
) -> Result<(), AuctionError> {
    if session.sold {
        return Err(AuctionError::AlreadySold);
    }
    if increment == 0 {
        return Err(AuctionError::InvalidIncrement);
    }
    let team = session
        .get_team(team_id)
        .ok_or(AuctionError::TeamNotFound(team_id))?;
    // An increment that overflows the bid cannot be covered by any budget.
    let new_bid = session
        .current_bid
        .checked_add(increment)
        .ok_or(AuctionError::InsufficientBudget { team_id })?;
    if team.budget < new_bid {
        return Err(AuctionError::InsufficientBudget { team_id });
    }
    session.current_bid = new_bid;
    session.leading_team = Some(team_id);
    Ok(())
}

/// Hammer the current lot: sell it to the leading team at the current bid.
///
/// Deducts the bid from the buyer's budget and appends the player snapshot to
/// the buyer's roster. The leading team is frozen as the buyer until the
/// operator advances to the next player. Rejected when there is no leading
/// bid or the lot was already sold.
pub fn finalize_sale(session: &mut AuctionSession) -> Result<(), AuctionError> {
    if session.sold {
        return Err(AuctionError::AlreadySold);
    }
    let team_id = session.leading_team.ok_or(AuctionError::NoLeadingBid)?;
    let final_price = session.current_bid;
    let player = session.current_player.clone();
    let team = session
        .get_team_mut(team_id)
        .ok_or(AuctionError::TeamNotFound(team_id))?;
    // The leading team's budget covered the bid when it took the lead, and the
    // bid has not moved since, so this cannot underflow.
    team.budget -= final_price;
    team.roster.push(Acquisition {
        player,
        final_price,
    });
    session.sold = true;
    Ok(())
}
