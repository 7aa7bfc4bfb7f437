//! Player directory: sold/unsold partition of the registry.

use crate::models::{AuctionSession, DirectoryEntry, DirectoryFilter};

/// Partition the registry into sold or unsold entries.
///
/// A player is "sold" exactly when some team's roster holds their id, so the
/// two filters are exhaustive and disjoint over the registry at any time.
/// Sold entries carry the owning team's name and the hammer price. Recomputed
/// from the session snapshot on every call; there is no second copy to drift.
pub fn list_directory(session: &AuctionSession, filter: DirectoryFilter) -> Vec<DirectoryEntry> {
    session
        .registry
        .iter()
        .filter_map(|player| {
            let owner = session.owner_of(&player.id);
            match (filter, owner) {
                (DirectoryFilter::Sold, Some(team)) => {
                    let final_price = team.acquisition(&player.id).map(|a| a.final_price);
                    Some(DirectoryEntry {
                        player: player.clone(),
                        owner: Some(team.name.clone()),
                        final_price,
                    })
                }
                (DirectoryFilter::Unsold, None) => Some(DirectoryEntry {
                    player: player.clone(),
                    owner: None,
                    final_price: None,
                }),
                _ => None,
            }
        })
        .collect()
}
