//! Integration tests for the auction simulator: bidding, sales, lot rotation,
//! and the player directory.

use msl_auction_web::{
    advance_to_next_player, finalize_sale, list_directory, place_bid, search_player,
    AuctionError, AuctionSession, DirectoryFilter, Player, Position, INITIAL_BUDGET,
};

fn player(id: &str, base_price: u32) -> Player {
    Player::new(
        id,
        format!("Player {id}"),
        Position::Forward,
        base_price,
        "test player",
        "about:blank",
    )
}

/// Two-player registry, both opening at 10 points.
fn small_session() -> AuctionSession {
    AuctionSession::with_registry(vec![player("P1", 10), player("P2", 10)])
}

#[test]
fn fresh_session_opens_on_first_registry_player() {
    let s = AuctionSession::new();
    assert_eq!(s.current_player.id, s.registry[0].id);
    assert_eq!(s.current_bid, s.current_player.base_price);
    assert_eq!(s.leading_team, None);
    assert!(!s.sold);
    assert_eq!(s.teams.len(), 12);
    for t in &s.teams {
        assert_eq!(t.budget, INITIAL_BUDGET);
        assert!(t.roster.is_empty());
    }
}

#[test]
fn place_bid_raises_and_takes_the_lead() {
    let mut s = small_session();
    place_bid(&mut s, 1, 10).unwrap();
    assert_eq!(s.current_bid, 20);
    assert_eq!(s.leading_team, Some(1));

    place_bid(&mut s, 2, 50).unwrap();
    assert_eq!(s.current_bid, 70);
    assert_eq!(s.leading_team, Some(2));
}

#[test]
fn place_bid_rejects_zero_increment() {
    let mut s = small_session();
    assert_eq!(place_bid(&mut s, 1, 0), Err(AuctionError::InvalidIncrement));
    assert_eq!(s.current_bid, 10);
    assert_eq!(s.leading_team, None);
}

#[test]
fn place_bid_rejects_unknown_team() {
    let mut s = small_session();
    assert_eq!(place_bid(&mut s, 99, 10), Err(AuctionError::TeamNotFound(99)));
    assert_eq!(s.leading_team, None);
}

#[test]
fn place_bid_rejects_when_budget_cannot_cover_bid() {
    let mut s = small_session();
    // Team 2 is nearly broke: 5 points against a lot already at 10.
    s.get_team_mut(2).unwrap().budget = 5;
    let before_leader = s.leading_team;
    assert_eq!(
        place_bid(&mut s, 2, 10),
        Err(AuctionError::InsufficientBudget { team_id: 2 })
    );
    // No state change on rejection.
    assert_eq!(s.current_bid, 10);
    assert_eq!(s.leading_team, before_leader);
    assert_eq!(s.get_team(2).unwrap().budget, 5);
}

#[test]
fn place_bid_rejects_increment_that_overflows_the_bid() {
    let mut s = small_session();
    // Lot at 10: this increment would wrap the bid around to 0 if unchecked.
    assert_eq!(
        place_bid(&mut s, 1, u32::MAX - 9),
        Err(AuctionError::InsufficientBudget { team_id: 1 })
    );
    assert_eq!(s.current_bid, 10);
    assert_eq!(s.leading_team, None);
    assert_eq!(s.get_team(1).unwrap().budget, INITIAL_BUDGET);
}

#[test]
fn place_bid_rejects_once_sold() {
    let mut s = small_session();
    place_bid(&mut s, 1, 10).unwrap();
    finalize_sale(&mut s).unwrap();
    assert_eq!(place_bid(&mut s, 2, 10), Err(AuctionError::AlreadySold));
    // Buyer stays frozen until the operator advances.
    assert_eq!(s.leading_team, Some(1));
}

#[test]
fn finalize_sale_moves_budget_into_roster() {
    let mut s = small_session();
    place_bid(&mut s, 1, 10).unwrap();
    finalize_sale(&mut s).unwrap();

    let team = s.get_team(1).unwrap();
    assert_eq!(team.budget, INITIAL_BUDGET - 20);
    assert_eq!(team.roster.len(), 1);
    assert_eq!(team.roster[0].player.id, "P1");
    assert_eq!(team.roster[0].final_price, 20);
    assert!(s.sold);
}

#[test]
fn finalize_sale_requires_a_leading_bid() {
    let mut s = small_session();
    assert_eq!(finalize_sale(&mut s), Err(AuctionError::NoLeadingBid));
    assert!(!s.sold);
    assert_eq!(s.total_players_drafted(), 0);
}

#[test]
fn finalize_sale_rejects_double_sale() {
    let mut s = small_session();
    place_bid(&mut s, 1, 10).unwrap();
    finalize_sale(&mut s).unwrap();
    assert_eq!(finalize_sale(&mut s), Err(AuctionError::AlreadySold));
    // Budget deducted exactly once.
    assert_eq!(s.get_team(1).unwrap().budget, INITIAL_BUDGET - 20);
    assert_eq!(s.get_team(1).unwrap().roster.len(), 1);
}

#[test]
fn advance_resets_lot_and_cycles_registry() {
    let mut s = small_session();
    place_bid(&mut s, 1, 10).unwrap();
    finalize_sale(&mut s).unwrap();

    advance_to_next_player(&mut s);
    assert_eq!(s.current_player.id, "P2");
    assert_eq!(s.current_bid, 10);
    assert_eq!(s.leading_team, None);
    assert!(!s.sold);

    // Wraps from the last registry player back to the first.
    advance_to_next_player(&mut s);
    assert_eq!(s.current_player.id, "P1");
}

#[test]
fn search_replaces_lot_and_resets_state() {
    let mut s = small_session();
    place_bid(&mut s, 3, 100).unwrap();
    search_player(&mut s, "P2").unwrap();
    assert_eq!(s.current_player.id, "P2");
    assert_eq!(s.current_bid, 10);
    assert_eq!(s.leading_team, None);
    assert!(!s.sold);
}

#[test]
fn search_unknown_id_is_rejected_without_state_change() {
    let mut s = small_session();
    place_bid(&mut s, 1, 10).unwrap();
    let err = search_player(&mut s, "nope").unwrap_err();
    assert_eq!(err, AuctionError::PlayerNotFound("nope".to_string()));
    assert_eq!(s.current_player.id, "P1");
    assert_eq!(s.current_bid, 20);
    assert_eq!(s.leading_team, Some(1));
}

#[test]
fn directory_partition_is_exhaustive_and_disjoint() {
    let mut s = small_session();

    let unsold = list_directory(&s, DirectoryFilter::Unsold);
    let sold = list_directory(&s, DirectoryFilter::Sold);
    assert_eq!(unsold.len(), 2);
    assert!(sold.is_empty());

    place_bid(&mut s, 4, 10).unwrap();
    finalize_sale(&mut s).unwrap();

    let unsold = list_directory(&s, DirectoryFilter::Unsold);
    let sold = list_directory(&s, DirectoryFilter::Sold);
    assert_eq!(unsold.len() + sold.len(), s.registry.len());
    assert!(unsold.iter().all(|e| e.player.id != "P1"));
    assert_eq!(sold.len(), 1);
    assert_eq!(sold[0].player.id, "P1");
    assert_eq!(sold[0].owner.as_deref(), s.get_team(4).map(|t| t.name.as_str()));
    assert_eq!(sold[0].final_price, Some(20));
}

#[test]
fn logo_update_is_idempotent() {
    let mut s = small_session();
    s.update_team_logo(1, "data:image/png;base64,AAAA").unwrap();
    let once = s.clone();
    s.update_team_logo(1, "data:image/png;base64,AAAA").unwrap();
    assert_eq!(s.get_team(1).unwrap().logo, once.get_team(1).unwrap().logo);
    assert_eq!(s.teams, once.teams);
}

#[test]
fn logo_update_rejects_unknown_team() {
    let mut s = small_session();
    assert_eq!(
        s.update_team_logo(42, "x"),
        Err(AuctionError::TeamNotFound(42))
    );
}

#[test]
fn full_lot_cycle_scenario() {
    // Registry {P1 base 10, P2 base 10}; team 1 has the full 2000 budget.
    let mut s = small_session();

    place_bid(&mut s, 1, 10).unwrap();
    assert_eq!(s.current_bid, 20);
    assert_eq!(s.leading_team, Some(1));

    finalize_sale(&mut s).unwrap();
    assert_eq!(s.get_team(1).unwrap().budget, 1980);
    assert_eq!(s.get_team(1).unwrap().roster[0].final_price, 20);
    assert!(s.sold);
    assert_eq!(s.leading_team_name(), s.get_team(1).map(|t| t.name.as_str()));

    advance_to_next_player(&mut s);
    assert_eq!(s.current_player.id, "P2");
    assert_eq!(s.current_bid, 10);
    assert_eq!(s.leading_team, None);
    assert!(!s.sold);
    assert_eq!(s.total_players_drafted(), 1);
}
