//! The fixed, read-only registry of players eligible for auction.
//!
//! Mock data for the live-auction demo; a real season would populate this from
//! verified registrations. Registry order drives the "next player" cycle.

use crate::models::player::{Player, Position};

fn avatar(seed: &str) -> String {
    format!("https://api.dicebear.com/7.x/initials/svg?seed={}", seed)
}

/// All registered players in registry order. Never empty.
pub fn registered_players() -> Vec<Player> {
    vec![
        Player::new(
            "1",
            "Arjun Mehta",
            Position::Midfielder,
            10,
            "Playmaker with exceptional vision and passing accuracy.",
            avatar("Arjun"),
        ),
        Player::new(
            "2",
            "Rohan Das",
            Position::Forward,
            10,
            "Clinical finisher with explosive pace.",
            avatar("Rohan"),
        ),
        Player::new(
            "3",
            "Vikram Singh",
            Position::Defender,
            10,
            "Rock-solid center back with great aerial ability.",
            avatar("Vikram"),
        ),
        Player::new(
            "4",
            "Samir Khan",
            Position::Goalkeeper,
            10,
            "Lightning-fast reflexes and vocal leadership.",
            avatar("Samir"),
        ),
    ]
}
