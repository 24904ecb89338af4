//! Records of played rounds.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;

/// One card revealed by one player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Play {
    /// Name of the player.
    pub player: String,
    /// The card played.
    pub card: Card,
}

/// One pass through the turn order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    /// Round number, starting at 1.
    pub number: usize,
    /// Plays in turn order.
    pub plays: Vec<Play>,
}

/// Everything that happened during [`Game::play`](crate::Game::play).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    /// The player whose hand drives termination.
    pub starting_player: String,
    /// Turn order used for every round.
    pub order: Vec<String>,
    /// Rounds in the order they were played.
    pub rounds: Vec<Round>,
}

impl GameRecord {
    /// Returns the total number of cards played.
    #[must_use]
    pub fn cards_played(&self) -> usize {
        self.rounds.iter().map(|round| round.plays.len()).sum()
    }
}
