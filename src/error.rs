//! Error types for deck and game operations.

use alloc::string::String;

use thiserror::Error;

/// Errors that can occur when dealing a deck into hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Zero hands requested.
    #[error("cannot deal into zero hands")]
    ZeroHands,
    /// The deck does not split evenly into the requested number of hands.
    #[error("{cards} cards cannot be dealt evenly into {hands} hands")]
    Uneven {
        /// Number of cards in the deck.
        cards: usize,
        /// Number of hands requested.
        hands: usize,
    },
}

/// Errors that can occur when computing a turn order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// The starting name is not part of the roster.
    #[error("player not found: {0}")]
    UnknownPlayer(String),
}

/// Errors that can occur while playing cards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayError {
    /// The player has no cards left.
    #[error("{0} has no cards left to play")]
    EmptyHand(String),
    /// The player is not part of the roster.
    #[error("player not found: {0}")]
    UnknownPlayer(String),
}

impl From<OrderError> for PlayError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::UnknownPlayer(name) => Self::UnknownPlayer(name),
        }
    }
}

/// Errors that can occur while setting up a game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    /// The same name appears twice in the roster.
    #[error("duplicate player name: {0}")]
    DuplicateName(String),
    /// The shuffled deck could not be dealt.
    #[error(transparent)]
    Deal(#[from] DealError),
}
