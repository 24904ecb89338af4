//! A four-player card dealing and turn-taking engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that shuffles a standard 52-card
//! [`Deck`], deals it round-robin into four hands and plays them out one card
//! per player per round.
//!
//! # Example
//!
//! ```
//! use fourhands::{Game, GameOptions};
//!
//! let mut game = Game::new(Vec::<String>::new(), GameOptions::default(), 42).unwrap();
//! let record = game.play().unwrap();
//! assert_eq!(record.rounds.len(), 13);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod player;
#[cfg(feature = "color")]
#[cfg_attr(docsrs, doc(cfg(feature = "color")))]
pub mod render;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{DealError, OrderError, PlayError, SetupError};
pub use game::{DEFAULT_NAMES, Game, GameState, PLAYER_COUNT};
pub use options::{GameOptions, Termination};
pub use player::Player;
pub use result::{GameRecord, Play, Round};
