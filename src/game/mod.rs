//! Game engine and state management.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
use rand::SeedableRng;
use rand::seq::IndexedRandom;
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::deck::Deck;
use crate::error::{OrderError, SetupError};
use crate::options::GameOptions;
use crate::player::Player;
use crate::result::Round;

mod play;
pub mod state;

pub use state::GameState;

/// Number of players at the table.
pub const PLAYER_COUNT: usize = 4;

/// Names used for seats the caller did not name.
pub const DEFAULT_NAMES: [&str; PLAYER_COUNT] = ["Player 1", "Player 2", "Player 3", "Player 4"];

/// A four-player game that deals one shuffled deck and plays it out.
///
/// The game owns the roster, every player's hand and the random number
/// generator, so the same seed always produces the same deal and the same
/// sequence of plays.
#[derive(Debug)]
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Roster in seating order.
    names: Vec<String>,
    /// Players by name.
    players: HashMap<String, Player>,
    /// Current game state.
    state: GameState,
    /// Every round played so far.
    rounds: Vec<Round>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed and deals the hands.
    ///
    /// The roster is `names` followed by [`DEFAULT_NAMES`], cut to
    /// [`PLAYER_COUNT`] entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the roster contains the same name twice.
    ///
    /// # Example
    ///
    /// ```
    /// use fourhands::{Game, GameOptions};
    ///
    /// let game = Game::new(["Ada", "Grace"], GameOptions::default(), 7).unwrap();
    /// assert_eq!(game.names(), ["Ada", "Grace", "Player 1", "Player 2"]);
    /// ```
    pub fn new<I, S>(names: I, options: GameOptions, seed: u64) -> Result<Self, SetupError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names = Self::roster(names)?;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let hands = Deck::create(true, &mut rng).deal(PLAYER_COUNT)?;
        let players = names
            .iter()
            .zip(hands)
            .map(|(name, hand)| (name.clone(), Player::new(name.clone(), hand)))
            .collect();

        log::debug!("dealt {PLAYER_COUNT} hands to {names:?} (seed {seed})");

        Ok(Self {
            options,
            names,
            players,
            state: GameState::Dealt,
            rounds: Vec::new(),
            rng,
        })
    }

    /// Builds the roster from supplied names and the defaults.
    fn roster<I, S>(names: I) -> Result<Vec<String>, SetupError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let supplied = names.into_iter().map(Into::into);
        let defaults = DEFAULT_NAMES.iter().map(ToString::to_string);

        let mut roster: Vec<String> = Vec::with_capacity(PLAYER_COUNT);
        for name in supplied.chain(defaults).take(PLAYER_COUNT) {
            if roster.contains(&name) {
                return Err(SetupError::DuplicateName(name));
            }
            roster.push(name);
        }

        Ok(roster)
    }

    /// Returns the roster rotated so that `start` comes first.
    ///
    /// # Errors
    ///
    /// Returns an error if `start` is not on the roster.
    ///
    /// # Example
    ///
    /// ```
    /// use fourhands::{Game, GameOptions};
    ///
    /// let game = Game::new(Vec::<String>::new(), GameOptions::default(), 1).unwrap();
    /// assert_eq!(
    ///     game.turn_order("Player 2").unwrap(),
    ///     ["Player 2", "Player 3", "Player 4", "Player 1"]
    /// );
    /// ```
    pub fn turn_order(&self, start: &str) -> Result<Vec<String>, OrderError> {
        let index = self
            .names
            .iter()
            .position(|name| name == start)
            .ok_or_else(|| OrderError::UnknownPlayer(start.to_string()))?;

        let mut order = self.names.clone();
        order.rotate_left(index);
        Ok(order)
    }

    /// Returns the turn order starting at `start`, or at a random player if
    /// `start` is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if `start` is not on the roster.
    pub fn player_order(&mut self, start: Option<&str>) -> Result<Vec<String>, OrderError> {
        match start {
            Some(name) => self.turn_order(name),
            None => {
                let name = self.random_player();
                self.turn_order(&name)
            }
        }
    }

    /// Picks a uniformly random roster member.
    fn random_player(&mut self) -> String {
        self.names
            .choose(&mut self.rng)
            .cloned()
            .unwrap_or_default()
    }

    /// Returns the roster in seating order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns the player with the given name.
    #[must_use]
    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.get(name)
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns every round played so far, including rounds from a failed
    /// [`Game::play`].
    #[must_use]
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    /// Returns the number of cards left across all hands.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.players.values().map(Player::cards_left).sum()
    }
}
