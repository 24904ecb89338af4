//! Game configuration options.

use alloc::string::String;

/// When [`Game::play`](crate::Game::play) stops dealing rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum Termination {
    /// Stop once the starting player's hand is empty.
    ///
    /// Every other hand is assumed to empty at the same time, which holds
    /// because all hands are dealt the same size and each round takes one card
    /// from each. Hands of unequal size make a round fail with
    /// [`PlayError::EmptyHand`](crate::PlayError::EmptyHand).
    #[default]
    StartingPlayer,
    /// Keep playing while any hand has cards, skipping empty hands.
    AllHandsEmpty,
}

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use fourhands::{GameOptions, Termination};
///
/// let options = GameOptions::default()
///     .with_termination(Termination::AllHandsEmpty)
///     .with_starting_player("Player 3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameOptions {
    /// Termination rule for the play loop.
    pub termination: Termination,
    /// Player who leads every round. Chosen at random when `None`.
    pub starting_player: Option<String>,
}

impl GameOptions {
    /// Sets the termination rule.
    ///
    /// # Example
    ///
    /// ```
    /// use fourhands::{GameOptions, Termination};
    ///
    /// let options = GameOptions::default().with_termination(Termination::AllHandsEmpty);
    /// assert_eq!(options.termination, Termination::AllHandsEmpty);
    /// ```
    #[must_use]
    pub const fn with_termination(mut self, termination: Termination) -> Self {
        self.termination = termination;
        self
    }

    /// Sets the starting player.
    ///
    /// # Example
    ///
    /// ```
    /// use fourhands::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_player("Player 2");
    /// assert_eq!(options.starting_player.as_deref(), Some("Player 2"));
    /// ```
    #[must_use]
    pub fn with_starting_player(mut self, name: impl Into<String>) -> Self {
        self.starting_player = Some(name.into());
        self
    }
}
