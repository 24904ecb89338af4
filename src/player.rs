//! A named participant holding one hand.

use alloc::string::String;

use rand::Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::PlayError;

/// A player bound to the hand it was dealt.
///
/// The hand is owned exclusively; it only shrinks through [`Player::play_card`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    hand: Deck,
}

impl Player {
    /// Creates a player holding `hand`.
    #[must_use]
    pub fn new(name: impl Into<String>, hand: Deck) -> Self {
        Self {
            name: name.into(),
            hand,
        }
    }

    /// Removes a uniformly random card from the hand and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError::EmptyHand`] if the hand has no cards.
    pub fn play_card<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Card, PlayError> {
        if self.hand.is_empty() {
            return Err(PlayError::EmptyHand(self.name.clone()));
        }

        let index = rng.random_range(0..self.hand.len());
        let card = self
            .hand
            .take(index)
            .ok_or_else(|| PlayError::EmptyHand(self.name.clone()))?;

        log::trace!("{} plays {card} ({} left)", self.name, self.hand.len());

        Ok(card)
    }

    /// Returns the player name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn hand(&self) -> &Deck {
        &self.hand
    }

    /// Returns the number of cards left in the hand.
    #[must_use]
    pub fn cards_left(&self) -> usize {
        self.hand.len()
    }

    /// Returns whether the player still holds cards.
    #[must_use]
    pub fn has_cards(&self) -> bool {
        !self.hand.is_empty()
    }
}
