//! Ordered card sequences: the full deck and the hands dealt from it.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DealError;

/// An ordered sequence of cards.
///
/// The type does not enforce uniqueness; only [`Deck::standard`] guarantees
/// one card per suit and rank. Hands are decks too.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Wraps an existing card sequence.
    #[must_use]
    pub const fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Creates the standard 52-card deck in a fixed order.
    ///
    /// Cards are laid out rank-major, suit-minor: every suit of `2` in
    /// [`Suit::ALL`] order, then every suit of `3`, up to the aces.
    ///
    /// ```
    /// use fourhands::{Card, Deck, Rank, Suit};
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// assert_eq!(deck.cards()[0], Card::new(Suit::Spades, Rank::Two));
    /// assert_eq!(deck.cards()[51], Card::new(Suit::Clubs, Rank::Ace));
    /// ```
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for rank in Rank::ALL {
            for suit in Suit::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Creates the standard deck and shuffles it if `shuffle` is set.
    #[must_use]
    pub fn create<R: Rng + ?Sized>(shuffle: bool, rng: &mut R) -> Self {
        let mut deck = Self::standard();
        if shuffle {
            deck.shuffle(rng);
        }
        deck
    }

    /// Shuffles the cards in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Deals the deck round-robin into `num_hands` hands.
    ///
    /// The card at index `i` goes to hand `i % num_hands`, keeping the
    /// relative order of the cards inside each hand.
    ///
    /// # Errors
    ///
    /// Returns an error if `num_hands` is zero or the deck size is not a
    /// multiple of `num_hands`. Uneven hands are never produced.
    ///
    /// ```
    /// use fourhands::{DealError, Deck};
    ///
    /// let hands = Deck::standard().deal(4).unwrap();
    /// assert!(hands.iter().all(|hand| hand.len() == 13));
    ///
    /// assert_eq!(
    ///     Deck::standard().deal(5),
    ///     Err(DealError::Uneven { cards: 52, hands: 5 })
    /// );
    /// ```
    pub fn deal(self, num_hands: usize) -> Result<Vec<Self>, DealError> {
        if num_hands == 0 {
            return Err(DealError::ZeroHands);
        }

        let cards = self.cards.len();
        if cards % num_hands != 0 {
            return Err(DealError::Uneven {
                cards,
                hands: num_hands,
            });
        }

        let per_hand = cards / num_hands;
        let mut hands: Vec<Self> = (0..num_hands)
            .map(|_| Self::new(Vec::with_capacity(per_hand)))
            .collect();

        for (index, card) in self.cards.into_iter().enumerate() {
            hands[index % num_hands].cards.push(card);
        }

        Ok(hands)
    }

    /// Removes and returns the card at `index`, keeping the order of the rest.
    ///
    /// Returns `None` if `index` is out of range.
    pub fn take(&mut self, index: usize) -> Option<Card> {
        (index < self.cards.len()).then(|| self.cards.remove(index))
    }

    /// Returns the cards in order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether the deck holds `card`.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Returns the sum of the points of all cards.
    #[must_use]
    pub fn points(&self) -> u32 {
        self.cards.iter().map(|card| u32::from(card.points())).sum()
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self::new(cards)
    }
}
