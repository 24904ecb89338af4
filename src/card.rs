//! Card types.

use core::cmp::Ordering;
use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All suits in deck construction order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    /// Returns the suit glyph.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Spades => '♠',
            Self::Hearts => '♡',
            Self::Diamonds => '♢',
            Self::Clubs => '♣',
        }
    }

    /// Returns whether the suit is rendered red (hearts and diamonds).
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Self::Hearts | Self::Diamonds)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Card rank, declared from lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    /// 2.
    Two,
    /// 3.
    Three,
    /// 4.
    Four,
    /// 5.
    Five,
    /// 6.
    Six,
    /// 7.
    Seven,
    /// 8.
    Eight,
    /// 9.
    Nine,
    /// 10.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Rank {
    /// All ranks from lowest to highest.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Returns the zero-based position of the rank (`Two` is 0, `Ace` is 12).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the rank text.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A playing card.
///
/// Equality is structural on suit and rank. Ordering only looks at the rank,
/// which is why it lives in [`Card::cmp_value`] instead of `Ord`: two cards of
/// the same rank compare equal there while not being the same card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Returns the comparison value of the card, the position of its rank.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.rank.value()
    }

    /// Returns the points this card is worth.
    ///
    /// The queen of spades scores 13, every heart scores 1, anything else 0.
    ///
    /// ```
    /// use fourhands::{Card, Rank, Suit};
    ///
    /// assert_eq!(Card::new(Suit::Spades, Rank::Queen).points(), 13);
    /// assert_eq!(Card::new(Suit::Hearts, Rank::Two).points(), 1);
    /// assert_eq!(Card::new(Suit::Clubs, Rank::Ace).points(), 0);
    /// ```
    #[must_use]
    pub const fn points(&self) -> u8 {
        match (self.suit, self.rank) {
            (Suit::Spades, Rank::Queen) => 13,
            (Suit::Hearts, _) => 1,
            _ => 0,
        }
    }

    /// Compares two cards by value, ignoring the suit.
    #[must_use]
    pub fn cmp_value(&self, other: &Self) -> Ordering {
        self.value().cmp(&other.value())
    }

    /// Returns whether this card ranks strictly below `other`.
    ///
    /// ```
    /// use fourhands::{Card, Rank, Suit};
    ///
    /// let two = Card::new(Suit::Spades, Rank::Two);
    /// let three = Card::new(Suit::Hearts, Rank::Three);
    /// assert!(two.is_below(&three));
    /// assert!(!three.is_below(&two));
    /// ```
    #[must_use]
    pub fn is_below(&self, other: &Self) -> bool {
        self.cmp_value(other) == Ordering::Less
    }
}

impl fmt::Display for Card {
    /// Writes the suit glyph followed by the rank, padded to the requested width.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&alloc::format!("{}{}", self.suit.symbol(), self.rank.symbol()))
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
