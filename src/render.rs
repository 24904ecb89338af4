//! Terminal rendering of cards and rounds.
//!
//! Colors are a presentation concern only; [`Card`]'s own `Display` never
//! emits escape codes.

use alloc::string::String;
use alloc::vec::Vec;

use colored::{ColoredString, Colorize};

use crate::card::Card;
use crate::result::{GameRecord, Round};

/// Width of a rendered card, enough for `♠10`.
pub const CARD_WIDTH: usize = 3;

/// Renders a card padded to [`CARD_WIDTH`], red for hearts and diamonds.
#[must_use]
pub fn card(card: &Card) -> ColoredString {
    let text = format!("{card:<CARD_WIDTH$}");
    if card.suit.is_red() {
        text.red()
    } else {
        text.normal()
    }
}

/// Renders one round as `<name>: <card>` entries separated by spaces.
#[must_use]
pub fn round(round: &Round) -> String {
    round
        .plays
        .iter()
        .map(|play| format!("{}: {}", play.player, card(&play.card)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders a whole game: each round on its own line followed by a blank line.
#[must_use]
pub fn game(record: &GameRecord) -> String {
    record
        .rounds
        .iter()
        .map(|played| format!("{}\n\n", round(played)))
        .collect()
}

/// Turns coloring on or off for everything rendered afterwards.
pub fn set_color(enabled: bool) {
    colored::control::set_override(enabled);
}
