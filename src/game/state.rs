//! Game state types.

/// Game state.
///
/// A game is dealt as part of construction, so there is no observable state
/// before [`GameState::Dealt`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Hands have been dealt and no round has been played.
    Dealt,
    /// Rounds are being played.
    Playing,
    /// The play loop has terminated.
    Finished,
    /// The play loop stopped because a player had to play from an empty hand.
    Aborted,
}
