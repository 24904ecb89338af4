use alloc::string::String;
use alloc::vec::Vec;

use crate::error::PlayError;
use crate::options::Termination;
use crate::player::Player;
use crate::result::{GameRecord, Play, Round};

use super::{Game, GameState};

impl Game {
    /// Returns whether another round should be played.
    fn keep_playing(&self, starting_player: &str) -> bool {
        match self.options.termination {
            Termination::StartingPlayer => self
                .players
                .get(starting_player)
                .is_some_and(Player::has_cards),
            Termination::AllHandsEmpty => self.players.values().any(Player::has_cards),
        }
    }

    /// Checks that every player in `order` exists and can play this round.
    fn ensure_round_playable(&self, order: &[String]) -> Result<(), PlayError> {
        for name in order {
            let player = self
                .players
                .get(name)
                .ok_or_else(|| PlayError::UnknownPlayer(name.clone()))?;

            if self.options.termination == Termination::StartingPlayer && !player.has_cards() {
                return Err(PlayError::EmptyHand(name.clone()));
            }
        }

        Ok(())
    }

    /// Plays one round: every player in `order` plays one card.
    ///
    /// With [`Termination::AllHandsEmpty`] players whose hand is already empty
    /// are skipped. Otherwise every listed player must still hold a card.
    /// The round is checked before any card is played, so a failed round
    /// leaves the hands and the game state untouched. A played round is
    /// appended to [`Game::rounds`] and moves the game to
    /// [`GameState::Playing`].
    ///
    /// # Errors
    ///
    /// Returns an error if a name in `order` is not on the roster, or a player
    /// that must play has an empty hand.
    pub fn play_round(&mut self, order: &[String]) -> Result<Round, PlayError> {
        self.ensure_round_playable(order)?;
        self.state = GameState::Playing;

        let mut plays = Vec::with_capacity(order.len());
        for name in order {
            let player = self
                .players
                .get_mut(name)
                .ok_or_else(|| PlayError::UnknownPlayer(name.clone()))?;

            if !player.has_cards() {
                continue;
            }

            let card = player.play_card(&mut self.rng)?;
            plays.push(Play {
                player: name.clone(),
                card,
            });
        }

        let round = Round {
            number: self.rounds.len() + 1,
            plays,
        };
        self.rounds.push(round.clone());

        Ok(round)
    }

    /// Plays the game out.
    ///
    /// The starting player comes from [`GameOptions::starting_player`] or is
    /// drawn at random. Rounds follow the turn order starting at that player
    /// until the [`Termination`] rule stops them. Hands are not reset, so a
    /// second call continues from whatever is left.
    ///
    /// [`GameOptions::starting_player`]: crate::GameOptions::starting_player
    ///
    /// # Errors
    ///
    /// Returns an error if the configured starting player is not on the
    /// roster, or a player has to play from an empty hand. In the latter case
    /// the game moves to [`GameState::Aborted`]; rounds completed before the
    /// failure stay available through [`Game::rounds`].
    pub fn play(&mut self) -> Result<GameRecord, PlayError> {
        let starting_player = match self.options.starting_player.clone() {
            Some(name) => name,
            None => self.random_player(),
        };
        let order = self.turn_order(&starting_player)?;

        log::debug!("{starting_player} starts, turn order {order:?}");
        let first_round = self.rounds.len();

        while self.keep_playing(&starting_player) {
            if let Err(err) = self.play_round(&order) {
                self.state = GameState::Aborted;
                log::warn!(
                    "aborted after {} rounds: {err}",
                    self.rounds.len() - first_round
                );
                return Err(err);
            }
        }

        self.state = GameState::Finished;
        let rounds = self.rounds[first_round..].to_vec();
        log::debug!(
            "finished after {} rounds, {} cards left",
            rounds.len(),
            self.cards_remaining()
        );

        Ok(GameRecord {
            starting_player,
            order,
            rounds,
        })
    }
}
