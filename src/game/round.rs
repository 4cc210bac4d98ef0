use alloc::vec::Vec;

use crate::error::{BankError, EndRoundError};
use crate::player::{Player, PlayerId};
use crate::result::{Payout, RoundResult};

use super::{Game, GameState};

impl Game {
    /// Banks the specified player for the rest of the round.
    ///
    /// When the round ends the player's score grows by whatever the bank
    /// holds at that moment.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not being played, the player cannot be
    /// found, or the player has already banked this round.
    pub fn bank(&mut self, player_id: PlayerId) -> Result<(), BankError> {
        if self.state != GameState::Playing {
            log::debug!("rejected bank for player {player_id}: game is {}", self.state.label());
            return Err(BankError::NotPlaying);
        }

        let Some(player) = self.players.get_mut(player_id) else {
            log::debug!("rejected bank for unknown player {player_id}");
            return Err(BankError::PlayerNotFound);
        };

        if player.has_banked() {
            log::debug!("rejected bank for player {player_id}: already banked");
            return Err(BankError::AlreadyBanked);
        }

        player.set_banked(true);
        log::debug!(
            "player {player_id} banked in round {} at {}",
            self.round,
            self.bank
        );

        Ok(())
    }

    /// Ends the current round.
    ///
    /// Every banked player receives the bank and has their banked flag
    /// cleared. The bank and turn are reset and the round counter advances;
    /// after the final round the game is over.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not being played.
    pub fn end_round(&mut self) -> Result<RoundResult, EndRoundError> {
        if self.state != GameState::Playing {
            log::debug!("rejected round end: game is {}", self.state.label());
            return Err(EndRoundError::NotPlaying);
        }

        Ok(self.finish_round())
    }

    /// Settles the bank and moves to the next round without checking state.
    pub(super) fn finish_round(&mut self) -> RoundResult {
        let bank = self.bank;
        let payouts: Vec<Payout> = self
            .players
            .iter_mut()
            .enumerate()
            .filter_map(|(player_id, player)| {
                player.settle(bank).map(|amount| Payout {
                    player_id,
                    amount,
                    score: player.score(),
                })
            })
            .collect();

        let round = self.round;
        self.bank = 0;
        self.turn = 0;
        self.round += 1;

        let game_over = self.round == self.rounds;
        if game_over {
            self.state = GameState::GameOver;
        }

        log::info!(
            "round {} of {} ended, paid {bank} to {} player(s)",
            round + 1,
            self.rounds,
            payouts.len()
        );
        if game_over {
            log::info!("game over");
        }

        RoundResult {
            round,
            bank,
            payouts,
            game_over,
        }
    }

    /// Returns every player tied for the highest score.
    ///
    /// Once the game is over these are the winners. Returns an empty list if
    /// no players are registered.
    pub fn leaders(&self) -> Vec<PlayerId> {
        let Some(best) = self.players.iter().map(Player::score).max() else {
            return Vec::new();
        };

        self.players
            .iter()
            .enumerate()
            .filter(|(_, player)| player.score() == best)
            .map(|(player_id, _)| player_id)
            .collect()
    }
}
