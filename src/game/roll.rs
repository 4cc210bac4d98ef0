use rand::Rng;

use crate::dice::{DIE_FACES, DiceRoll, RollOutcome};
use crate::error::RollError;
use crate::result::{RollEffect, RollReport};

use super::{Game, GameState};

impl Game {
    fn ensure_playing(&self) -> Result<(), RollError> {
        if self.state != GameState::Playing {
            log::debug!("rejected roll: game is {}", self.state.label());
            return Err(RollError::NotPlaying);
        }

        Ok(())
    }

    /// Returns whether the current turn is still one of the safe rolls.
    fn in_safe_rolls(&self) -> bool {
        self.turn < self.options.safe_rolls
    }

    fn advance_turn(&mut self) {
        self.turn += 1;
        self.current_player = (self.current_player + 1) % self.players.len();
    }

    /// Rolls two dice and resolves the result.
    ///
    /// Matching dice resolve as [`RollOutcome::Doubles`] once the safe rolls
    /// are over and as their plain total before that, so this never fails
    /// with [`RollError::InvalidDoublesOnTurn`].
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not being played. No dice are drawn
    /// in that case.
    pub fn roll_dice(&mut self) -> Result<RollReport, RollError> {
        self.ensure_playing()?;

        let dice = DiceRoll::new(
            self.rng.random_range(1..=DIE_FACES),
            self.rng.random_range(1..=DIE_FACES),
        );
        let outcome = dice.outcome(self.turn, self.options.safe_rolls);
        log::debug!(
            "player {} rolled {} and {}",
            self.current_player,
            dice.first,
            dice.second
        );

        let effect = self.resolve_roll(outcome)?;

        Ok(RollReport {
            dice,
            outcome,
            effect,
        })
    }

    /// Applies a roll outcome to the bank.
    ///
    /// - A seven adds the seven bonus during the safe rolls and ends the
    ///   round afterwards.
    /// - Doubles double the bank and are only legal after the safe rolls.
    /// - Any other total is added to the bank.
    ///
    /// Unless the round ended, the turn counter advances and play passes to
    /// the next player.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not being played or doubles are
    /// resolved during the safe rolls. The game is left unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use bankdice::{Game, GameOptions, RollEffect, RollOutcome};
    ///
    /// let mut game = Game::new(GameOptions::default(), 7);
    /// game.register_player("Bob").unwrap();
    /// game.register_player("Jill").unwrap();
    /// game.start().unwrap();
    ///
    /// let effect = game.resolve_roll(RollOutcome::Seven).unwrap();
    /// assert_eq!(effect, RollEffect::Added(70));
    /// assert_eq!(game.current_player(), Some(1));
    /// ```
    pub fn resolve_roll(&mut self, outcome: RollOutcome) -> Result<RollEffect, RollError> {
        self.ensure_playing()?;

        let effect = match outcome {
            RollOutcome::Seven if !self.in_safe_rolls() => {
                let result = self.finish_round();
                return Ok(RollEffect::RoundEnded(result));
            }
            RollOutcome::Seven => {
                let bonus = self.options.seven_bonus;
                self.bank = self.bank.saturating_add(bonus);
                RollEffect::Added(bonus)
            }
            RollOutcome::Doubles if self.in_safe_rolls() => {
                log::debug!("rejected doubles on turn {}", self.turn);
                return Err(RollError::InvalidDoublesOnTurn);
            }
            RollOutcome::Doubles => {
                let from = self.bank;
                self.bank = from.saturating_mul(2);
                RollEffect::Doubled {
                    from,
                    to: self.bank,
                }
            }
            plain @ (RollOutcome::Two
            | RollOutcome::Three
            | RollOutcome::Four
            | RollOutcome::Five
            | RollOutcome::Six
            | RollOutcome::Eight
            | RollOutcome::Nine
            | RollOutcome::Ten
            | RollOutcome::Eleven
            | RollOutcome::Twelve) => {
                let points = u64::from(plain.total().unwrap_or_default());
                self.bank = self.bank.saturating_add(points);
                RollEffect::Added(points)
            }
        };

        log::debug!(
            "turn {} of round {}: {outcome:?}, bank is {}",
            self.turn,
            self.round,
            self.bank
        );
        self.advance_turn();

        Ok(effect)
    }
}
