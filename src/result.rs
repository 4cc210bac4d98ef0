//! Result types for rolls and round ends.

use alloc::vec::Vec;

use crate::dice::{DiceRoll, RollOutcome};
use crate::player::PlayerId;

/// What a resolved roll did to the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RollEffect {
    /// Points were added to the bank.
    Added(u64),
    /// The bank was doubled.
    Doubled {
        /// Bank before the roll.
        from: u64,
        /// Bank after the roll.
        to: u64,
    },
    /// A late seven ended the round.
    RoundEnded(RoundResult),
}

/// Report of a [`Game::roll_dice`](crate::Game::roll_dice) call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollReport {
    /// The dice that were drawn.
    pub dice: DiceRoll,
    /// The outcome the dice resolved to.
    pub outcome: RollOutcome,
    /// The effect of resolving the outcome.
    pub effect: RollEffect,
}

/// A payout made to a banked player at the end of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Payout {
    /// The player that was paid.
    pub player_id: PlayerId,
    /// Amount added to the player's score.
    pub amount: u64,
    /// The player's score after the payout.
    pub score: u64,
}

/// Result of an ended round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// The 0-based round that ended.
    pub round: u32,
    /// The bank that was distributed.
    pub bank: u64,
    /// Payouts to every player that had banked.
    pub payouts: Vec<Payout>,
    /// Whether this was the final round.
    pub game_over: bool,
}
