//! Player types.

use alloc::string::String;

/// Identifies a registered player.
///
/// Ids are handed out in registration order starting at 0 and double as the
/// player's seat in the turn rotation.
pub type PlayerId = usize;

/// A registered player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    score: u64,
    banked: bool,
}

impl Player {
    /// Creates a player with no score.
    #[must_use]
    pub(crate) const fn new(name: String) -> Self {
        Self {
            name,
            score: 0,
            banked: false,
        }
    }

    /// Returns the player's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's cumulative banked score.
    #[must_use]
    pub const fn score(&self) -> u64 {
        self.score
    }

    /// Returns whether the player has banked in the current round.
    #[must_use]
    pub const fn has_banked(&self) -> bool {
        self.banked
    }

    pub(crate) const fn set_banked(&mut self, banked: bool) {
        self.banked = banked;
    }

    /// Pays out the bank if the player banked this round and clears the flag.
    ///
    /// Returns the amount paid.
    pub(crate) const fn settle(&mut self, bank: u64) -> Option<u64> {
        if !self.banked {
            return None;
        }

        self.score = self.score.saturating_add(bank);
        self.banked = false;
        Some(bank)
    }
}
