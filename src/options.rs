//! Game configuration options.

/// Number of rounds played when no other count is configured.
pub const DEFAULT_ROUNDS: u32 = 10;

/// Configuration options for a bank game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bankdice::GameOptions;
///
/// let options = GameOptions::default()
///     .with_rounds(15)
///     .with_seven_bonus(100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Number of rounds in a game.
    pub rounds: u32,
    /// Points added to the bank by a seven during the safe rolls.
    pub seven_bonus: u64,
    /// Number of turns at the start of each round during which a seven pays
    /// [`seven_bonus`](Self::seven_bonus) and doubles are not special.
    ///
    /// From this turn index on, a seven ends the round and doubles double
    /// the bank.
    pub safe_rolls: u32,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_ROUNDS,
            seven_bonus: 70,
            safe_rolls: 3,
        }
    }
}

impl GameOptions {
    /// Sets the number of rounds.
    ///
    /// # Example
    ///
    /// ```
    /// use bankdice::GameOptions;
    ///
    /// let options = GameOptions::default().with_rounds(20);
    /// assert_eq!(options.rounds, 20);
    /// ```
    #[must_use]
    pub const fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }

    /// Sets the bonus paid by an early seven.
    ///
    /// # Example
    ///
    /// ```
    /// use bankdice::GameOptions;
    ///
    /// let options = GameOptions::default().with_seven_bonus(50);
    /// assert_eq!(options.seven_bonus, 50);
    /// ```
    #[must_use]
    pub const fn with_seven_bonus(mut self, bonus: u64) -> Self {
        self.seven_bonus = bonus;
        self
    }

    /// Sets the number of safe rolls at the start of each round.
    ///
    /// # Example
    ///
    /// ```
    /// use bankdice::GameOptions;
    ///
    /// let options = GameOptions::default().with_safe_rolls(2);
    /// assert_eq!(options.safe_rolls, 2);
    /// ```
    #[must_use]
    pub const fn with_safe_rolls(mut self, rolls: u32) -> Self {
        self.safe_rolls = rolls;
        self
    }
}
