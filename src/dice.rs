//! Dice and roll outcome types.

/// Number of faces on each die.
pub const DIE_FACES: u8 = 6;

/// The resolved result of a roll, as fed into [`Game::resolve_roll`].
///
/// Every two-dice total is its own variant so that an out-of-range total
/// cannot be represented.
///
/// [`Game::resolve_roll`]: crate::Game::resolve_roll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RollOutcome {
    /// Total of 2.
    Two,
    /// Total of 3.
    Three,
    /// Total of 4.
    Four,
    /// Total of 5.
    Five,
    /// Total of 6.
    Six,
    /// Total of 7.
    Seven,
    /// Total of 8.
    Eight,
    /// Total of 9.
    Nine,
    /// Total of 10.
    Ten,
    /// Total of 11.
    Eleven,
    /// Total of 12.
    Twelve,
    /// Both dice show the same face after the safe rolls.
    Doubles,
}

impl RollOutcome {
    /// Every numeric outcome, in ascending order.
    pub const TOTALS: [Self; 11] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Eleven,
        Self::Twelve,
    ];

    /// Converts a two-dice total into an outcome.
    ///
    /// Returns `None` if the total is outside `2..=12`.
    ///
    /// # Example
    ///
    /// ```
    /// use bankdice::RollOutcome;
    ///
    /// assert_eq!(RollOutcome::from_total(7), Some(RollOutcome::Seven));
    /// assert_eq!(RollOutcome::from_total(13), None);
    /// ```
    #[must_use]
    pub const fn from_total(total: u8) -> Option<Self> {
        match total {
            2..=12 => Some(Self::TOTALS[(total - 2) as usize]),
            _ => None,
        }
    }

    /// Returns the numeric total, or `None` for [`RollOutcome::Doubles`].
    #[must_use]
    pub const fn total(self) -> Option<u8> {
        match self {
            Self::Two => Some(2),
            Self::Three => Some(3),
            Self::Four => Some(4),
            Self::Five => Some(5),
            Self::Six => Some(6),
            Self::Seven => Some(7),
            Self::Eight => Some(8),
            Self::Nine => Some(9),
            Self::Ten => Some(10),
            Self::Eleven => Some(11),
            Self::Twelve => Some(12),
            Self::Doubles => None,
        }
    }
}

/// The faces of a physical two-dice roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiceRoll {
    /// Face of the first die (1-6).
    pub first: u8,
    /// Face of the second die (1-6).
    pub second: u8,
}

impl DiceRoll {
    /// Creates a new roll.
    ///
    /// Note: This function does not validate the faces. Values outside 1..=6
    /// are accepted; [`outcome`](Self::outcome) clamps their sum into
    /// `2..=12` and still treats any two equal faces as doubles.
    #[must_use]
    pub const fn new(first: u8, second: u8) -> Self {
        Self { first, second }
    }

    /// Sum of both faces.
    #[must_use]
    pub const fn total(self) -> u8 {
        self.first.saturating_add(self.second)
    }

    /// Returns whether both dice show the same face.
    #[must_use]
    pub const fn is_doubles(self) -> bool {
        self.first == self.second
    }

    /// Resolves the faces into an outcome for the given turn.
    ///
    /// Matching faces count as [`RollOutcome::Doubles`] only once `turn` has
    /// reached `safe_rolls`; before that they score as their total. Sums
    /// below 2 resolve as [`RollOutcome::Two`] and sums above 12 as
    /// [`RollOutcome::Twelve`].
    ///
    /// # Example
    ///
    /// ```
    /// use bankdice::{DiceRoll, RollOutcome};
    ///
    /// let roll = DiceRoll::new(4, 4);
    /// assert_eq!(roll.outcome(0, 3), RollOutcome::Eight);
    /// assert_eq!(roll.outcome(3, 3), RollOutcome::Doubles);
    /// ```
    #[must_use]
    pub const fn outcome(self, turn: u32, safe_rolls: u32) -> RollOutcome {
        if self.is_doubles() && turn >= safe_rolls {
            return RollOutcome::Doubles;
        }

        match RollOutcome::from_total(self.total()) {
            Some(outcome) => outcome,
            None if self.total() < 2 => RollOutcome::Two,
            None => RollOutcome::Twelve,
        }
    }
}
