//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    /// Registering players.
    #[default]
    Setup,
    /// Rounds are being played.
    Playing,
    /// All rounds have been played.
    GameOver,
}

impl GameState {
    /// Returns the display label of the state.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Setup => "Setup",
            Self::Playing => "Playing",
            Self::GameOver => "GameOver",
        }
    }
}
