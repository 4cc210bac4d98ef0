//! Read-only views of the game for rendering and logging.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::game::GameState;
use crate::player::PlayerId;

/// A player as seen in a [`Snapshot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSnapshot {
    /// The player ID.
    pub id: PlayerId,
    /// The display name.
    pub name: String,
    /// Cumulative banked score.
    pub score: u64,
    /// Whether the player has banked this round.
    pub banked: bool,
}

/// A copy of the full game state at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Current game state.
    pub state: GameState,
    /// All players in turn order.
    pub players: Vec<PlayerSnapshot>,
    /// Current 0-based round.
    pub round: u32,
    /// Number of rounds in the game.
    pub rounds: u32,
    /// Current 0-based turn within the round.
    pub turn: u32,
    /// Shared bank for the current round.
    pub bank: u64,
    /// The player whose turn it is, while the game is being played.
    pub current_player: Option<PlayerId>,
    /// Players tied for the highest score, once the game is over.
    pub leaders: Vec<PlayerId>,
}

impl Snapshot {
    /// Returns the player whose turn it is.
    #[must_use]
    pub fn current(&self) -> Option<&PlayerSnapshot> {
        self.current_player.and_then(|id| self.players.get(id))
    }

    fn write_players(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "players:")?;
        for player in &self.players {
            let marker = if player.banked { " (banked)" } else { "" };
            writeln!(f, "  {}: {}{marker}", player.name, player.score)?;
        }
        Ok(())
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.state.label())?;
        self.write_players(f)?;

        match self.state {
            GameState::Setup => {}
            GameState::Playing => {
                writeln!(f, "round: {} of {}", self.round + 1, self.rounds)?;
                writeln!(f, "turn: {}", self.turn)?;
                writeln!(f, "bank: {}", self.bank)?;
                if let Some(player) = self.current() {
                    writeln!(f, "current player: {}", player.name)?;
                }
            }
            GameState::GameOver => {
                let names: Vec<&str> = self
                    .leaders
                    .iter()
                    .filter_map(|&id| self.players.get(id))
                    .map(|player| player.name.as_str())
                    .collect();
                writeln!(f, "leaders: {}", names.join(", "))?;
            }
        }

        Ok(())
    }
}
