//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur while registering a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegisterError {
    /// Players can only be registered before the game starts.
    #[error("players can only be registered during setup")]
    InvalidState,
    /// The name is empty.
    #[error("player name is empty")]
    EmptyName,
    /// Another player already uses this name.
    #[error("player name is already in use")]
    DuplicateName,
}

/// Errors that can occur when starting the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StartError {
    /// The game has already been started.
    #[error("invalid game state for starting")]
    InvalidState,
    /// Fewer than two players are registered.
    #[error("at least two players are required")]
    NotEnoughPlayers,
    /// The round count is zero.
    #[error("the game needs at least one round")]
    ZeroRounds,
}

/// Errors that can occur while rolling or resolving a roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RollError {
    /// The game is not being played.
    #[error("the game is not playing")]
    NotPlaying,
    /// Doubles were resolved before they become legal in the round.
    #[error("doubles cannot be rolled this early in the round")]
    InvalidDoublesOnTurn,
}

/// Errors that can occur when a player banks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BankError {
    /// The game is not being played.
    #[error("the game is not playing")]
    NotPlaying,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// The player has already banked this round.
    #[error("player has already banked this round")]
    AlreadyBanked,
}

/// Errors that can occur when ending a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EndRoundError {
    /// The game is not being played.
    #[error("the game is not playing")]
    NotPlaying,
}
