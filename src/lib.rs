//! A "bank" dice game engine with optional `no_std` support.
//!
//! Players take turns rolling two dice into a shared bank. Sevens pay a bonus
//! early in a round and end the round later on, doubles double the bank, and
//! any player may bank to claim the bank when the round ends. The crate
//! provides a [`Game`] type that owns the full round and turn flow; rendering
//! is left to the caller, which reads state back through [`Game::inspect`].
//!
//! # Example
//!
//! ```
//! use bankdice::{Game, GameOptions, GameState, RollOutcome};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! let bob = game.register_player("Bob").unwrap();
//! game.register_player("Jill").unwrap();
//! game.start().unwrap();
//!
//! game.resolve_roll(RollOutcome::Eight).unwrap();
//! game.bank(bob).unwrap();
//! game.end_round().unwrap();
//!
//! assert_eq!(game.player(bob).unwrap().score(), 8);
//! assert_eq!(game.state(), GameState::Playing);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod dice;
pub mod error;
pub mod game;
pub mod options;
pub mod player;
pub mod result;
pub mod snapshot;

// Re-export main types
pub use dice::{DiceRoll, RollOutcome};
pub use error::{BankError, EndRoundError, RegisterError, RollError, StartError};
pub use game::{Game, GameState};
pub use options::GameOptions;
pub use player::{Player, PlayerId};
pub use result::{Payout, RollEffect, RollReport, RoundResult};
pub use snapshot::{PlayerSnapshot, Snapshot};
