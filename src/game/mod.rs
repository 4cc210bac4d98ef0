//! Game engine and state management.

use alloc::string::ToString;
use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::error::{RegisterError, StartError};
use crate::options::GameOptions;
use crate::player::{Player, PlayerId};
use crate::snapshot::{PlayerSnapshot, Snapshot};

mod roll;
mod round;
pub mod state;

pub use state::GameState;

/// Minimum number of players needed to start a game.
pub const MIN_PLAYERS: usize = 2;

/// A bank dice game engine that manages players, rounds, and scoring.
///
/// The game owns the player list, the shared bank, and the dice. Use
/// [`GameOptions`] to configure the round count and scoring constants.
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    options: GameOptions,
    /// Current game state.
    state: GameState,
    /// Registered players, indexed by [`PlayerId`].
    players: Vec<Player>,
    /// Shared bank for the current round.
    bank: u64,
    /// Current 0-based round.
    round: u32,
    /// Number of rounds in this game.
    rounds: u32,
    /// Current 0-based turn within the round.
    turn: u32,
    /// Index of the player whose turn it is.
    current_player: usize,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bankdice::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::Setup);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            options,
            state: GameState::Setup,
            players: Vec::new(),
            bank: 0,
            round: 0,
            rounds: options.rounds,
            turn: 0,
            current_player: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Registers a new player.
    ///
    /// Names are compared exactly, so `"bob"` and `"Bob"` are different
    /// players. Returns the assigned player ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has already started, the name is empty,
    /// or the name is already in use.
    pub fn register_player(&mut self, name: &str) -> Result<PlayerId, RegisterError> {
        if self.state != GameState::Setup {
            log::debug!("rejected player {name:?}: game already started");
            return Err(RegisterError::InvalidState);
        }

        if name.is_empty() {
            log::debug!("rejected player: empty name");
            return Err(RegisterError::EmptyName);
        }

        if self.players.iter().any(|player| player.name() == name) {
            log::debug!("rejected player {name:?}: name in use");
            return Err(RegisterError::DuplicateName);
        }

        let id = self.players.len();
        self.players.push(Player::new(name.to_string()));
        log::debug!("registered player {id} as {name:?}");

        Ok(id)
    }

    /// Starts the game with the configured number of rounds.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in setup, fewer than two players
    /// are registered, or the configured round count is zero.
    pub fn start(&mut self) -> Result<(), StartError> {
        self.start_with_rounds(self.options.rounds)
    }

    /// Starts the game with an explicit number of rounds.
    ///
    /// Resets the bank, round, turn, and current player, and clears every
    /// player's banked flag.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in setup, fewer than two players
    /// are registered, or `rounds` is zero.
    pub fn start_with_rounds(&mut self, rounds: u32) -> Result<(), StartError> {
        if self.state != GameState::Setup {
            log::debug!("cannot start: game is {}", self.state.label());
            return Err(StartError::InvalidState);
        }

        if self.players.len() < MIN_PLAYERS {
            log::debug!(
                "cannot start with {} player(s), need {MIN_PLAYERS}",
                self.players.len()
            );
            return Err(StartError::NotEnoughPlayers);
        }

        if rounds == 0 {
            log::debug!("cannot start a game with zero rounds");
            return Err(StartError::ZeroRounds);
        }

        self.state = GameState::Playing;
        self.bank = 0;
        self.round = 0;
        self.turn = 0;
        self.current_player = 0;
        self.rounds = rounds;

        for player in &mut self.players {
            player.set_banked(false);
        }

        log::debug!(
            "started game with {} players over {rounds} rounds",
            self.players.len()
        );

        Ok(())
    }

    /// Returns the game options.
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current game state.
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns whether every round has been played.
    pub fn is_over(&self) -> bool {
        self.state == GameState::GameOver
    }

    /// Returns the shared bank for the current round.
    pub const fn bank_score(&self) -> u64 {
        self.bank
    }

    /// Returns the current 0-based round.
    pub const fn round(&self) -> u32 {
        self.round
    }

    /// Returns the number of rounds in this game.
    pub const fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Returns the current 0-based turn within the round.
    pub const fn turn(&self) -> u32 {
        self.turn
    }

    /// Returns the player whose turn it is.
    ///
    /// Returns `None` unless the game is being played.
    pub fn current_player(&self) -> Option<PlayerId> {
        (self.state == GameState::Playing).then_some(self.current_player)
    }

    /// Returns the number of registered players.
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Returns the specified player.
    pub fn player(&self, player_id: PlayerId) -> Option<&Player> {
        self.players.get(player_id)
    }

    /// Returns all registered players in turn order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns a read-only snapshot of the whole game.
    ///
    /// # Example
    ///
    /// ```
    /// use bankdice::{Game, GameOptions, GameState};
    ///
    /// let mut game = Game::new(GameOptions::default(), 1);
    /// game.register_player("Bob").unwrap();
    ///
    /// let snapshot = game.inspect();
    /// assert_eq!(snapshot.state, GameState::Setup);
    /// assert_eq!(snapshot.players[0].name, "Bob");
    /// assert_eq!(snapshot.current_player, None);
    /// ```
    pub fn inspect(&self) -> Snapshot {
        Snapshot {
            state: self.state,
            players: self
                .players
                .iter()
                .enumerate()
                .map(|(id, player)| PlayerSnapshot {
                    id,
                    name: player.name().to_string(),
                    score: player.score(),
                    banked: player.has_banked(),
                })
                .collect(),
            round: self.round,
            rounds: self.rounds,
            turn: self.turn,
            bank: self.bank,
            current_player: self.current_player(),
            leaders: if self.state == GameState::GameOver {
                self.leaders()
            } else {
                Vec::new()
            },
        }
    }
}
