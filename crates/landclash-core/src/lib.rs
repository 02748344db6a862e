//! Landclash Core Library
//!
//! This crate contains the core game logic for Landclash, a turn-based
//! territory-conquest game: numbered land parcels are randomly distributed
//! among a roster of named players, and players seize land from each other
//! via coin-flip battles until a single active player remains.
//!
//! # Design Principles
//!
//! - **No UI dependencies**: This crate is purely game logic
//! - **Deterministic**: The randomness source is injected, so the same seed
//!   always produces the same game
//! - **Serializable**: All state can be captured via serde
//! - **Request/response turns**: The turn cycle is a plain function call,
//!   testable without console I/O

// Core modules
pub mod land;
pub mod player;
pub mod types;

// Game state modules
pub mod game_state;
pub mod settings;

// Battle resolution
pub mod battle;

// Deterministic randomness
pub mod rng;

// Re-exports for convenience
pub use battle::{resolve_battle, BattleContext, BattleOutcome};
pub use game_state::{GameError, GamePhase, GameState, TurnCommand, TurnReport};
pub use land::Land;
pub use player::Player;
pub use rng::SeededRng;
pub use settings::{GameSettings, SettingsError};
pub use types::{LandId, PlayerId};
