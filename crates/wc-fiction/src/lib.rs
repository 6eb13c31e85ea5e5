//! Simulation engine for Wild Current.
//!
//! Turns typed commands into narration over a live [`GameState`]: movement
//! with gating, inventory and trade, social verbs, item use, turn-based
//! combat, quest and ending detection, and JSON save files. A
//! [`GameSession`] ties the pieces together for a front end.

/// Verb handlers that mutate the game state.
pub mod actions;
/// The in-world clock.
pub mod clock;
/// Predicates over the game state.
pub mod condition;
/// Session configuration.
pub mod config;
/// Read-only views: look, inventory, status, quests, map and help.
pub mod describe;
/// Item use handlers.
pub mod effect;
/// Error types for the engine.
pub mod error;
/// Movement gates.
pub mod gate;
/// The turn log.
pub mod journal;
/// Command parsing and verb suggestions.
pub mod parser;
/// Player state management.
pub mod player;
/// Quest rules and endings.
pub mod quest;
/// Rule constants and the price formula.
pub mod rules;
/// Save documents and file I/O.
pub mod save;
/// Interactive session management.
pub mod session;
/// The mutable world aggregate.
pub mod state;

pub use clock::Clock;
pub use config::SessionConfig;
pub use describe::help_text;
pub use effect::{UseContext, UseRegistry};
pub use error::{FictionError, FictionResult};
pub use journal::{LogEntry, LogKind, TurnLog};
pub use parser::{Command, parse_command, suggest_verb};
pub use player::Player;
pub use quest::{Ending, check_ending, evaluate_quests};
pub use save::SaveData;
pub use session::GameSession;
pub use state::{GameState, RoomState};
