//! Configuration for a game session.

use std::path::PathBuf;

use wc_core::START_ROOM;

/// Default save-file name, relative to the working directory.
pub const DEFAULT_SAVE_PATH: &str = "wild_current_save.json";

/// Configuration for a game session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// RNG seed for reproducible rolls.
    pub seed: u64,
    /// Where SAVE writes and LOAD reads.
    pub save_path: PathBuf,
    /// Room the player starts in.
    pub start_room: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            save_path: PathBuf::from(DEFAULT_SAVE_PATH),
            start_room: START_ROOM.to_string(),
        }
    }
}

impl SessionConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the save-file path.
    pub fn with_save_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.save_path = path.into();
        self
    }

    /// Set the starting room.
    pub fn with_start_room(mut self, room: impl Into<String>) -> Self {
        self.start_room = room.into();
        self
    }
}
