//! Market Quiz - electricity-market rules quiz game core
//!
//! Core modules:
//! - `state`: Game state aggregate and the pure reducer over it
//! - `leaderboard`: Top-10 score table
//! - `store`: State holder that persists a projection on every change
//! - `persistence`: Projection + versioned envelope for durable storage
//! - `platform`: Key/value storage backends (LocalStorage on web)
//! - `question_bank`: Validation and counting for question-bank files

pub mod error;
pub mod leaderboard;
pub mod persistence;
pub mod platform;
pub mod question_bank;
pub mod state;
pub mod store;

#[cfg(target_arch = "wasm32")]
pub mod bindings;

pub use error::{PersistError, QuestionBankError, StorageError};
pub use leaderboard::{Leaderboard, LeaderboardEntry};
pub use persistence::PersistedState;
pub use platform::{MemoryStorage, Storage};
pub use state::{GameAction, GameState, LevelScore, User};
pub use store::{GameStore, StoreOptions};

#[cfg(target_arch = "wasm32")]
pub use platform::LocalStorage;

/// Game configuration constants
pub mod consts {
    /// LocalStorage key holding the persisted projection
    pub const STORAGE_KEY: &str = "game-storage";
    /// Version written into the persisted envelope
    pub const PERSIST_VERSION: u32 = 0;

    /// Leaderboard size
    pub const MAX_LEADERBOARD_ENTRIES: usize = 10;
    /// Upper bound for stars earned in a run
    pub const MAX_STARS: i32 = 3;

    /// Starting position
    pub const INITIAL_LEVEL: u32 = 1;
    pub const INITIAL_SECTION: u32 = 1;

    /// How many ids the id counter prints from each end
    pub const ID_SAMPLE_SIZE: usize = 20;

    /// Default question-bank locations (relative to the working directory)
    pub const DEFAULT_QUESTIONS_JSON: &str = "data/questions.json";
    pub const DEFAULT_QUESTIONS_TEXT: &str = "data/question-bank.txt";
    pub const DEFAULT_VALIDATE_FILES: [&str; 2] =
        ["data/questions.json", "data/level-questions.json"];
}
