//! Error types for power_drill_gen

use thiserror::Error;

/// Result type alias for power_drill_gen
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for power_drill_gen
///
/// Question generation never fails; these cover catalog loading and the
/// session state machine.
#[derive(Error, Debug)]
pub enum Error {
    /// Catalog or config YAML could not be parsed
    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The catalog parsed but breaks an ordering or threshold rule
    #[error("Invalid level catalog: {0}")]
    InvalidCatalog(String),

    /// Session settings that cannot produce a playable attempt
    #[error("Invalid session config: {0}")]
    InvalidConfig(String),

    #[error("Level {0} does not exist")]
    UnknownLevel(u32),

    #[error("Level {level_id} is locked (unlocked up to level {unlocked})")]
    LevelLocked { level_id: u32, unlocked: u32 },

    /// The session was asked to do something its current screen does not allow
    #[error("Cannot {action} while in state {state}")]
    InvalidState { action: &'static str, state: String },

    #[error("The current question has already been answered")]
    AlreadyAnswered,

    #[error("The current question has not been answered yet")]
    NotAnswered,

    #[error("Option {index} is out of range ({len} options)")]
    OptionOutOfRange { index: usize, len: usize },
}
