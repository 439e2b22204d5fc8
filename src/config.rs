use serde::{Deserialize, Serialize};

use crate::catalog::LevelDefinition;
use crate::error::Result;
use crate::quiz_engine::ShuffleMode;

/// Questions in one level attempt.
pub const QUESTIONS_PER_ATTEMPT: u32 = 5;

/// Which catalog field decides whether an attempt passes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThresholdPolicy {
    /// `LevelDefinition::pass_threshold` (3 for the builtin levels).
    #[default]
    PassThreshold,
    /// `LevelDefinition::required_score` (5 for the builtin levels).
    RequiredScore,
}

impl ThresholdPolicy {
    pub fn threshold_for(self, level: &LevelDefinition) -> u32 {
        match self {
            ThresholdPolicy::PassThreshold => level.pass_threshold,
            ThresholdPolicy::RequiredScore => level.required_score,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub questions_per_attempt: u32,
    pub shuffle: ShuffleMode,
    pub threshold: ThresholdPolicy,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            questions_per_attempt: QUESTIONS_PER_ATTEMPT,
            shuffle: ShuffleMode::default(),
            threshold: ThresholdPolicy::default(),
        }
    }
}

impl SessionConfig {
    /// Missing keys fall back to the defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}
