//! Level catalog: the ordered lesson definitions shown on the menu.
//!
//! The builtin catalog is embedded YAML (`src/data/levels.yaml`). Callers can
//! supply their own YAML with the same shape; either way the result is
//! validated before use.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::quiz_engine::LessonLevel;

const BUILTIN_LEVELS: &str = include_str!("data/levels.yaml");

fn default_pass_threshold() -> u32 {
    3
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelDefinition {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub theory: Vec<String>,
    pub example: String,
    /// Nominal target shown on the level card. Not used to pass a level
    /// unless `ThresholdPolicy::RequiredScore` is selected.
    pub required_score: u32,
    #[serde(default = "default_pass_threshold")]
    pub pass_threshold: u32,
    /// Opaque visual tag for the presentation layer.
    pub accent: String,
}

/// Where a level stands relative to the session's unlock progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelStatus {
    Locked,
    Unlocked,
    Completed,
}

impl LevelStatus {
    pub fn for_level(level_id: u32, unlocked_levels: u32) -> Self {
        if level_id > unlocked_levels {
            LevelStatus::Locked
        } else if level_id < unlocked_levels {
            LevelStatus::Completed
        } else {
            LevelStatus::Unlocked
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LevelCatalog {
    levels: Vec<LevelDefinition>,
}

impl LevelCatalog {
    /// The four builtin lessons.
    pub fn builtin() -> Result<Self> {
        Self::from_yaml_str(BUILTIN_LEVELS)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let levels: Vec<LevelDefinition> = serde_yaml::from_str(yaml)?;
        Self::new(levels)
    }

    /// Validate and wrap a list of levels.
    ///
    /// Ids must run 1, 2, 3, … with a generator behind each, and every
    /// threshold must ask for at least one correct answer. Whether a threshold
    /// fits the attempt length is checked by `Session::new`.
    pub fn new(levels: Vec<LevelDefinition>) -> Result<Self> {
        if levels.is_empty() {
            return Err(Error::InvalidCatalog("catalog has no levels".to_string()));
        }
        for (idx, level) in levels.iter().enumerate() {
            let expected = idx as u32 + 1;
            if level.id != expected {
                return Err(Error::InvalidCatalog(format!(
                    "level at position {idx} has id {} (expected {expected})",
                    level.id
                )));
            }
            if LessonLevel::from_id(level.id).is_none() {
                return Err(Error::InvalidCatalog(format!(
                    "level {} has no question generator",
                    level.id
                )));
            }
            for (field, value) in [("pass_threshold", level.pass_threshold), ("required_score", level.required_score)] {
                if value == 0 {
                    return Err(Error::InvalidCatalog(format!(
                        "level {} {field} must be at least 1",
                        level.id
                    )));
                }
            }
            if level.required_score != level.pass_threshold {
                warn!(
                    "level {}: required_score {} differs from pass_threshold {}; passing uses the configured threshold policy",
                    level.id, level.required_score, level.pass_threshold
                );
            }
        }
        Ok(LevelCatalog { levels })
    }

    pub fn levels(&self) -> &[LevelDefinition] {
        &self.levels
    }

    pub fn get(&self, level_id: u32) -> Option<&LevelDefinition> {
        self.levels.iter().find(|l| l.id == level_id)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Levels whose nominal `required_score` disagrees with `pass_threshold`.
    pub fn threshold_discrepancies(&self) -> Vec<u32> {
        self.levels
            .iter()
            .filter(|l| l.required_score != l.pass_threshold)
            .map(|l| l.id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_four_ordered_levels() {
        let catalog = LevelCatalog::builtin().unwrap();
        assert_eq!(catalog.len(), 4);
        let ids: Vec<u32> = catalog.levels().iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        for level in catalog.levels() {
            assert!(!level.title.is_empty());
            assert!(!level.theory.is_empty());
            assert_eq!(level.pass_threshold, 3);
            assert_eq!(level.required_score, 5);
        }
    }

    #[test]
    fn builtin_catalog_flags_every_level() {
        let catalog = LevelCatalog::builtin().unwrap();
        assert_eq!(catalog.threshold_discrepancies(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn pass_threshold_defaults_to_three() {
        let yaml = r#"
- id: 1
  title: "One"
  description: "d"
  theory: ["t"]
  example: "e"
  required_score: 4
  accent: "blue"
"#;
        let catalog = LevelCatalog::from_yaml_str(yaml).unwrap();
        assert_eq!(catalog.get(1).unwrap().pass_threshold, 3);
    }

    #[test]
    fn rejects_gaps_and_unknown_levels() {
        let mut levels = LevelCatalog::builtin().unwrap().levels().to_vec();
        levels.remove(1);
        assert!(matches!(LevelCatalog::new(levels), Err(Error::InvalidCatalog(_))));

        let mut levels = LevelCatalog::builtin().unwrap().levels().to_vec();
        let mut extra = levels[3].clone();
        extra.id = 5;
        levels.push(extra);
        assert!(matches!(LevelCatalog::new(levels), Err(Error::InvalidCatalog(_))));

        assert!(matches!(LevelCatalog::new(Vec::new()), Err(Error::InvalidCatalog(_))));
    }

    #[test]
    fn rejects_zero_thresholds() {
        let mut levels = LevelCatalog::builtin().unwrap().levels().to_vec();
        levels[0].pass_threshold = 0;
        assert!(matches!(LevelCatalog::new(levels), Err(Error::InvalidCatalog(_))));

        let mut levels = LevelCatalog::builtin().unwrap().levels().to_vec();
        levels[2].required_score = 0;
        assert!(matches!(LevelCatalog::new(levels), Err(Error::InvalidCatalog(_))));
    }

    #[test]
    fn thresholds_above_five_still_load() {
        let mut levels = LevelCatalog::builtin().unwrap().levels().to_vec();
        levels[0].pass_threshold = 8;
        levels[0].required_score = 10;
        let catalog = LevelCatalog::new(levels).unwrap();
        assert_eq!(catalog.get(1).unwrap().pass_threshold, 8);
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        assert!(matches!(
            LevelCatalog::from_yaml_str("- id: [oops"),
            Err(Error::Parse(_))
        ));
    }

    #[test]
    fn status_follows_unlock_progress() {
        assert_eq!(LevelStatus::for_level(1, 2), LevelStatus::Completed);
        assert_eq!(LevelStatus::for_level(2, 2), LevelStatus::Unlocked);
        assert_eq!(LevelStatus::for_level(3, 2), LevelStatus::Locked);
    }
}
