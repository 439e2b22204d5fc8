//! Session controller: one learner's walk through the levels.
//!
//! The session owns the catalog, the integer source and the running stats.
//! Every method runs to completion before the next call, so there is no
//! locking; the state machine is
//!
//! ```text
//! Menu ──select_level──▶ Learning ──begin_quiz──▶ Playing ──next (last)──▶ LevelComplete
//!   ▲                                               │  ▲                        │
//!   │                                               │  └──answer / next──┘      │
//!   └──────────────return_to_menu (any state)───────┴───────── GameOver ◀───────┘
//!                                                     (retry: GameOver ▶ Playing)
//!                              (select_level also from LevelComplete / GameOver)
//! ```

use std::fmt;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::catalog::{LevelCatalog, LevelDefinition, LevelStatus};
use crate::config::SessionConfig;
use crate::error::{Error, Result};
use crate::quiz_engine::{generate_with, IntSource, Misconception, Question, RngSource};

// ---------------------------------------------------------------------------
// Stats and pass arithmetic
// ---------------------------------------------------------------------------

/// Progress that survives between attempts. Lives only as long as the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    /// Highest level id that can be played.
    pub unlocked_levels: u32,
    pub total_score: u32,
    pub stars: u32,
}

impl Default for SessionStats {
    fn default() -> Self {
        SessionStats { unlocked_levels: 1, total_score: 0, stars: 0 }
    }
}

/// Stars for a passing score: 3 for a perfect five, 2 for four, else 1.
pub fn stars_for(score: u32) -> u32 {
    match score {
        s if s >= 5 => 3,
        4           => 2,
        _           => 1,
    }
}

/// Outcome of one finished attempt, with what it added to the stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptSummary {
    pub level_id: u32,
    pub score: u32,
    pub threshold: u32,
    pub passed: bool,
    pub points_awarded: u32,
    pub stars_awarded: u32,
    /// Set when this attempt raised `unlocked_levels`.
    pub newly_unlocked: Option<u32>,
}

impl SessionStats {
    /// Apply a finished attempt. Failing attempts leave the stats untouched.
    pub fn record_attempt(&mut self, level_id: u32, score: u32, threshold: u32) -> AttemptSummary {
        let passed = score >= threshold;
        let mut summary = AttemptSummary {
            level_id,
            score,
            threshold,
            passed,
            points_awarded: 0,
            stars_awarded: 0,
            newly_unlocked: None,
        };
        if !passed {
            return summary;
        }

        let next_level = level_id + 1;
        if next_level > self.unlocked_levels {
            self.unlocked_levels = next_level;
            summary.newly_unlocked = Some(next_level);
        }
        summary.points_awarded = score * 10;
        summary.stars_awarded = stars_for(score);
        self.total_score += summary.points_awarded;
        self.stars += summary.stars_awarded;
        summary
    }
}

// ---------------------------------------------------------------------------
// Screens and feedback
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    #[default]
    Menu,
    Learning,
    Playing,
    LevelComplete,
    GameOver,
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameState::Menu          => write!(f, "Menu"),
            GameState::Learning      => write!(f, "Learning"),
            GameState::Playing       => write!(f, "Playing"),
            GameState::LevelComplete => write!(f, "LevelComplete"),
            GameState::GameOver      => write!(f, "GameOver"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerFeedback {
    pub is_correct: bool,
    pub chosen_index: usize,
    pub correct_index: usize,
    pub misconception: Misconception,
    pub explanation: String,
}

/// What `next()` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Progress {
    /// A fresh question is ready; numbering starts at 1.
    NextQuestion { question_number: u32 },
    Finished(AttemptSummary),
}

#[derive(Debug, Clone)]
struct Attempt {
    level_id: u32,
    score: u32,
    question_number: u32,
    question: Question,
    answered: Option<usize>,
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

pub struct Session<S: IntSource = RngSource> {
    catalog: LevelCatalog,
    config: SessionConfig,
    source: S,
    stats: SessionStats,
    state: GameState,
    active_level: Option<u32>,
    attempt: Option<Attempt>,
    last_summary: Option<AttemptSummary>,
}

impl Session<RngSource> {
    /// Builtin catalog, default config, deterministic source.
    pub fn seeded(seed: u64) -> Result<Self> {
        Session::new(LevelCatalog::builtin()?, SessionConfig::default(), RngSource::seeded(seed))
    }

    pub fn with_entropy() -> Result<Self> {
        Session::new(LevelCatalog::builtin()?, SessionConfig::default(), RngSource::from_entropy())
    }
}

impl<S: IntSource> Session<S> {
    pub fn new(catalog: LevelCatalog, config: SessionConfig, source: S) -> Result<Self> {
        if config.questions_per_attempt == 0 {
            return Err(Error::InvalidConfig("questions_per_attempt must be at least 1".to_string()));
        }
        for level in catalog.levels() {
            let threshold = config.threshold.threshold_for(level);
            if threshold > config.questions_per_attempt {
                return Err(Error::InvalidConfig(format!(
                    "level {} needs {threshold} correct answers but an attempt has only {}",
                    level.id, config.questions_per_attempt
                )));
            }
        }
        Ok(Session {
            catalog,
            config,
            source,
            stats: SessionStats::default(),
            state: GameState::Menu,
            active_level: None,
            attempt: None,
            last_summary: None,
        })
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn catalog(&self) -> &LevelCatalog {
        &self.catalog
    }

    pub fn active_level(&self) -> Option<&LevelDefinition> {
        self.active_level.and_then(|id| self.catalog.get(id))
    }

    /// Menu view: every level with its lock status.
    pub fn levels(&self) -> impl Iterator<Item = (&LevelDefinition, LevelStatus)> + '_ {
        let unlocked = self.stats.unlocked_levels;
        self.catalog
            .levels()
            .iter()
            .map(move |level| (level, LevelStatus::for_level(level.id, unlocked)))
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.attempt.as_ref().map(|a| &a.question)
    }

    /// 1-based number of the question on screen, 0 outside a quiz.
    pub fn question_number(&self) -> u32 {
        self.attempt.as_ref().map_or(0, |a| a.question_number)
    }

    pub fn score(&self) -> u32 {
        self.attempt.as_ref().map_or(0, |a| a.score)
    }

    /// The choice recorded for the question on screen, if any.
    pub fn answered(&self) -> Option<usize> {
        self.attempt.as_ref().and_then(|a| a.answered)
    }

    pub fn last_summary(&self) -> Option<&AttemptSummary> {
        self.last_summary.as_ref()
    }

    fn require(&self, action: &'static str, allowed: &[GameState]) -> Result<()> {
        if allowed.contains(&self.state) {
            Ok(())
        } else {
            Err(Error::InvalidState { action, state: self.state.to_string() })
        }
    }

    fn draw_question(&mut self, level_id: u32) -> Result<Question> {
        generate_with(&mut self.source, level_id, self.config.shuffle)
            .into_question()
            .ok_or(Error::UnknownLevel(level_id))
    }

    /// Open a level's theory screen.
    pub fn select_level(&mut self, level_id: u32) -> Result<&LevelDefinition> {
        self.require(
            "select a level",
            &[GameState::Menu, GameState::LevelComplete, GameState::GameOver],
        )?;
        let unlocked = self.stats.unlocked_levels;
        let level = self.catalog.get(level_id).ok_or(Error::UnknownLevel(level_id))?;
        if level_id > unlocked {
            return Err(Error::LevelLocked { level_id, unlocked });
        }
        debug!("level {level_id} selected");
        self.active_level = Some(level_id);
        self.attempt = None;
        self.state = GameState::Learning;
        Ok(level)
    }

    /// Start a fresh attempt at the active level and return its first question.
    pub fn begin_quiz(&mut self) -> Result<&Question> {
        self.require("begin a quiz", &[GameState::Learning, GameState::GameOver])?;
        let level_id = self
            .active_level
            .ok_or_else(|| Error::InvalidState { action: "begin a quiz", state: self.state.to_string() })?;
        let question = self.draw_question(level_id)?;
        self.state = GameState::Playing;
        self.last_summary = None;
        let attempt = self.attempt.insert(Attempt {
            level_id,
            score: 0,
            question_number: 1,
            question,
            answered: None,
        });
        Ok(&attempt.question)
    }

    /// Try the same level again after failing it.
    pub fn retry(&mut self) -> Result<&Question> {
        self.require("retry", &[GameState::GameOver])?;
        self.begin_quiz()
    }

    /// Record the learner's choice. Only the first choice per question counts.
    pub fn answer(&mut self, index: usize) -> Result<AnswerFeedback> {
        self.require("answer", &[GameState::Playing])?;
        let state = self.state;
        let attempt = self
            .attempt
            .as_mut()
            .ok_or_else(|| Error::InvalidState { action: "answer", state: state.to_string() })?;
        if attempt.answered.is_some() {
            return Err(Error::AlreadyAnswered);
        }
        let len = attempt.question.options.len();
        let misconception = attempt
            .question
            .options
            .get(index)
            .map(|o| o.misconception)
            .ok_or(Error::OptionOutOfRange { index, len })?;

        let is_correct = index == attempt.question.correct_index;
        if is_correct {
            attempt.score += 1;
        }
        attempt.answered = Some(index);
        debug!(
            "{} answered {index}: {}",
            attempt.question.question_id,
            if is_correct { "correct" } else { "wrong" }
        );

        Ok(AnswerFeedback {
            is_correct,
            chosen_index: index,
            correct_index: attempt.question.correct_index,
            misconception,
            explanation: attempt.question.explanation.clone(),
        })
    }

    /// Move past an answered question: either the next question or the result.
    pub fn next(&mut self) -> Result<Progress> {
        self.require("continue", &[GameState::Playing])?;
        let (level_id, question_number, score, answered) = match &self.attempt {
            Some(a) => (a.level_id, a.question_number, a.score, a.answered),
            None => return Err(Error::NotAnswered),
        };
        if answered.is_none() {
            return Err(Error::NotAnswered);
        }

        if question_number < self.config.questions_per_attempt {
            let question = self.draw_question(level_id)?;
            if let Some(attempt) = self.attempt.as_mut() {
                attempt.question = question;
                attempt.question_number += 1;
                attempt.answered = None;
            }
            return Ok(Progress::NextQuestion { question_number: question_number + 1 });
        }

        let threshold = self
            .catalog
            .get(level_id)
            .map(|level| self.config.threshold.threshold_for(level))
            .ok_or(Error::UnknownLevel(level_id))?;
        let summary = self.stats.record_attempt(level_id, score, threshold);
        if summary.passed {
            info!(
                "level {level_id} passed with {score}/{}: +{} points, +{} stars",
                self.config.questions_per_attempt, summary.points_awarded, summary.stars_awarded
            );
            if let Some(unlocked) = summary.newly_unlocked {
                info!("level {unlocked} unlocked");
            }
            self.state = GameState::LevelComplete;
        } else {
            info!(
                "level {level_id} failed with {score}/{} (needs {threshold})",
                self.config.questions_per_attempt
            );
            self.state = GameState::GameOver;
        }
        self.last_summary = Some(summary);
        Ok(Progress::Finished(summary))
    }

    /// Leave whatever screen is showing and go back to level selection.
    pub fn return_to_menu(&mut self) {
        self.state = GameState::Menu;
        self.active_level = None;
        self.attempt = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_start_at_level_one() {
        assert_eq!(
            SessionStats::default(),
            SessionStats { unlocked_levels: 1, total_score: 0, stars: 0 }
        );
    }

    #[test]
    fn passing_scores_award_stars_and_points() {
        for (score, stars) in [(3u32, 1u32), (4, 2), (5, 3)] {
            let mut stats = SessionStats::default();
            let summary = stats.record_attempt(1, score, 3);
            assert!(summary.passed);
            assert_eq!(stats.stars, stars, "score={score}");
            assert_eq!(stats.total_score, score * 10);
            assert_eq!(stats.unlocked_levels, 2);
            assert_eq!(summary.newly_unlocked, Some(2));
        }
    }

    #[test]
    fn failing_scores_change_nothing() {
        for score in 0..=2 {
            let mut stats = SessionStats { unlocked_levels: 2, total_score: 40, stars: 2 };
            let before = stats;
            let summary = stats.record_attempt(2, score, 3);
            assert!(!summary.passed);
            assert_eq!(stats, before);
            assert_eq!(summary.points_awarded, 0);
        }
    }

    #[test]
    fn replaying_an_old_level_never_lowers_unlocks() {
        let mut stats = SessionStats { unlocked_levels: 4, total_score: 0, stars: 0 };
        let summary = stats.record_attempt(1, 5, 3);
        assert_eq!(stats.unlocked_levels, 4);
        assert_eq!(summary.newly_unlocked, None);
        assert_eq!(stats.stars, 3);
    }

    #[test]
    fn locked_levels_cannot_be_selected() {
        let mut session = Session::seeded(5).unwrap();
        assert!(matches!(
            session.select_level(2),
            Err(Error::LevelLocked { level_id: 2, unlocked: 1 })
        ));
        assert!(matches!(session.select_level(9), Err(Error::UnknownLevel(9))));
        assert_eq!(session.state(), GameState::Menu);
    }

    #[test]
    fn second_answer_is_rejected() {
        let mut session = Session::seeded(5).unwrap();
        session.select_level(1).unwrap();
        session.begin_quiz().unwrap();
        session.answer(0).unwrap();
        assert!(matches!(session.answer(1), Err(Error::AlreadyAnswered)));
        assert!(session.score() <= 1);
    }

    #[test]
    fn next_requires_an_answer() {
        let mut session = Session::seeded(5).unwrap();
        session.select_level(1).unwrap();
        session.begin_quiz().unwrap();
        assert!(matches!(session.next(), Err(Error::NotAnswered)));
        assert!(matches!(session.answer(4), Err(Error::OptionOutOfRange { index: 4, len: 4 })));
    }

    #[test]
    fn longer_attempts_accept_higher_thresholds() {
        let mut levels = LevelCatalog::builtin().unwrap().levels().to_vec();
        levels[0].pass_threshold = 8;
        let catalog = LevelCatalog::new(levels).unwrap();

        let long = SessionConfig { questions_per_attempt: 10, ..SessionConfig::default() };
        assert!(Session::new(catalog.clone(), long, RngSource::seeded(1)).is_ok());

        let short = Session::new(catalog, SessionConfig::default(), RngSource::seeded(1));
        assert!(matches!(short, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn config_threshold_above_attempt_is_rejected() {
        let config = SessionConfig { questions_per_attempt: 2, ..SessionConfig::default() };
        let result = Session::new(LevelCatalog::builtin().unwrap(), config, RngSource::seeded(1));
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }
}
