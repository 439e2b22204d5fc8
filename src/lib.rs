//! # power_drill_gen
//!
//! An offline, deterministic quiz engine for powers of fractions.
//!
//! Four lesson levels each teach one rule for raising a rational number to
//! an integer power. Every generated question comes with one correct answer
//! and three distractors, and each distractor is the result of a specific,
//! common mistake (forgetting the denominator, adding exponents that should
//! be multiplied, …).
//!
//! ## How it works
//!
//! 1. Build a [`QuizRequest`] with a level id (1–4), an optional RNG seed
//!    and a [`ShuffleMode`].
//! 2. Call [`generate_question`]: it samples a fraction `a/b` and exponents
//!    `n`, `m`, builds the level's problem and four candidates, rejects draws
//!    whose candidates coincide, and shuffles.
//! 3. The returned [`QuestionOutcome`] is either a [`Question`] or
//!    `UnknownLevel` for ids outside the catalog.
//!
//! For a whole learner session (theory screen, five questions, pass/fail,
//! unlocks, stars) drive a [`Session`].
//!
//! ## Quick start
//!
//! ```rust
//! use power_drill_gen::{generate_question, QuizRequest};
//!
//! let outcome = generate_question(QuizRequest::seeded(1, 42));
//! let question = outcome.question().expect("level 1 exists");
//! println!("{}", question.problem);
//! for (i, option) in question.options.iter().enumerate() {
//!     println!("  [{i}] {}", option.value);
//! }
//! ```
//!
//! ## Key features
//!
//! - **Deterministic**: `rng_seed: Some(u64)` reproduces the exact question.
//! - **Injectable randomness**: anything implementing [`IntSource`] can drive
//!   [`generate_with`], so tests can script every draw.
//! - **Exact arithmetic**: options are compared by value, never by layout,
//!   so `4/6` and `2/3` count as the same answer.

pub mod catalog;
pub mod config;
pub mod error;
pub mod quiz_engine;
pub mod render;
pub mod session;

// Convenience re-exports so callers can use `power_drill_gen::generate_question`
// directly without reaching into `quiz_engine::`.
pub use catalog::{LevelCatalog, LevelDefinition, LevelStatus};
pub use config::{SessionConfig, ThresholdPolicy, QUESTIONS_PER_ATTEMPT};
pub use error::{Error, Result};
pub use quiz_engine::{
    generate_question, generate_with, AnswerOption, IntSource, LessonLevel,
    Misconception, Operands, PowerTerm, Problem, Question, QuestionOutcome,
    QuizRequest, RngSource, ShuffleMode, Sign,
};
pub use session::{
    AnswerFeedback, AttemptSummary, GameState, Progress, Session, SessionStats,
};
