//! Core quiz engine: operand sampling, exact evaluation, and question generation.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Shared types: terms, problems, options, questions, requests |
//! | `source`    | `IntSource` randomness seam and its `rand` adapter |
//! | `operands`  | Draws `a`, `b`, `n`, `m` and applies the one-pass reduction |
//! | `evaluator` | Exact values of terms and problems; duplicate detection |
//! | `levels`    | One builder per level: problem, candidates, explanation |
//! | `helpers`   | Shuffle, question ids, final assembly |
//! | `generator` | Entry points `generate_question()` and `generate_with()` |

pub mod evaluator;
pub mod generator;
pub mod helpers;
pub mod levels;
pub mod models;
pub mod operands;
pub mod source;

pub use generator::{generate_question, generate_with};
pub use models::{
    AnswerOption, LessonLevel, Misconception, Operands, PowerTerm, Problem,
    Question, QuestionOutcome, QuizRequest, ShuffleMode, Sign,
};
pub use source::{IntSource, RngSource};
