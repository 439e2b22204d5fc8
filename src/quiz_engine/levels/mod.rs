//! Level builders, one module per exponentiation rule.
//!
//! Every builder is a pure function of the sampled operands:
//!
//! ```ignore
//! pub fn build(ops: &Operands) -> LevelDraft
//! ```
//!
//! The draft lists the correct answer first, then the three distractors in
//! a fixed order. `generator.rs` checks the draft for duplicates and
//! shuffles it.

use crate::quiz_engine::models::{AnswerOption, LessonLevel, Operands, Problem};

/// L1: `(a/b)^n`
pub mod base_power;
/// L2: `(a/b)^-n`
pub mod negative_exponent;
/// L3: `(a/b)^n · (a/b)^m`
pub mod product_of_powers;
/// L4: `((a/b)^n)^m`
pub mod power_of_power;

/// A question before shuffling: candidates in construction order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelDraft {
    pub problem: Problem,
    pub candidates: [AnswerOption; 4],
    pub explanation: String,
}

pub fn build(level: LessonLevel, ops: &Operands) -> LevelDraft {
    match level {
        LessonLevel::BasePower        => base_power::build(ops),
        LessonLevel::NegativeExponent => negative_exponent::build(ops),
        LessonLevel::ProductOfPowers  => product_of_powers::build(ops),
        LessonLevel::PowerOfPower     => power_of_power::build(ops),
    }
}
