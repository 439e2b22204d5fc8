use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Math primitives
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sign {
    Positive,
    Negative,
}

/// A fraction with an optional exponent applied to the whole fraction.
///
/// Magnitudes are always positive; a leading minus lives in `sign`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerTerm {
    pub numerator: u32,
    pub denominator: u32,
    pub exponent: Option<i32>,
    pub sign: Sign,
}

impl PowerTerm {
    /// Plain positive fraction `n/d`.
    pub fn fraction(numerator: u32, denominator: u32) -> Self {
        PowerTerm { numerator, denominator, exponent: None, sign: Sign::Positive }
    }

    /// Positive fraction raised to `exponent`, e.g. `(2/3)^5`.
    pub fn power(numerator: u32, denominator: u32, exponent: i32) -> Self {
        PowerTerm { numerator, denominator, exponent: Some(exponent), sign: Sign::Positive }
    }

    pub fn negated(self) -> Self {
        let sign = match self.sign {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        };
        PowerTerm { sign, ..self }
    }
}

impl fmt::Display for PowerTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sign == Sign::Negative {
            write!(f, "-")?;
        }
        match self.exponent {
            Some(exp) => write!(f, "({}/{})^{}", self.numerator, self.denominator, exp),
            None      => write!(f, "{}/{}", self.numerator, self.denominator),
        }
    }
}

/// The expression shown to the learner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Problem {
    /// `(a/b)^n`, or `(a/b)^-n` when the exponent is negative.
    Power { base: PowerTerm },
    /// `(a/b)^n · (a/b)^m`
    Product { left: PowerTerm, right: PowerTerm },
    /// `((a/b)^n)^m`
    PowerOfPower { inner: PowerTerm, outer: u32 },
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Problem::Power { base }           => write!(f, "{base} = ?"),
            Problem::Product { left, right }  => write!(f, "{left} · {right} = ?"),
            Problem::PowerOfPower { inner, outer } => write!(f, "({inner})^{outer} = ?"),
        }
    }
}

// ---------------------------------------------------------------------------
// Levels
// ---------------------------------------------------------------------------

/// The four lesson levels, one exponentiation rule each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LessonLevel {
    BasePower,
    NegativeExponent,
    ProductOfPowers,
    PowerOfPower,
}

impl LessonLevel {
    pub fn from_id(level_id: u32) -> Option<Self> {
        match level_id {
            1 => Some(LessonLevel::BasePower),
            2 => Some(LessonLevel::NegativeExponent),
            3 => Some(LessonLevel::ProductOfPowers),
            4 => Some(LessonLevel::PowerOfPower),
            _ => None,
        }
    }

    pub fn id(self) -> u32 {
        match self {
            LessonLevel::BasePower        => 1,
            LessonLevel::NegativeExponent => 2,
            LessonLevel::ProductOfPowers  => 3,
            LessonLevel::PowerOfPower     => 4,
        }
    }
}

impl fmt::Display for LessonLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LessonLevel::BasePower        => "Power of a Fraction",
            LessonLevel::NegativeExponent => "Negative Exponent",
            LessonLevel::ProductOfPowers  => "Product of Powers",
            LessonLevel::PowerOfPower     => "Power of a Power",
        };
        write!(f, "{}", s)
    }
}

// ---------------------------------------------------------------------------
// Misconceptions
// ---------------------------------------------------------------------------

/// Which line of reasoning produced an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Misconception {
    Correct,
    ForgotDenominator,
    MultipliedInsteadOfPower,
    FlippedBase,
    DidNotFlip,
    KeptNegativeSign,
    FlippedThenMultiplied,
    MultipliedExponents,
    SubtractedExponents,
    SquaredBase,
    AddedExponents,
    FlippedBaseUnnecessarily,
    ExponentiatedExponent,
}

impl Misconception {
    /// Feedback line shown when a learner picks this option.
    pub fn description(self) -> &'static str {
        match self {
            Misconception::Correct                  => "This is the correct result.",
            Misconception::ForgotDenominator        => "The exponent applies to the denominator too, not only the numerator.",
            Misconception::MultipliedInsteadOfPower => "An exponent means repeated multiplication, not multiplying by the exponent.",
            Misconception::FlippedBase              => "A positive exponent keeps the fraction the right way up.",
            Misconception::DidNotFlip               => "A negative exponent flips the fraction before raising it.",
            Misconception::KeptNegativeSign         => "A negative exponent never makes the result negative; it only flips the fraction.",
            Misconception::FlippedThenMultiplied    => "Flipping was right, but the flipped fraction must be raised to the power, not multiplied by it.",
            Misconception::MultipliedExponents      => "Multiplying powers of the same base adds the exponents; it does not multiply them.",
            Misconception::SubtractedExponents      => "Subtracting exponents is the rule for division, not multiplication.",
            Misconception::SquaredBase              => "The base stays the same; only the exponents are combined.",
            Misconception::AddedExponents           => "A power of a power multiplies the exponents; it does not add them.",
            Misconception::FlippedBaseUnnecessarily => "Nothing is negative here, so the base is never flipped.",
            Misconception::ExponentiatedExponent    => "The outer exponent multiplies the inner one; it does not raise it to a power.",
        }
    }

    pub fn is_correct(self) -> bool {
        self == Misconception::Correct
    }
}

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// How the four candidates are reordered before being shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShuffleMode {
    /// Swap the correct candidate (slot 0) with one random slot. Distractors
    /// keep their relative order.
    #[default]
    SingleSwap,
    /// Full Fisher-Yates shuffle of all four candidates.
    FisherYates,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizRequest {
    pub level_id: u32,
    pub rng_seed: Option<u64>,
    pub shuffle: ShuffleMode,
}

impl QuizRequest {
    /// Entropy-seeded request with the default shuffle.
    pub fn new(level_id: u32) -> Self {
        QuizRequest { level_id, rng_seed: None, shuffle: ShuffleMode::default() }
    }

    pub fn seeded(level_id: u32, seed: u64) -> Self {
        QuizRequest { level_id, rng_seed: Some(seed), shuffle: ShuffleMode::default() }
    }
}

/// The sampled numbers behind one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operands {
    /// `a` before reduction.
    pub raw_numerator: u32,
    /// `b` before reduction.
    pub raw_denominator: u32,
    pub numerator: u32,
    pub denominator: u32,
    /// `n`
    pub exponent: u32,
    /// `m`, used by the product and power-of-power levels.
    pub second_exponent: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub value: PowerTerm,
    pub misconception: Misconception,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub question_id: String,
    pub level_id: u32,
    pub operands: Operands,
    pub problem: Problem,
    pub options: [AnswerOption; 4],
    pub correct_index: usize,
    pub explanation: String,
}

impl Question {
    pub fn correct_option(&self) -> &AnswerOption {
        &self.options[self.correct_index]
    }
}

/// Result of asking the generator for a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionOutcome {
    Generated(Question),
    /// The id names no level; read through the accessors this behaves like
    /// an empty question.
    UnknownLevel { level_id: u32 },
}

impl QuestionOutcome {
    pub fn question(&self) -> Option<&Question> {
        match self {
            QuestionOutcome::Generated(q) => Some(q),
            QuestionOutcome::UnknownLevel { .. } => None,
        }
    }

    pub fn into_question(self) -> Option<Question> {
        match self {
            QuestionOutcome::Generated(q) => Some(q),
            QuestionOutcome::UnknownLevel { .. } => None,
        }
    }

    pub fn options(&self) -> &[AnswerOption] {
        match self {
            QuestionOutcome::Generated(q) => &q.options,
            QuestionOutcome::UnknownLevel { .. } => &[],
        }
    }

    pub fn correct_index(&self) -> usize {
        self.question().map_or(0, |q| q.correct_index)
    }

    pub fn explanation(&self) -> &str {
        self.question().map_or("", |q| q.explanation.as_str())
    }
}
