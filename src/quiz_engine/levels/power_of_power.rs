//! Level 4: a power of a power, exponents multiply.

use crate::quiz_engine::models::*;
use super::LevelDraft;

pub fn build(ops: &Operands) -> LevelDraft {
    let (a, b) = (ops.numerator, ops.denominator);
    let (n, m) = (ops.exponent as i32, ops.second_exponent as i32);
    let product = n * m;

    let candidates = [
        AnswerOption { value: PowerTerm::power(a, b, product),               misconception: Misconception::Correct },
        AnswerOption { value: PowerTerm::power(a, b, n + m),                 misconception: Misconception::AddedExponents },
        AnswerOption { value: PowerTerm::power(b, a, product),               misconception: Misconception::FlippedBaseUnnecessarily },
        AnswerOption { value: PowerTerm::power(a, b, n.pow(m as u32)),       misconception: Misconception::ExponentiatedExponent },
    ];

    LevelDraft {
        problem: Problem::PowerOfPower {
            inner: PowerTerm::power(a, b, n),
            outer: ops.second_exponent,
        },
        candidates,
        explanation: format!(
            "Power of a power: keep the base and multiply the exponents \
             {n} × {m} = {product}."
        ),
    }
}
