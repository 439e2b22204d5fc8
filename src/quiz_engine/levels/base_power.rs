//! Level 1: raise a fraction to a positive power.
//!
//! Correct: `a^n / b^n`. Distractors encode three slips:
//! forgetting the denominator, multiplying by `n` instead of raising to it,
//! and flipping the fraction.

use crate::quiz_engine::models::*;
use super::LevelDraft;

pub fn build(ops: &Operands) -> LevelDraft {
    let (a, b, n) = (ops.numerator, ops.denominator, ops.exponent);
    let an = a.pow(n);
    let bn = b.pow(n);

    let candidates = [
        AnswerOption { value: PowerTerm::fraction(an, bn),       misconception: Misconception::Correct },
        AnswerOption { value: PowerTerm::fraction(an, b),        misconception: Misconception::ForgotDenominator },
        AnswerOption { value: PowerTerm::fraction(a * n, b * n), misconception: Misconception::MultipliedInsteadOfPower },
        AnswerOption { value: PowerTerm::fraction(bn, an),       misconception: Misconception::FlippedBase },
    ];

    LevelDraft {
        problem: Problem::Power { base: PowerTerm::power(a, b, n as i32) },
        candidates,
        explanation: format!(
            "Raise the numerator and the denominator to the same power: \
             {a}^{n} = {an} and {b}^{n} = {bn}."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ops(a: u32, b: u32, n: u32) -> Operands {
        Operands {
            raw_numerator: a, raw_denominator: b,
            numerator: a, denominator: b,
            exponent: n, second_exponent: 2,
        }
    }

    #[test]
    fn two_thirds_squared() {
        let draft = build(&ops(2, 3, 2));
        assert_eq!(draft.candidates[0].value, PowerTerm::fraction(4, 9));
        assert_eq!(draft.candidates[1].value, PowerTerm::fraction(4, 3));
        assert_eq!(draft.candidates[2].value, PowerTerm::fraction(4, 6));
        assert_eq!(draft.candidates[3].value, PowerTerm::fraction(9, 4));
        assert!(draft.explanation.contains("2^2 = 4"));
        assert!(draft.explanation.contains("3^2 = 9"));
        assert_eq!(draft.problem.to_string(), "(2/3)^2 = ?");
    }
}
