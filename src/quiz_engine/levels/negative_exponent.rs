//! Level 2: a negative exponent flips the fraction.

use crate::quiz_engine::models::*;
use super::LevelDraft;

pub fn build(ops: &Operands) -> LevelDraft {
    let (a, b, n) = (ops.numerator, ops.denominator, ops.exponent);
    let an = a.pow(n);
    let bn = b.pow(n);

    let candidates = [
        AnswerOption { value: PowerTerm::fraction(bn, an),           misconception: Misconception::Correct },
        AnswerOption { value: PowerTerm::fraction(an, bn),           misconception: Misconception::DidNotFlip },
        AnswerOption { value: PowerTerm::fraction(bn, an).negated(), misconception: Misconception::KeptNegativeSign },
        AnswerOption { value: PowerTerm::fraction(b * n, a * n),     misconception: Misconception::FlippedThenMultiplied },
    ];

    LevelDraft {
        problem: Problem::Power { base: PowerTerm::power(a, b, -(n as i32)) },
        candidates,
        explanation: format!(
            "A negative exponent flips the base: ({a}/{b}) becomes ({b}/{a}). \
             Then raise it to {n}: {b}^{n} = {bn} and {a}^{n} = {an}."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz_engine::evaluator::{problem_value, term_value};

    #[test]
    fn flipped_answer_matches_the_problem() {
        let ops = Operands {
            raw_numerator: 2, raw_denominator: 3,
            numerator: 2, denominator: 3,
            exponent: 2, second_exponent: 3,
        };
        let draft = build(&ops);
        assert_eq!(draft.candidates[0].value, PowerTerm::fraction(9, 4));
        assert_eq!(draft.candidates[2].value.sign, Sign::Negative);
        assert_eq!(draft.problem.to_string(), "(2/3)^-2 = ?");
        assert_eq!(
            term_value(&draft.candidates[0].value),
            problem_value(&draft.problem),
        );
        assert!(draft.explanation.contains("(3/2)"));
    }
}
