//! Level 3: same base multiplied, exponents add.

use crate::quiz_engine::models::*;
use super::LevelDraft;

pub fn build(ops: &Operands) -> LevelDraft {
    let (a, b) = (ops.numerator, ops.denominator);
    let (n, m) = (ops.exponent as i32, ops.second_exponent as i32);
    let sum = n + m;

    let candidates = [
        AnswerOption { value: PowerTerm::power(a, b, sum),            misconception: Misconception::Correct },
        AnswerOption { value: PowerTerm::power(a, b, n * m),          misconception: Misconception::MultipliedExponents },
        AnswerOption { value: PowerTerm::power(a, b, (n - m).abs()),  misconception: Misconception::SubtractedExponents },
        AnswerOption { value: PowerTerm::power(a * a, b * b, sum),    misconception: Misconception::SquaredBase },
    ];

    LevelDraft {
        problem: Problem::Product {
            left: PowerTerm::power(a, b, n),
            right: PowerTerm::power(a, b, m),
        },
        candidates,
        explanation: format!(
            "When multiplying powers with the same base, keep the base and add \
             the exponents: {n} + {m} = {sum}."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exponents_for_two_and_three() {
        let ops = Operands {
            raw_numerator: 1, raw_denominator: 2,
            numerator: 1, denominator: 2,
            exponent: 2, second_exponent: 3,
        };
        let draft = build(&ops);
        let exps: Vec<Option<i32>> = draft.candidates.iter().map(|c| c.value.exponent).collect();
        assert_eq!(exps, vec![Some(5), Some(6), Some(1), Some(5)]);
        assert_eq!(draft.candidates[3].value, PowerTerm::power(1, 4, 5));
        assert_eq!(draft.problem.to_string(), "(1/2)^2 · (1/2)^3 = ?");
    }
}
