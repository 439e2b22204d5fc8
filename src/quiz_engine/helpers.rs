//! Shared builder functions used by the generator after a level draft exists.
//!
//! ## Source ordering
//!
//! After the operand draws, the generator consumes the source in a fixed
//! order: shuffle first, question id last. Changing the order changes every
//! seeded question, so determinism tests would catch it.

use crate::quiz_engine::{
    levels::LevelDraft,
    models::*,
    source::IntSource,
};

/// Reorder the draft's candidates. Returns the options and the new index of
/// the correct candidate (which always starts at slot 0).
pub fn shuffle_candidates<S: IntSource + ?Sized>(
    source: &mut S,
    mut candidates: [AnswerOption; 4],
    mode: ShuffleMode,
) -> ([AnswerOption; 4], usize) {
    match mode {
        ShuffleMode::SingleSwap => {
            let target = source.next_in_range(0..=3) as usize;
            candidates.swap(0, target);
            (candidates, target)
        }
        ShuffleMode::FisherYates => {
            let mut correct = 0usize;
            for i in (1..candidates.len()).rev() {
                let j = source.next_in_range(0..=i as u32) as usize;
                candidates.swap(i, j);
                if correct == i {
                    correct = j;
                } else if correct == j {
                    correct = i;
                }
            }
            (candidates, correct)
        }
    }
}

/// Question id: level prefix plus eight hex digits from the source.
pub fn question_id<S: IntSource + ?Sized>(level: LessonLevel, source: &mut S) -> String {
    format!("L{}-{:08X}", level.id(), source.next_in_range(0..=u32::MAX))
}

/// Assemble the final [`Question`] from a shuffled draft.
pub fn question(
    question_id: String,
    level: LessonLevel,
    operands: Operands,
    draft: LevelDraft,
    options: [AnswerOption; 4],
    correct_index: usize,
) -> Question {
    Question {
        question_id,
        level_id: level.id(),
        operands,
        problem: draft.problem,
        options,
        correct_index,
        explanation: draft.explanation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz_engine::source::RngSource;

    fn tagged() -> [AnswerOption; 4] {
        let opt = |n, misconception| AnswerOption { value: PowerTerm::fraction(n, 7), misconception };
        [
            opt(1, Misconception::Correct),
            opt(2, Misconception::ForgotDenominator),
            opt(3, Misconception::MultipliedInsteadOfPower),
            opt(4, Misconception::FlippedBase),
        ]
    }

    #[test]
    fn single_swap_keeps_distractor_order() {
        let mut source = RngSource::seeded(3);
        for _ in 0..200 {
            let (options, idx) = shuffle_candidates(&mut source, tagged(), ShuffleMode::SingleSwap);
            assert!(options[idx].misconception.is_correct());
            let distractors: Vec<u32> = options
                .iter()
                .filter(|o| !o.misconception.is_correct())
                .map(|o| o.value.numerator)
                .collect();
            // slot 0 takes whichever distractor was displaced
            let expected: Vec<u32> = match idx {
                0 => vec![2, 3, 4],
                1 => vec![2, 3, 4],
                2 => vec![3, 2, 4],
                _ => vec![4, 2, 3],
            };
            assert_eq!(distractors, expected, "idx={idx}");
        }
    }

    #[test]
    fn fisher_yates_tracks_the_correct_option() {
        let mut source = RngSource::seeded(11);
        for _ in 0..500 {
            let (options, idx) = shuffle_candidates(&mut source, tagged(), ShuffleMode::FisherYates);
            assert!(options[idx].misconception.is_correct());
            assert_eq!(options.iter().filter(|o| o.misconception.is_correct()).count(), 1);
        }
    }

    #[test]
    fn question_id_has_level_prefix() {
        let mut source = RngSource::seeded(1);
        let id = question_id(LessonLevel::ProductOfPowers, &mut source);
        assert!(id.starts_with("L3-"), "{id}");
        assert_eq!(id.len(), 11);
    }
}
