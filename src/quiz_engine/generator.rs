use log::{debug, warn};

use crate::quiz_engine::{
    evaluator::all_distinct,
    helpers,
    levels::{self, LevelDraft},
    models::{LessonLevel, Operands, QuestionOutcome, QuizRequest, ShuffleMode},
    operands,
    source::{IntSource, RngSource},
};

/// Operand draws tried before giving up on a collision-free draft.
pub const MAX_DRAWS: usize = 32;

/// Draw operands until the level's four candidates are pairwise distinct.
fn draw_distinct<S: IntSource + ?Sized>(source: &mut S, level: LessonLevel) -> (Operands, LevelDraft) {
    for attempt in 1..=MAX_DRAWS {
        let ops = operands::draw(source);
        let draft = levels::build(level, &ops);
        if all_distinct(&draft.candidates) {
            return (ops, draft);
        }
        debug!(
            "level {} draw {attempt}: duplicate candidates for a={} b={} n={} m={}, redrawing",
            level.id(), ops.numerator, ops.denominator, ops.exponent, ops.second_exponent
        );
    }
    warn!("level {}: no distinct draw after {MAX_DRAWS} attempts, using fallback operands", level.id());
    let ops = operands::fallback();
    (ops, levels::build(level, &ops))
}

/// Generate one question from an explicit source.
///
/// Unknown level ids come back as [`QuestionOutcome::UnknownLevel`] without
/// touching the source.
pub fn generate_with<S: IntSource + ?Sized>(
    source: &mut S,
    level_id: u32,
    shuffle: ShuffleMode,
) -> QuestionOutcome {
    let Some(level) = LessonLevel::from_id(level_id) else {
        warn!("no generator for level id {level_id}");
        return QuestionOutcome::UnknownLevel { level_id };
    };

    let (ops, draft) = draw_distinct(source, level);
    let (options, correct_index) = helpers::shuffle_candidates(source, draft.candidates, shuffle);
    let question_id = helpers::question_id(level, source);

    debug!("generated {question_id} [{level}]: {} (correct slot {correct_index})", draft.problem);
    QuestionOutcome::Generated(helpers::question(
        question_id, level, ops, draft, options, correct_index,
    ))
}

/// Core entry point: seeds a source from the request and generates.
pub fn generate_question(request: QuizRequest) -> QuestionOutcome {
    let mut source = match request.rng_seed {
        Some(seed) => RngSource::seeded(seed),
        None       => RngSource::from_entropy(),
    };
    generate_with(&mut source, request.level_id, request.shuffle)
}
