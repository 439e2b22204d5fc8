use serde_json::{json, Value};

use crate::catalog::{LevelDefinition, LevelStatus};
use crate::quiz_engine::{
    evaluator::term_value, AnswerOption, PowerTerm, Problem, Question, Sign,
};
use crate::session::{AttemptSummary, SessionStats};

/// Structured term for a client that draws its own fraction bars.
fn term_json(term: &PowerTerm) -> Value {
    json!({
        "numerator":   term.numerator,
        "denominator": term.denominator,
        "exponent":    term.exponent,
        "negative":    term.sign == Sign::Negative,
        "text":        term.to_string(),
    })
}

fn problem_json(problem: &Problem) -> Value {
    let (kind, terms, outer) = match problem {
        Problem::Power { base }                => ("power", vec![term_json(base)], None),
        Problem::Product { left, right }       => ("product", vec![term_json(left), term_json(right)], None),
        Problem::PowerOfPower { inner, outer } => ("power_of_power", vec![term_json(inner)], Some(*outer)),
    };
    json!({
        "kind":  kind,
        "terms": terms,
        "outer_exponent": outer,
        "text":  problem.to_string(),
    })
}

/// Option as shown before answering: the misconception tag stays server side.
fn public_option(index: usize, option: &AnswerOption) -> Value {
    json!({ "index": index, "term": term_json(&option.value) })
}

/// Reduced `n/d` for a term, when it fits in 128 bits.
fn reduced_text(term: &PowerTerm) -> Option<String> {
    let value = term_value(term);
    let sign = if value.is_negative() { "-" } else { "" };
    value.fraction().map(|(n, d)| format!("{sign}{n}/{d}"))
}

/// Payload for an unanswered question. Holds no correct index, no
/// misconception tags and no explanation.
pub fn question_payload(question: &Question) -> Value {
    let options: Vec<Value> = question
        .options
        .iter()
        .enumerate()
        .map(|(i, o)| public_option(i, o))
        .collect();
    json!({
        "question_id": question.question_id,
        "level_id":    question.level_id,
        "problem":     problem_json(&question.problem),
        "options":     options,
    })
}

/// Payload once the learner has picked `chosen`.
pub fn feedback_payload(question: &Question, chosen: usize) -> Value {
    let correct = question.correct_option();
    let picked = question.options.get(chosen);
    json!({
        "question_id":   question.question_id,
        "chosen_index":  chosen,
        "correct_index": question.correct_index,
        "is_correct":    chosen == question.correct_index,
        "correct_answer": {
            "term":    term_json(&correct.value),
            "reduced": reduced_text(&correct.value),
        },
        "misconception": picked.map(|o| o.misconception),
        "hint":          picked.map(|o| o.misconception.description()),
        "explanation":   question.explanation,
    })
}

/// Level card for the menu screen.
pub fn level_payload(level: &LevelDefinition, status: LevelStatus) -> Value {
    json!({
        "id":             level.id,
        "title":          level.title,
        "description":    level.description,
        "accent":         level.accent,
        "required_score": level.required_score,
        "pass_threshold": level.pass_threshold,
        "status":         status,
    })
}

/// Theory screen: numbered paragraphs plus the worked example.
pub fn theory_payload(level: &LevelDefinition) -> Value {
    let steps: Vec<Value> = level
        .theory
        .iter()
        .enumerate()
        .map(|(i, text)| json!({ "step": i + 1, "text": text }))
        .collect();
    json!({
        "id":      level.id,
        "title":   level.title,
        "theory":  steps,
        "example": level.example,
        "accent":  level.accent,
    })
}

pub fn result_payload(summary: &AttemptSummary, stats: &SessionStats, questions: u32) -> Value {
    json!({
        "level_id":       summary.level_id,
        "score":          summary.score,
        "out_of":         questions,
        "passed":         summary.passed,
        "threshold":      summary.threshold,
        "points_awarded": summary.points_awarded,
        "stars_awarded":  summary.stars_awarded,
        "newly_unlocked": summary.newly_unlocked,
        "stats":          stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz_engine::{generate_question, QuizRequest};

    fn sample() -> Question {
        generate_question(QuizRequest::seeded(2, 31))
            .into_question()
            .unwrap()
    }

    #[test]
    fn question_payload_hides_the_answer() {
        let q = sample();
        let payload = question_payload(&q);
        let text = payload.to_string();
        assert!(payload.get("correct_index").is_none());
        assert!(!text.contains("misconception"));
        assert!(!text.contains(&q.explanation));
        assert_eq!(payload["options"].as_array().unwrap().len(), 4);
        assert_eq!(payload["problem"]["kind"], "power");
    }

    #[test]
    fn feedback_payload_reveals_the_answer() {
        let q = sample();
        let wrong = (q.correct_index + 1) % 4;
        let payload = feedback_payload(&q, wrong);
        assert_eq!(payload["correct_index"], q.correct_index);
        assert_eq!(payload["is_correct"], false);
        assert_eq!(payload["explanation"], q.explanation.as_str());
        assert!(payload["hint"].as_str().is_some());
    }

    #[test]
    fn reduced_text_simplifies() {
        assert_eq!(reduced_text(&PowerTerm::fraction(4, 6)).as_deref(), Some("2/3"));
        assert_eq!(reduced_text(&PowerTerm::fraction(9, 4).negated()).as_deref(), Some("-9/4"));
        assert_eq!(reduced_text(&PowerTerm::power(1, 2, 3)).as_deref(), Some("1/8"));
    }
}
