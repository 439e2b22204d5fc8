//! Full demo: one question per level, then a scripted session.
//!
//! Run with: `RUST_LOG=info cargo run --example demo`
//!
//! 1. **Per-level questions**: one seeded question per level, printed with
//!    every option and the misconception behind each distractor.
//! 2. **Session walk-through**: plays level 1 perfectly, fails level 2, retries
//!    it, and prints the stats after each attempt.
//! 3. **Client payloads**: the JSON a UI would receive before and after the
//!    learner answers.

use power_drill_gen::{
    generate_question, render, IntSource, Progress, QuizRequest, Result, Session,
};

fn print_question(level_id: u32, seed: u64) {
    let outcome = generate_question(QuizRequest::seeded(level_id, seed));
    let Some(q) = outcome.question() else {
        println!("  level {level_id}: no such level");
        return;
    };
    let ops = q.operands;
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  [Level {}]  ID: {}  a/b = {}/{} (drawn {}/{})  n = {}  m = {}",
        q.level_id, q.question_id, ops.numerator, ops.denominator,
        ops.raw_numerator, ops.raw_denominator, ops.exponent, ops.second_exponent);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  Q: {}", q.problem);
    for (i, option) in q.options.iter().enumerate() {
        let marker = if i == q.correct_index { "✓" } else { " " };
        println!("  [{i}] {marker} {:<12} {:?}", option.value.to_string(), option.misconception);
    }
    println!("  {}", q.explanation);
    println!();
}

/// Answer the running attempt: `hits` right answers, then wrong ones.
fn play_attempt<S: IntSource>(session: &mut Session<S>, hits: u32) -> Result<()> {
    let mut answered = 0;
    loop {
        let pick = match session.current_question() {
            Some(q) if answered < hits => q.correct_index,
            Some(q) => (q.correct_index + 1) % q.options.len(),
            None => return Ok(()),
        };
        let feedback = session.answer(pick)?;
        answered += 1;
        println!("    Q{} → {}  ({})",
            session.question_number(),
            if feedback.is_correct { "correct" } else { "wrong" },
            feedback.misconception.description());
        if let Progress::Finished(summary) = session.next()? {
            println!("    Result: {}/{} → {}  +{} pts  +{} stars",
                summary.score, session.config().questions_per_attempt,
                if summary.passed { "PASSED" } else { "FAILED" },
                summary.points_awarded, summary.stars_awarded);
            return Ok(());
        }
    }
}

fn print_stats<S: IntSource>(session: &Session<S>) {
    let stats = session.stats();
    println!("    Stats: unlocked up to level {}  score {}  stars {}",
        stats.unlocked_levels, stats.total_score, stats.stars);
    for (level, status) in session.levels() {
        println!("      {} {:<24} {:?}", level.id, level.title, status);
    }
    println!();
}

fn main() -> Result<()> {
    pretty_env_logger::init();

    // ── One question per level ──────────────────────────────────────────────
    println!();
    println!("══ One question per level ══");
    println!();
    for (level_id, seed) in [(1u32, 1001u64), (2, 2002), (3, 3003), (4, 4004)] {
        print_question(level_id, seed);
    }
    print_question(99, 1);

    // ── Session walk-through ────────────────────────────────────────────────
    println!();
    println!("══ Session walk-through ══");
    println!();
    let mut session = Session::seeded(7)?;

    let level = session.select_level(1)?;
    println!("  Theory: {}", level.title);
    for line in &level.theory {
        println!("    • {line}");
    }
    session.begin_quiz()?;
    play_attempt(&mut session, 5)?;
    print_stats(&session);
    session.return_to_menu();

    session.select_level(2)?;
    session.begin_quiz()?;
    play_attempt(&mut session, 2)?;
    print_stats(&session);

    println!("  Retrying level 2…");
    session.retry()?;
    play_attempt(&mut session, 4)?;
    print_stats(&session);
    session.return_to_menu();

    // ── Client payloads ─────────────────────────────────────────────────────
    println!();
    println!("══ Client payloads ══");
    println!();
    session.select_level(3)?;
    let question = session.begin_quiz()?.clone();
    println!("{}", serde_json::to_string_pretty(&render::question_payload(&question)).unwrap_or_default());
    let feedback = session.answer(0)?;
    println!("{}", serde_json::to_string_pretty(&render::feedback_payload(&question, feedback.chosen_index)).unwrap_or_default());

    Ok(())
}
