//! Scholar Sprint demo entry point
//!
//! Drives a full seeded run from the command line: a scripted player
//! answers from a small built-in bank, mostly correctly, taking the first
//! power-up of every offer and spending it right away. Prints the
//! game-over card at the end. Run with `RUST_LOG=info` for the engine log.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use scholar_sprint::consts::TIMER_TICK;
use scholar_sprint::{
    AnswerVerdict, BankSupplier, MemoryStore, Question, RunEngine, RunPhase, TickOutcome,
};

fn sample_bank() -> Vec<Question> {
    let entries: [(&str, &[&str], usize); 8] = [
        ("What is 7 x 8?", &["54", "56", "64", "48"], 1),
        (
            "Which planet is closest to the sun?",
            &["Venus", "Earth", "Mercury", "Mars"],
            2,
        ),
        (
            "What is the chemical symbol for gold?",
            &["Ag", "Au", "Gd", "Go"],
            1,
        ),
        (
            "Who wrote 'Romeo and Juliet'?",
            &["Dickens", "Austen", "Shakespeare", "Twain"],
            2,
        ),
        (
            "What is the largest ocean?",
            &["Atlantic", "Indian", "Arctic", "Pacific"],
            3,
        ),
        ("How many sides does a hexagon have?", &["5", "6", "7", "8"], 1),
        (
            "What gas do plants absorb from the air?",
            &["Oxygen", "Nitrogen", "Carbon dioxide", "Helium"],
            2,
        ),
        (
            "In which year did World War II end?",
            &["1943", "1944", "1945", "1946"],
            2,
        ),
    ];
    entries
        .iter()
        .enumerate()
        .map(|(i, (text, options, correct))| Question {
            id: format!("demo-{i}"),
            text: text.to_string(),
            options: options.iter().map(|s| s.to_string()).collect(),
            correct_index: *correct,
            explanation: None,
            subject: Some("trivia".to_string()),
        })
        .collect()
}

fn main() {
    env_logger::init();

    let seed = 0xC0FFEE;
    let supplier = BankSupplier::new(sample_bank(), seed);
    let mut engine = RunEngine::new(seed, supplier, MemoryStore::new());
    engine.start().expect("demo bank is non-empty");

    // Separate stream for the scripted player so its choices never perturb
    // the engine's own draws.
    let mut player = Pcg32::seed_from_u64(seed ^ 1);

    loop {
        match engine.state().phase {
            RunPhase::Playing => {
                // Think for a moment, then answer; roughly 4 in 5 correct.
                for _ in 0..20 {
                    if engine.tick(TIMER_TICK).expect("bank never empties")
                        == TickOutcome::TimedOut
                    {
                        break;
                    }
                }
                if engine.state().phase != RunPhase::Playing {
                    continue;
                }
                let question = engine.current_question().expect("a question is active");
                let pick = if player.random_ratio(4, 5) {
                    question.correct_index
                } else {
                    (question.correct_index + 1) % question.options.len()
                };
                let text = question.text.clone();
                match engine.answer(pick).expect("bank never empties") {
                    AnswerVerdict::Correct { gained } => {
                        println!("  + {gained:>3}m  {text}");
                    }
                    AnswerVerdict::Wrong { .. } => {
                        println!("  miss   {text} (lives left: {})", engine.state().lives);
                    }
                    AnswerVerdict::Ignored => {}
                }
            }
            RunPhase::PowerUpSelect => {
                let offer = engine.state().offer.expect("an offer is pending");
                println!(
                    "  offer: {} or {} -> taking {}",
                    offer[0].name(),
                    offer[1].name(),
                    offer[0].name()
                );
                engine
                    .select_power_up(offer[0])
                    .expect("bank never empties");
                engine.use_power_up(offer[0]).expect("bank never empties");
            }
            RunPhase::GameOver | RunPhase::Ready => break,
        }
    }

    let summary = engine.summary();
    println!();
    println!("{}", summary.share_text());
    if !summary.milestones().is_empty() {
        println!("milestones: {}", summary.milestones().join(", "));
    }
    println!(
        "questions: {}  power-ups used: {}{}",
        summary.questions_answered,
        summary.power_ups_used,
        if summary.is_new_best { "  new best!" } else { "" }
    );
}
