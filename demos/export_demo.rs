//! End-to-end demo: build a small question catalog and export it as
//! Moodle quiz XML.
//!
//! Run with: `cargo run --example export_demo`
//!
//! Shows all three ways of filling a catalog:
//!
//! 1. **Generator closures** — `add_questions` runs the closure once per
//!    question; here a seeded `StdRng` plus the random helpers produce
//!    reproducible arithmetic cloze questions.
//! 2. **Multichoice statement tables** — booleans become a Wahr/Falsch
//!    answer pair, choice lists use the `=` prefix to mark the correct one.
//! 3. **Legacy yes/no tables** — `create_yes_no_questions` builds a
//!    `truefalse` category that is appended via `push_category`.
//!
//! The rendered document is printed and written to the temp directory.
//! Set `RUST_LOG=debug` to see the per-category log output.

use rand::rngs::StdRng;
use rand::SeedableRng;

use moodle_quiz_gen::{
    create_yes_no_questions, random_char, random_element, random_int, shuffled,
    FreeTextType, QuestionDraft, QuizCatalog, StatementValue,
};

fn main() {
    pretty_env_logger::init();

    let mut rng = StdRng::seed_from_u64(2024);
    let mut catalog = QuizCatalog::new();

    // ── Generated cloze questions ───────────────────────────────────────────
    // Each question asks for the sum of two random numbers; the cloze blank
    // carries the expected answer.
    catalog.add_questions("Kopfrechnen", 5, FreeTextType::Cloze, || {
        let a = random_int(&mut rng, 1, 50);
        let b = random_int(&mut rng, 1, 50);
        QuestionDraft::new(format!(
            "Berechnen Sie:\n{} + {} = {{1:SHORTANSWER:={}}}",
            a, b,
            a + b
        ))
    });

    // ── Generated short-answer questions ────────────────────────────────────
    // A random variable name keeps repeated exports from looking identical.
    let mut var_rng = StdRng::seed_from_u64(7);
    catalog.add_questions("Variablen", 3, FreeTextType::ShortAnswer, || {
        let var = random_char(&mut var_rng);
        let value = random_int(&mut var_rng, 2, 9);
        QuestionDraft::new(format!("Sei {} = {}. Was ist {} * 2?", var, value, var))
            .with_answers([(value * 2).to_string()])
    });

    // ── Multichoice statement table ─────────────────────────────────────────
    // Choice order is shuffled once at build time; the "=" marker travels
    // with its choice, so the correct answer stays correct.
    let mut choice_rng = StdRng::seed_from_u64(99);
    let capitals = shuffled(&mut choice_rng, vec!["=Berlin", "Bonn", "Hamburg"]);
    let picked = *random_element(&mut choice_rng, &["Deutschland", "die Bundesrepublik"]);
    catalog.add_multi_choice("Geografie", "Beurteilen Sie die Aussage:", [
        (
            format!("Was ist die Hauptstadt von {}?", picked),
            StatementValue::from(capitals),
        ),
        (
            "Die Donau fließt durch Wien".to_string(),
            StatementValue::from(true),
        ),
    ]);

    // ── Legacy yes/no category ──────────────────────────────────────────────
    catalog.push_category(create_yes_no_questions(
        "Altbestand",
        "Stimmt die folgende Aussage?",
        [("Ein Byte hat 8 Bit", true), ("Ein Kilobyte hat 1000 Bit", false)],
    ));

    let xml = catalog.create_xml();
    println!("{}", xml);

    let path = std::env::temp_dir().join("export_demo_quiz.xml");
    match catalog.save_to(&path) {
        Ok(()) => println!("\nsaved to {}", path.display()),
        Err(e) => eprintln!("\nexport failed: {}", e),
    }
}
