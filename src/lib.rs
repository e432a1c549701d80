//! # moodle_quiz_gen
//!
//! A small offline generator for Moodle quiz-import XML.
//!
//! Callers describe question sets either as generator closures (for cloze and
//! short-answer questions) or as statement tables (for true/false and
//! multiple-choice questions). The library normalizes them into an in-memory
//! catalog and renders the whole catalog to an XML document that Moodle's
//! quiz import understands.
//!
//! ## How it works
//!
//! 1. Create a [`QuizCatalog`].
//! 2. Append categories with [`QuizCatalog::add_questions`] (invokes your
//!    generator closure `n` times) or [`QuizCatalog::add_multi_choice`]
//!    (one question per statement-table entry).
//! 3. Call [`QuizCatalog::create_xml`] for the document string, or
//!    [`QuizCatalog::save_to`] to write it straight to a file.
//!
//! Question ids are assigned per render pass, starting at 100000, so
//! exporting the same catalog twice yields byte-identical documents.
//!
//! ## Quick start
//!
//! ```rust
//! use moodle_quiz_gen::{FreeTextType, QuestionDraft, QuizCatalog, StatementValue};
//!
//! let mut catalog = QuizCatalog::new();
//!
//! // Three generated cloze questions; the closure runs once per question.
//! let mut x = 0;
//! catalog.add_questions("Addition", 3, FreeTextType::Cloze, || {
//!     x += 1;
//!     QuestionDraft::new(format!("{} + {} = {{1:SHORTANSWER:={}}}", x, x, x + x))
//! });
//!
//! // One multichoice question per statement. Booleans become a
//! // Wahr/Falsch pair; a "=" prefix marks the correct choice in a list.
//! catalog.add_multi_choice("Basics", "Beurteilen Sie die Aussage:", [
//!     ("Rust hat einen Garbage Collector", StatementValue::from(false)),
//!     ("2 + 2 =", StatementValue::from(vec!["=4", "5", "22"])),
//! ]);
//!
//! let xml = catalog.create_xml();
//! assert!(xml.contains(r#"question type="multichoice""#));
//! assert!(xml.contains("100000"));
//! ```

pub mod quiz_engine;

// Convenience re-exports so callers can use `moodle_quiz_gen::QuizCatalog`
// directly without reaching into `quiz_engine::`.
pub use quiz_engine::{
    create_multi_choice, create_questions, create_yes_no_questions, random_char,
    random_element, random_int, render_quiz, shuffled, Answer, Error, FreeTextType,
    IdSequence, Question, QuestionCategory, QuestionDraft, QuestionType, QuizCatalog,
    StatementValue, BASE_ID, CORRECT_MARKER, FALSE_LABEL, LINE_BREAK, TRUE_LABEL,
};
