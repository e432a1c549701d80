//! Core quiz engine — question building, catalog state, and XML rendering.
//!
//! ## Module overview
//!
//! | Module     | Purpose |
//! |------------|---------|
//! | `models`   | All shared types: question/answer structs, type enums, constants |
//! | `random`   | Stateless random helpers for caller-supplied generators |
//! | `builders` | The three category builders (free-text, yes/no, multichoice) |
//! | `catalog`  | `QuizCatalog` — append-only category sequence per export session |
//! | `xml`      | Moodle quiz-XML rendering and the render-scoped id sequence |
//! | `error`    | Passthrough error enum (I/O only today) |

pub mod builders;
pub mod catalog;
pub mod error;
pub mod models;
pub mod random;
pub mod xml;

// Re-export the public API surface so callers can use
// `quiz_engine::QuizCatalog` without reaching into sub-modules.
pub use builders::{create_multi_choice, create_questions, create_yes_no_questions};
pub use catalog::QuizCatalog;
pub use error::Error;
pub use models::{
    Answer, FreeTextType, Question, QuestionCategory, QuestionDraft, QuestionType,
    StatementValue, CORRECT_MARKER, FALSE_LABEL, LINE_BREAK, TRUE_LABEL,
};
pub use random::{random_char, random_element, random_int, shuffled};
pub use xml::{render_quiz, IdSequence, BASE_ID};
