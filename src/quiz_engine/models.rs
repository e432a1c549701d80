use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Shared constants
// ---------------------------------------------------------------------------

/// Inline-HTML line break that replaces every literal `\n` in question text.
pub const LINE_BREAK: &str = "<br />";

/// Label of the affirmative answer on true/false statements.
pub const TRUE_LABEL: &str = "Wahr";

/// Label of the negative answer on true/false statements.
pub const FALSE_LABEL: &str = "Falsch";

/// Prefix that marks a choice string as the correct answer.
pub const CORRECT_MARKER: char = '=';

// ---------------------------------------------------------------------------
// Question primitives
// ---------------------------------------------------------------------------

/// Question-type variants recognized by the Moodle quiz-import schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Cloze,
    ShortAnswer,
    TrueFalse,
    MultiChoice,
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            QuestionType::Cloze       => "cloze",
            QuestionType::ShortAnswer => "shortanswer",
            QuestionType::TrueFalse   => "truefalse",
            QuestionType::MultiChoice => "multichoice",
        };
        write!(f, "{}", s)
    }
}

/// The free-text subset of [`QuestionType`] accepted by generator-driven
/// categories. Cloze and short-answer questions carry ungraded answers;
/// the graded types are built from statement tables instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FreeTextType {
    Cloze,
    ShortAnswer,
}

impl From<FreeTextType> for QuestionType {
    fn from(t: FreeTextType) -> Self {
        match t {
            FreeTextType::Cloze       => QuestionType::Cloze,
            FreeTextType::ShortAnswer => QuestionType::ShortAnswer,
        }
    }
}

/// One answer choice of a question.
///
/// `fraction` is the percentage of credit ("0".."100") awarded when this
/// answer is selected; `None` on ungraded free-text answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fraction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

impl Answer {
    /// An answer with no fraction and no feedback (cloze / short-answer).
    pub fn ungraded(text: impl Into<String>) -> Self {
        Answer { text: text.into(), fraction: None, feedback: None }
    }

    /// An answer awarding `percent` credit when selected.
    pub fn graded(text: impl Into<String>, percent: u8) -> Self {
        Answer {
            text: text.into(),
            fraction: Some(percent.to_string()),
            feedback: None,
        }
    }

    pub fn with_feedback(mut self, feedback: impl Into<String>) -> Self {
        self.feedback = Some(feedback.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub qtype: QuestionType,
    pub name: String,
    /// Inline HTML; literal newlines are already replaced by [`LINE_BREAK`].
    pub text: String,
    pub answers: Vec<Answer>,
}

/// Named grouping of questions, exported as one `<question type="category">`
/// section. The category name doubles as the default per-question name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionCategory {
    pub name: String,
    pub questions: Vec<Question>,
}

// ---------------------------------------------------------------------------
// Builder inputs
// ---------------------------------------------------------------------------

/// Raw question data produced by a caller-supplied generator closure.
///
/// `name` falls back to the category name when absent; `answers` may be
/// empty for single-blank cloze questions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDraft {
    pub name: Option<String>,
    pub text: String,
    pub answers: Vec<String>,
}

impl QuestionDraft {
    pub fn new(text: impl Into<String>) -> Self {
        QuestionDraft { name: None, text: text.into(), answers: Vec::new() }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_answers<S: Into<String>>(mut self, answers: impl IntoIterator<Item = S>) -> Self {
        self.answers = answers.into_iter().map(Into::into).collect();
        self
    }
}

/// Value side of a statement table entry: either a plain truth value or a
/// list of choice strings (with [`CORRECT_MARKER`] prefixes on the correct
/// ones).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatementValue {
    Truth(bool),
    Choices(Vec<String>),
}

impl From<bool> for StatementValue {
    fn from(truth: bool) -> Self {
        StatementValue::Truth(truth)
    }
}

impl From<Vec<String>> for StatementValue {
    fn from(choices: Vec<String>) -> Self {
        StatementValue::Choices(choices)
    }
}

impl From<Vec<&str>> for StatementValue {
    fn from(choices: Vec<&str>) -> Self {
        StatementValue::Choices(choices.into_iter().map(str::to_string).collect())
    }
}
