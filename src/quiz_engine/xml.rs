//! Moodle quiz-XML rendering.
//!
//! The catalog is rendered through a maud template into a single `<quiz>`
//! document: one `<question type="category">` marker per category followed by
//! its questions in insertion order. Question text is inline HTML and goes
//! out inside a CDATA section; everything else is escaped by maud.

use log::debug;
use maud::{html, Markup, PreEscaped};

use crate::quiz_engine::models::{Answer, Question, QuestionCategory, QuestionType};

/// First question id handed out in every render pass.
pub const BASE_ID: u32 = 100_000;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Monotonically increasing question-id source, scoped to one render pass.
///
/// Two renders of the same catalog each restart at [`BASE_ID`], so repeated
/// exports are byte-identical.
pub struct IdSequence {
    next: u32,
}

impl IdSequence {
    pub fn new() -> Self {
        IdSequence { next: BASE_ID }
    }

    /// Return the next unoccupied id and advance.
    pub fn next_id(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

/// Wrap inline HTML in a CDATA section.
///
/// A literal "]]>" would terminate the section early, so it is split across
/// two adjacent sections.
fn cdata(text: &str) -> String {
    format!("<![CDATA[{}]]>", text.replace("]]>", "]]]]><![CDATA[>"))
}

fn answer_xml(answer: &Answer) -> Markup {
    html! {
        answer fraction=[answer.fraction.as_deref()] {
            text { (answer.text) }
            @if let Some(feedback) = &answer.feedback {
                feedback { text { (feedback) } }
            }
        }
    }
}

fn question_xml(question: &Question, id: u32) -> Markup {
    html! {
        question type=(question.qtype) id=(id) {
            name { text { (question.name) } }
            questiontext format="html" {
                text { (PreEscaped(cdata(&question.text))) }
            }
            @if question.qtype == QuestionType::MultiChoice {
                single { "true" }
                shuffleanswers { "false" }
            }
            @for answer in &question.answers {
                (answer_xml(answer))
            }
        }
    }
}

/// Render the full catalog to a Moodle quiz-import document.
///
/// Question ids start at [`BASE_ID`] and increase strictly by one per
/// question, with no reuse inside a render pass.
pub fn render_quiz(categories: &[QuestionCategory]) -> String {
    let mut ids = IdSequence::new();
    let body = html! {
        quiz {
            @for category in categories {
                question type="category" {
                    category {
                        text { (format!("$course$/{}", category.name)) }
                    }
                }
                @for question in &category.questions {
                    (question_xml(question, ids.next_id()))
                }
            }
        }
    };
    debug!(
        "rendered {} categories ({} questions)",
        categories.len(),
        categories.iter().map(|c| c.questions.len()).sum::<usize>()
    );
    format!("{}\n{}", XML_DECLARATION, body.into_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_sequence_starts_at_base_and_increments() {
        let mut ids = IdSequence::new();
        assert_eq!(ids.next_id(), BASE_ID);
        assert_eq!(ids.next_id(), BASE_ID + 1);
        assert_eq!(ids.next_id(), BASE_ID + 2);
    }

    #[test]
    fn cdata_splits_embedded_terminator() {
        assert_eq!(cdata("plain"), "<![CDATA[plain]]>");
        assert_eq!(cdata("a]]>b"), "<![CDATA[a]]]]><![CDATA[>b]]>");
    }
}
