//! The three question builders: generator-driven free-text categories,
//! legacy yes/no statement tables, and multichoice statement tables.
//!
//! Each builder returns a fully normalized [`QuestionCategory`] ready to be
//! appended to a catalog. Question text is converted to inline HTML here
//! (every literal `\n` becomes a `<br />`); nothing downstream touches it
//! again.

use crate::quiz_engine::models::*;

/// Replace every literal newline with the inline line-break marker.
pub(crate) fn to_inline_html(text: &str) -> String {
    text.replace('\n', LINE_BREAK)
}

/// Build a category of `n` cloze or short-answer questions by invoking
/// `gen_question` exactly `n` times.
///
/// The draft's `name` falls back to the category name when absent. Raw
/// answer strings become ungraded answers — these question types are either
/// manually graded or single-blank. Panics inside `gen_question` propagate
/// to the caller.
pub fn create_questions<F>(
    name: &str,
    n: usize,
    qtype: FreeTextType,
    mut gen_question: F,
) -> QuestionCategory
where
    F: FnMut() -> QuestionDraft,
{
    let mut questions = Vec::with_capacity(n);
    for _ in 0..n {
        let draft = gen_question();
        questions.push(Question {
            qtype: qtype.into(),
            name: draft.name.unwrap_or_else(|| name.to_string()),
            text: to_inline_html(&draft.text),
            answers: draft.answers.into_iter().map(Answer::ungraded).collect(),
        });
    }
    QuestionCategory { name: name.to_string(), questions }
}

/// Build one `truefalse` question per statement, sharing the prompt `text`.
///
/// Legacy path — superseded by the boolean branch of [`create_multi_choice`]
/// but kept for existing question sets. The affirmative/negative answer pair
/// scores 100/0 according to the statement's truth value, and the negative
/// answer always carries the literal feedback "Falsch".
pub fn create_yes_no_questions<S>(
    name: &str,
    text: &str,
    statements: impl IntoIterator<Item = (S, bool)>,
) -> QuestionCategory
where
    S: Into<String>,
{
    let prompt = to_inline_html(text);
    let questions = statements
        .into_iter()
        .map(|(statement, truth)| {
            let statement: String = statement.into();
            Question {
                qtype: QuestionType::TrueFalse,
                name: name.to_string(),
                text: format!("{}{}{}", prompt, LINE_BREAK, statement),
                answers: vec![
                    Answer::graded(TRUE_LABEL, if truth { 100 } else { 0 }),
                    Answer::graded(FALSE_LABEL, if truth { 0 } else { 100 })
                        .with_feedback("Falsch"),
                ],
            }
        })
        .collect();
    QuestionCategory { name: name.to_string(), questions }
}

/// Build one `multichoice` question per statement, sharing the prompt `text`.
///
/// A boolean statement yields the same Wahr/Falsch pair as
/// [`create_yes_no_questions`] but with explicitly empty feedback on both
/// answers. A choice list yields one answer per choice: a leading
/// [`CORRECT_MARKER`] is stripped and scores 100, everything else is taken
/// verbatim and scores 0. An empty choice list produces a question with no
/// answers — caller error, not validated here.
pub fn create_multi_choice<S, V>(
    name: &str,
    text: &str,
    statements: impl IntoIterator<Item = (S, V)>,
) -> QuestionCategory
where
    S: Into<String>,
    V: Into<StatementValue>,
{
    let prompt = to_inline_html(text);
    let questions = statements
        .into_iter()
        .map(|(statement, value)| {
            let statement: String = statement.into();
            let answers = match value.into() {
                StatementValue::Truth(truth) => vec![
                    Answer::graded(TRUE_LABEL, if truth { 100 } else { 0 })
                        .with_feedback(""),
                    Answer::graded(FALSE_LABEL, if truth { 0 } else { 100 })
                        .with_feedback(""),
                ],
                StatementValue::Choices(choices) => choices
                    .into_iter()
                    .map(|choice| match choice.strip_prefix(CORRECT_MARKER) {
                        Some(stripped) => Answer::graded(stripped, 100),
                        None => Answer::graded(choice, 0),
                    })
                    .collect(),
            };
            Question {
                qtype: QuestionType::MultiChoice,
                name: name.to_string(),
                text: format!("{}{}{}", prompt, LINE_BREAK, statement),
                answers,
            }
        })
        .collect();
    QuestionCategory { name: name.to_string(), questions }
}
