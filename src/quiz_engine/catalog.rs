//! The question catalog: ordered categories accumulated for one export
//! session.

use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::quiz_engine::{
    builders::{create_multi_choice, create_questions},
    error::Error,
    models::{FreeTextType, QuestionCategory, QuestionDraft, StatementValue},
    xml,
};

/// Append-only sequence of question categories, rendered to Moodle quiz XML
/// on demand.
///
/// A catalog is created empty, filled through the `add_*` calls, and rendered
/// zero or more times. Rendering never freezes the catalog — further `add_*`
/// calls after an export stay legal. Category and question order is insertion
/// order, preserved through rendering.
#[derive(Debug, Clone, Default)]
pub struct QuizCatalog {
    categories: Vec<QuestionCategory>,
}

impl QuizCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a free-text category via [`create_questions`] and append it.
    ///
    /// `gen_question` is invoked exactly `n` times; panics inside it
    /// propagate to the caller.
    pub fn add_questions<F>(&mut self, name: &str, n: usize, qtype: FreeTextType, gen_question: F)
    where
        F: FnMut() -> QuestionDraft,
    {
        self.push_category(create_questions(name, n, qtype, gen_question));
    }

    /// Build a multichoice category via [`create_multi_choice`] and append it.
    pub fn add_multi_choice<S, V>(
        &mut self,
        name: &str,
        text: &str,
        statements: impl IntoIterator<Item = (S, V)>,
    ) where
        S: Into<String>,
        V: Into<StatementValue>,
    {
        self.push_category(create_multi_choice(name, text, statements));
    }

    /// Append an already-built category (e.g. from
    /// [`create_yes_no_questions`](crate::quiz_engine::builders::create_yes_no_questions)).
    pub fn push_category(&mut self, category: QuestionCategory) {
        debug!(
            "appending category '{}' with {} questions",
            category.name,
            category.questions.len()
        );
        self.categories.push(category);
    }

    pub fn categories(&self) -> &[QuestionCategory] {
        &self.categories
    }

    /// Render the whole catalog to a Moodle quiz-import document.
    ///
    /// Each call uses a fresh id sequence starting at
    /// [`BASE_ID`](crate::quiz_engine::xml::BASE_ID), so repeated renders of
    /// an unchanged catalog are byte-identical.
    pub fn create_xml(&self) -> String {
        xml::render_quiz(&self.categories)
    }

    /// Render and write the document to `path`, replacing existing content.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        let document = self.create_xml();
        fs::write(path, &document)?;
        info!("wrote quiz XML to {}", path.display());
        Ok(())
    }
}
