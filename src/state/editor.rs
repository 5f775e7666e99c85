//! Form editing session

use super::picker::TypePicker;
use super::question::{Question, QuestionKind};

/// In-memory editing session for one survey form.
///
/// Owns the ordered question sequence and the type picker overlay.
/// Question ids come from a counter that only ever moves forward, so an
/// id is never reused even after deletions.
#[derive(Debug, Clone, Default)]
pub struct FormEditor {
    /// Form title shown in the header
    pub title: String,
    /// One-line description shown under the title
    pub description: String,
    /// Ordered question sequence
    pub questions: Vec<Question>,
    /// Kind given to newly added questions
    pub default_kind: QuestionKind,
    /// Type picker overlay state
    pub type_picker: TypePicker,
    /// Id source; the highest id ever handed out
    next_id: u64,
}

impl FormEditor {
    /// The starter form shown on launch
    pub fn sample() -> Self {
        Self {
            title: "Untitled form".to_string(),
            description: "A short sample survey".to_string(),
            questions: vec![
                Question::new("1", "Name", QuestionKind::Short),
                Question {
                    id: "2".to_string(),
                    title: "Age".to_string(),
                    kind: QuestionKind::Multiple,
                    required: false,
                    options: vec!["20s".to_string(), "30s".to_string()],
                },
            ],
            default_kind: QuestionKind::Short,
            type_picker: TypePicker::Closed,
            next_id: 2,
        }
    }

    /// Append a new question with the current default kind.
    ///
    /// Returns the fresh id so the caller can move selection to it.
    pub fn add_question(&mut self) -> String {
        self.next_id += 1;
        let question = Question::new(
            self.next_id.to_string(),
            format!("Question {}", self.next_id),
            self.default_kind,
        );
        let id = question.id.clone();
        self.questions.push(question);
        id
    }

    /// Remove the question with this id; unknown ids are a no-op
    pub fn delete_question(&mut self, id: &str) {
        self.questions.retain(|question| question.id != id);
    }

    /// Flip the required flag on the matching question; unknown ids are
    /// a no-op
    pub fn toggle_required(&mut self, id: &str) {
        if let Some(question) = self.questions.iter_mut().find(|q| q.id == id) {
            question.required = !question.required;
        }
    }

    /// Replace the matching question's kind and close the picker.
    ///
    /// The picker closes whether or not the id matched, so a confirm
    /// never leaves the overlay up.
    pub fn change_question_kind(&mut self, id: &str, kind: QuestionKind) {
        if let Some(question) = self.questions.iter_mut().find(|q| q.id == id) {
            question.set_kind(kind);
        }
        self.type_picker = TypePicker::Closed;
    }

    /// Open the type picker for one question, preset to its current kind
    pub fn open_type_picker(&mut self, id: &str) {
        let current = self
            .questions
            .iter()
            .find(|q| q.id == id)
            .map(|q| q.kind)
            .unwrap_or_default();
        self.type_picker = TypePicker::open(id, current);
    }

    /// Close the type picker without changing anything
    pub fn cancel_type_picker(&mut self) {
        self.type_picker = TypePicker::Closed;
    }

    /// Advance the kind new questions are created with
    pub fn cycle_default_kind(&mut self) {
        self.default_kind = self.default_kind.next();
    }

    /// Look up a question by id
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }
}
