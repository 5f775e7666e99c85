//! Type picker overlay state

use super::question::QuestionKind;

/// Kinds offered by the picker, in display order
pub const KIND_CHOICES: [QuestionKind; 3] = [
    QuestionKind::Short,
    QuestionKind::Long,
    QuestionKind::Multiple,
];

/// Number of navigable picker rows: the kind choices plus Cancel
pub const PICKER_ROWS: usize = KIND_CHOICES.len() + 1;

/// Modal state for choosing a question's answer kind.
///
/// At most one picker is open at a time, and it always targets exactly
/// one question by id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TypePicker {
    /// No picker shown
    #[default]
    Closed,
    /// Picker shown for one target question
    Open {
        /// Id of the question being retyped
        question_id: String,
        /// Highlighted row index into the choices, Cancel last
        highlight: usize,
    },
}

impl TypePicker {
    /// Open the picker, preset to the target's current kind
    pub fn open(question_id: impl Into<String>, current: QuestionKind) -> Self {
        let highlight = KIND_CHOICES
            .iter()
            .position(|kind| *kind == current)
            .unwrap_or(0);
        Self::Open {
            question_id: question_id.into(),
            highlight,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    /// Id of the question being retyped, when open
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Closed => None,
            Self::Open { question_id, .. } => Some(question_id),
        }
    }

    /// Move the highlight down, wrapping past Cancel to the top
    pub fn highlight_next(&mut self) {
        if let Self::Open { highlight, .. } = self {
            *highlight = (*highlight + 1) % PICKER_ROWS;
        }
    }

    /// Move the highlight up, wrapping from the top to Cancel
    pub fn highlight_prev(&mut self) {
        if let Self::Open { highlight, .. } = self {
            *highlight = (*highlight + PICKER_ROWS - 1) % PICKER_ROWS;
        }
    }

    /// Kind under the highlight, or None on the Cancel row or when closed
    pub fn highlighted_kind(&self) -> Option<QuestionKind> {
        match self {
            Self::Closed => None,
            Self::Open { highlight, .. } => KIND_CHOICES.get(*highlight).copied(),
        }
    }
}
