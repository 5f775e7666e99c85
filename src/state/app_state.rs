//! Application state definitions

use super::editor::FormEditor;

/// Which part of the editor screen has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorFocus {
    /// The question list
    #[default]
    Questions,
    /// The submit button
    Submit,
}

impl EditorFocus {
    /// Toggle between the question list and the submit button
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Questions => Self::Submit,
            Self::Submit => Self::Questions,
        };
    }
}

/// Main application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// The form being edited
    pub editor: FormEditor,
    /// Index of the selected question
    pub selected_index: usize,
    /// Keyboard focus on the editor screen
    pub focus: EditorFocus,
    /// Index of the first question drawn at the top of the list
    pub scroll_offset: usize,
    /// Whether the preview notice is showing
    pub preview_open: bool,
}

impl AppState {
    /// Move selection down in the question list
    pub fn move_selection_down(&mut self) {
        let count = self.editor.questions.len();
        if count > 0 && self.selected_index < count - 1 {
            self.selected_index += 1;
        }
    }

    /// Move selection up in the question list
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Keep selection and scroll valid after the sequence shrinks
    pub fn clamp_selection(&mut self) {
        let count = self.editor.questions.len();
        if count == 0 {
            self.selected_index = 0;
            self.scroll_offset = 0;
            return;
        }
        if self.selected_index >= count {
            self.selected_index = count - 1;
        }
        if self.scroll_offset > self.selected_index {
            self.scroll_offset = self.selected_index;
        }
    }

    /// Select the question with this id, if present
    pub fn select_question(&mut self, id: &str) {
        if let Some(index) = self.editor.questions.iter().position(|q| q.id == id) {
            self.selected_index = index;
        }
    }

    /// Id of the currently selected question, if any
    pub fn selected_question_id(&self) -> Option<&str> {
        self.editor
            .questions
            .get(self.selected_index)
            .map(|q| q.id.as_str())
    }

    /// Scroll so the selected card fits inside the viewport.
    ///
    /// `heights` holds one rendered height per question, in order.
    pub fn ensure_selected_visible(&mut self, heights: &[u16], viewport: u16) {
        if heights.is_empty() {
            self.scroll_offset = 0;
            return;
        }
        let selected = self.selected_index.min(heights.len() - 1);
        if selected < self.scroll_offset {
            self.scroll_offset = selected;
            return;
        }
        while self.scroll_offset < selected {
            let used: u16 = heights[self.scroll_offset..=selected].iter().sum();
            if used <= viewport {
                break;
            }
            self.scroll_offset += 1;
        }
    }
}
