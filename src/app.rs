//! Application state and core logic

use crate::config::{ConfigError, TuiConfig};
use crate::state::{AppState, EditorFocus, FormEditor, QuestionKind};
use crate::ui::{card_height, HEADER_HEIGHT, SUBMIT_HEIGHT};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// User configuration loaded at startup
    pub config: TuiConfig,
    /// Whether the app should quit
    quit: bool,
    /// Terminal size for scroll calculations (height, width)
    pub terminal_size: Option<(u16, u16)>,
}

impl App {
    /// Create a new App instance
    pub fn new() -> Self {
        let config = match TuiConfig::load() {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("failed to load config, using defaults: {err}");
                TuiConfig::default()
            }
        };

        let mut editor = FormEditor::sample();
        if let Some(title) = &config.form_title {
            editor.title = title.clone();
        }
        if let Some(kind) = config
            .default_question_kind
            .as_deref()
            .and_then(QuestionKind::from_name)
        {
            editor.default_kind = kind;
        }

        Self {
            state: AppState {
                editor,
                ..AppState::default()
            },
            config,
            quit: false,
            terminal_size: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether the status bar shows key hints
    pub fn show_hints(&self) -> bool {
        self.config.show_hints.unwrap_or(true)
    }

    /// Persist the editor settings the user changed this session
    pub fn save_config(&self) -> Result<(), ConfigError> {
        let mut config = self.config.clone();
        config.default_question_kind = Some(self.state.editor.default_kind.name().to_string());
        config.save()
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // The preview notice is modal: dismiss keys close it, everything
        // else is swallowed
        if self.state.preview_open {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.preview_open = false;
            }
            return Ok(());
        }

        // The type picker is modal too
        if self.state.editor.type_picker.is_open() {
            self.handle_type_picker_key(key);
            return Ok(());
        }

        self.handle_editor_key(key);
        Ok(())
    }

    /// Handle a mouse event
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        // Overlays ignore the wheel
        if self.state.preview_open || self.state.editor.type_picker.is_open() {
            return Ok(());
        }

        match mouse.kind {
            MouseEventKind::ScrollDown => {
                self.state.move_selection_down();
                self.scroll_to_selection();
            }
            MouseEventKind::ScrollUp => {
                self.state.move_selection_up();
                self.scroll_to_selection();
            }
            _ => {}
        }
        Ok(())
    }

    /// Handle keys while the type picker is open
    fn handle_type_picker_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.state.editor.type_picker.highlight_next();
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.state.editor.type_picker.highlight_prev();
            }
            KeyCode::Enter => {
                let target = self.state.editor.type_picker.target().map(str::to_string);
                match (target, self.state.editor.type_picker.highlighted_kind()) {
                    (Some(id), Some(kind)) => {
                        tracing::debug!("changing question {id} to {}", kind.name());
                        self.state.editor.change_question_kind(&id, kind);
                    }
                    // Enter on the Cancel row closes without changes
                    _ => self.state.editor.cancel_type_picker(),
                }
            }
            KeyCode::Esc => self.state.editor.cancel_type_picker(),
            _ => {}
        }
    }

    /// Handle keys on the editor screen
    fn handle_editor_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Tab => self.state.focus.toggle(),
            KeyCode::Char('j') | KeyCode::Down => {
                if matches!(self.state.focus, EditorFocus::Questions) {
                    self.state.move_selection_down();
                    self.scroll_to_selection();
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                if matches!(self.state.focus, EditorFocus::Questions) {
                    self.state.move_selection_up();
                    self.scroll_to_selection();
                }
            }
            KeyCode::Char('n') => {
                let id = self.state.editor.add_question();
                tracing::debug!("added question {id}");
                self.state.focus = EditorFocus::Questions;
                self.state.select_question(&id);
                self.scroll_to_selection();
            }
            KeyCode::Char('d') => {
                if matches!(self.state.focus, EditorFocus::Questions) {
                    if let Some(id) = self.state.selected_question_id().map(str::to_string) {
                        tracing::debug!("deleted question {id}");
                        self.state.editor.delete_question(&id);
                        self.state.clamp_selection();
                    }
                }
            }
            KeyCode::Char('r') => {
                if matches!(self.state.focus, EditorFocus::Questions) {
                    if let Some(id) = self.state.selected_question_id().map(str::to_string) {
                        self.state.editor.toggle_required(&id);
                    }
                }
            }
            KeyCode::Char('t') => {
                if matches!(self.state.focus, EditorFocus::Questions) {
                    self.open_picker_for_selection();
                }
            }
            KeyCode::Enter => match self.state.focus {
                EditorFocus::Questions => self.open_picker_for_selection(),
                EditorFocus::Submit => {
                    // Submission has nowhere to go yet; the button is a stub
                    tracing::debug!("submit pressed");
                }
            },
            KeyCode::Char('s') => self.state.editor.cycle_default_kind(),
            KeyCode::Char('p') => self.state.preview_open = true,
            _ => {}
        }
    }

    /// Open the type picker for the selected question, if any
    fn open_picker_for_selection(&mut self) {
        if let Some(id) = self.state.selected_question_id().map(str::to_string) {
            self.state.editor.open_type_picker(&id);
        }
    }

    /// Keep the selected card inside the question list viewport
    fn scroll_to_selection(&mut self) {
        let heights: Vec<u16> = self
            .state
            .editor
            .questions
            .iter()
            .map(card_height)
            .collect();
        let viewport = self.question_list_height();
        self.state.ensure_selected_visible(&heights, viewport);
    }

    /// Height available for question cards, from the stored terminal size
    fn question_list_height(&self) -> u16 {
        // terminal_size is (height, width)
        let height = self.terminal_size.map(|(h, _)| h).unwrap_or(24);
        // Subtract the status bar line, header and submit button
        height.saturating_sub(1 + HEADER_HEIGHT + SUBMIT_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::TypePicker;
    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;

    /// App seeded with the sample form, never touching the config file
    fn test_app() -> App {
        App {
            state: AppState {
                editor: FormEditor::sample(),
                ..AppState::default()
            },
            config: TuiConfig::default(),
            quit: false,
            terminal_size: Some((24, 80)),
        }
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap();
    }

    fn wheel(app: &mut App, kind: MouseEventKind) {
        app.handle_mouse(MouseEvent {
            kind,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        })
        .unwrap();
    }

    mod quitting {
        use super::*;

        #[test]
        fn test_should_quit_initially_false() {
            let app = test_app();
            assert!(!app.should_quit());
        }

        #[test]
        fn test_q_quits_from_editor() {
            let mut app = test_app();
            press(&mut app, KeyCode::Char('q'));
            assert!(app.should_quit());
        }

        #[test]
        fn test_q_inside_picker_does_not_quit() {
            let mut app = test_app();
            press(&mut app, KeyCode::Char('t'));
            press(&mut app, KeyCode::Char('q'));
            assert!(!app.should_quit());
        }
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_j_and_k_move_selection() {
            let mut app = test_app();
            press(&mut app, KeyCode::Char('j'));
            assert_eq!(app.state.selected_index, 1);
            press(&mut app, KeyCode::Char('k'));
            assert_eq!(app.state.selected_index, 0);
        }

        #[test]
        fn test_arrow_keys_move_selection() {
            let mut app = test_app();
            press(&mut app, KeyCode::Down);
            assert_eq!(app.state.selected_index, 1);
            press(&mut app, KeyCode::Up);
            assert_eq!(app.state.selected_index, 0);
        }

        #[test]
        fn test_tab_toggles_focus() {
            let mut app = test_app();
            press(&mut app, KeyCode::Tab);
            assert_eq!(app.state.focus, EditorFocus::Submit);
            press(&mut app, KeyCode::Tab);
            assert_eq!(app.state.focus, EditorFocus::Questions);
        }

        #[test]
        fn test_selection_keys_ignored_while_submit_focused() {
            let mut app = test_app();
            press(&mut app, KeyCode::Tab);
            press(&mut app, KeyCode::Char('j'));
            assert_eq!(app.state.selected_index, 0);
        }

        #[test]
        fn test_mouse_wheel_moves_selection() {
            let mut app = test_app();
            wheel(&mut app, MouseEventKind::ScrollDown);
            assert_eq!(app.state.selected_index, 1);
            wheel(&mut app, MouseEventKind::ScrollUp);
            assert_eq!(app.state.selected_index, 0);
        }

        #[test]
        fn test_adding_questions_scrolls_to_the_new_card() {
            let mut app = test_app();
            // Sample cards are 7 and 6 rows; a 24-row terminal leaves 16
            // for the list, so a third card forces a scroll
            press(&mut app, KeyCode::Char('n'));
            assert_eq!(app.state.selected_index, 2);
            assert_eq!(app.state.scroll_offset, 1);
        }
    }

    mod editing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_n_adds_and_selects_the_new_question() {
            let mut app = test_app();
            press(&mut app, KeyCode::Char('n'));
            assert_eq!(app.state.editor.questions.len(), 3);
            assert_eq!(app.state.selected_question_id(), Some("3"));
        }

        #[test]
        fn test_n_works_while_submit_focused() {
            let mut app = test_app();
            press(&mut app, KeyCode::Tab);
            press(&mut app, KeyCode::Char('n'));
            assert_eq!(app.state.editor.questions.len(), 3);
            assert_eq!(app.state.focus, EditorFocus::Questions);
        }

        #[test]
        fn test_d_deletes_the_selected_question() {
            let mut app = test_app();
            press(&mut app, KeyCode::Char('d'));
            assert_eq!(app.state.editor.questions.len(), 1);
            assert_eq!(app.state.selected_question_id(), Some("2"));
        }

        #[test]
        fn test_d_on_last_question_clamps_selection() {
            let mut app = test_app();
            press(&mut app, KeyCode::Char('j'));
            press(&mut app, KeyCode::Char('d'));
            assert_eq!(app.state.selected_index, 0);
            assert_eq!(app.state.selected_question_id(), Some("1"));
        }

        #[test]
        fn test_d_with_no_questions_is_ignored() {
            let mut app = test_app();
            press(&mut app, KeyCode::Char('d'));
            press(&mut app, KeyCode::Char('d'));
            press(&mut app, KeyCode::Char('d'));
            assert!(app.state.editor.questions.is_empty());
        }

        #[test]
        fn test_r_toggles_required_on_selection() {
            let mut app = test_app();
            press(&mut app, KeyCode::Char('r'));
            assert!(app.state.editor.questions[0].required);
            press(&mut app, KeyCode::Char('r'));
            assert!(!app.state.editor.questions[0].required);
        }

        #[test]
        fn test_s_cycles_the_default_kind() {
            let mut app = test_app();
            press(&mut app, KeyCode::Char('s'));
            assert_eq!(app.state.editor.default_kind, QuestionKind::Long);
            press(&mut app, KeyCode::Char('n'));
            assert_eq!(app.state.editor.questions[2].kind, QuestionKind::Long);
        }
    }

    mod type_picker_keys {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_t_opens_picker_for_selection() {
            let mut app = test_app();
            press(&mut app, KeyCode::Char('t'));
            assert_eq!(app.state.editor.type_picker.target(), Some("1"));
        }

        #[test]
        fn test_enter_opens_picker_when_questions_focused() {
            let mut app = test_app();
            press(&mut app, KeyCode::Char('j'));
            press(&mut app, KeyCode::Enter);
            assert_eq!(app.state.editor.type_picker.target(), Some("2"));
        }

        #[test]
        fn test_t_with_no_questions_is_ignored() {
            let mut app = test_app();
            app.state.editor.delete_question("1");
            app.state.editor.delete_question("2");
            app.state.clamp_selection();
            press(&mut app, KeyCode::Char('t'));
            assert!(!app.state.editor.type_picker.is_open());
        }

        #[test]
        fn test_enter_applies_the_highlighted_kind() {
            let mut app = test_app();
            press(&mut app, KeyCode::Char('t'));
            press(&mut app, KeyCode::Char('j'));
            press(&mut app, KeyCode::Enter);
            assert_eq!(app.state.editor.questions[0].kind, QuestionKind::Long);
            assert!(!app.state.editor.type_picker.is_open());
        }

        #[test]
        fn test_enter_on_cancel_row_changes_nothing() {
            let mut app = test_app();
            press(&mut app, KeyCode::Char('t'));
            // Highlight starts on Short; Cancel sits one step up
            press(&mut app, KeyCode::Char('k'));
            press(&mut app, KeyCode::Enter);
            assert_eq!(app.state.editor.questions[0].kind, QuestionKind::Short);
            assert!(!app.state.editor.type_picker.is_open());
        }

        #[test]
        fn test_esc_cancels_the_picker() {
            let mut app = test_app();
            press(&mut app, KeyCode::Char('t'));
            press(&mut app, KeyCode::Esc);
            assert!(!app.state.editor.type_picker.is_open());
            assert_eq!(app.state.editor.questions[0].kind, QuestionKind::Short);
        }

        #[test]
        fn test_editing_keys_are_swallowed_while_picker_open() {
            let mut app = test_app();
            press(&mut app, KeyCode::Char('t'));
            press(&mut app, KeyCode::Char('n'));
            press(&mut app, KeyCode::Char('d'));
            assert_eq!(app.state.editor.questions.len(), 2);
            assert!(app.state.editor.type_picker.is_open());
        }

        #[test]
        fn test_wheel_ignored_while_picker_open() {
            let mut app = test_app();
            press(&mut app, KeyCode::Char('t'));
            wheel(&mut app, MouseEventKind::ScrollDown);
            assert_eq!(app.state.selected_index, 0);
        }
    }

    mod preview_and_submit {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_p_opens_the_preview_notice() {
            let mut app = test_app();
            press(&mut app, KeyCode::Char('p'));
            assert!(app.state.preview_open);
        }

        #[test]
        fn test_enter_dismisses_the_preview_notice() {
            let mut app = test_app();
            press(&mut app, KeyCode::Char('p'));
            press(&mut app, KeyCode::Enter);
            assert!(!app.state.preview_open);
        }

        #[test]
        fn test_esc_dismisses_the_preview_notice() {
            let mut app = test_app();
            press(&mut app, KeyCode::Char('p'));
            press(&mut app, KeyCode::Esc);
            assert!(!app.state.preview_open);
        }

        #[test]
        fn test_preview_leaves_the_form_untouched() {
            let mut app = test_app();
            let before = app.state.editor.questions.clone();
            press(&mut app, KeyCode::Char('p'));
            press(&mut app, KeyCode::Enter);
            assert_eq!(app.state.editor.questions, before);
        }

        #[test]
        fn test_other_keys_are_swallowed_while_preview_open() {
            let mut app = test_app();
            press(&mut app, KeyCode::Char('p'));
            press(&mut app, KeyCode::Char('d'));
            press(&mut app, KeyCode::Char('q'));
            assert!(app.state.preview_open);
            assert_eq!(app.state.editor.questions.len(), 2);
            assert!(!app.should_quit());
        }

        #[test]
        fn test_submit_enter_changes_nothing() {
            let mut app = test_app();
            press(&mut app, KeyCode::Tab);
            press(&mut app, KeyCode::Enter);
            assert_eq!(app.state.editor.questions.len(), 2);
            assert!(!app.state.preview_open);
            assert!(!app.state.editor.type_picker.is_open());
            assert!(!app.should_quit());
        }
    }

    mod config_wiring {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_show_hints_defaults_to_true() {
            let app = test_app();
            assert!(app.show_hints());
        }

        #[test]
        fn test_show_hints_respects_config() {
            let mut app = test_app();
            app.config.show_hints = Some(false);
            assert!(!app.show_hints());
        }

        #[test]
        fn test_picker_state_starts_closed() {
            let app = test_app();
            assert_eq!(app.state.editor.type_picker, TypePicker::Closed);
        }
    }
}
