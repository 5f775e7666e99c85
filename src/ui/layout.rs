//! Layout components (content area, status bar)

use crate::app::App;
use crate::state::EditorFocus;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Create the main layout, reserving the bottom line for the status bar
pub fn create_layout(area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    chunks[0]
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    // Build status bar content
    let mut spans = vec![];

    // Question count
    let count = app.state.editor.questions.len();
    let noun = if count == 1 { "question" } else { "questions" };
    spans.push(Span::styled(
        format!(" {count} {noun} "),
        Style::default().fg(Color::Cyan),
    ));

    // Mode-specific hints
    if app.show_hints() {
        spans.push(Span::styled(
            get_editor_hints(app),
            Style::default().fg(Color::DarkGray),
        ));
    }

    // Kind the next added question gets
    spans.push(Span::raw(" | "));
    spans.push(Span::styled(
        format!("new:{}", app.state.editor.default_kind.label()),
        Style::default().fg(Color::Yellow),
    ));

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Render quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: quit_hint.len() as u16,
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current editor mode
fn get_editor_hints(app: &App) -> String {
    if app.state.preview_open {
        return "Enter/Esc:dismiss".to_string();
    }
    if app.state.editor.type_picker.is_open() {
        return "j/k:nav  Enter:confirm  Esc:cancel".to_string();
    }
    match app.state.focus {
        EditorFocus::Questions => {
            "j/k:nav  n:new  d:delete  r:required  t:type  s:kind  p:preview  Tab:submit"
                .to_string()
        }
        EditorFocus::Submit => "Enter:submit  Tab:questions  p:preview  q:quit".to_string(),
    }
}
