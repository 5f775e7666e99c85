//! Type picker overlay for choosing a question's answer kind

use crate::app::App;
use crate::state::{TypePicker, KIND_CHOICES};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the type picker centered on the screen
pub fn render_type_picker(frame: &mut Frame, app: &App) {
    let TypePicker::Open {
        question_id,
        highlight,
    } = &app.state.editor.type_picker
    else {
        return;
    };

    let area = frame.area();

    // Dialog dimensions
    let dialog_width = 40u16;
    let dialog_height = 11u16;

    // Center the dialog
    let dialog_x = area.x + (area.width.saturating_sub(dialog_width)) / 2;
    let dialog_y = area.y + (area.height.saturating_sub(dialog_height)) / 2;

    let dialog_area = Rect {
        x: dialog_x,
        y: dialog_y,
        width: dialog_width,
        height: dialog_height,
    };

    // Clear the area behind the dialog
    frame.render_widget(Clear, dialog_area);

    let target = app.state.editor.question(question_id);
    let current_kind = target.map(|q| q.kind);

    // Format the target title (truncate if too long)
    let max_display_len = (dialog_width - 6) as usize;
    let target_title = truncate_string(
        target.map(|q| q.title.as_str()).unwrap_or("Question"),
        max_display_len,
    );

    // Build content
    let mut content = vec![
        Line::from(Span::styled(
            "Question Type",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            target_title,
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];

    // Kind rows with selection highlighting
    for (i, kind) in KIND_CHOICES.iter().enumerate() {
        let is_highlighted = *highlight == i;
        let prefix = if is_highlighted { "▸ " } else { "  " };
        let style = if is_highlighted {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let mut spans = vec![Span::styled(format!("{}{}", prefix, kind.label()), style)];
        if current_kind == Some(*kind) {
            spans.push(Span::styled(" ●", Style::default().fg(Color::Cyan)));
        }
        content.push(Line::from(spans));
    }

    // Cancel row
    let cancel_highlighted = *highlight == KIND_CHOICES.len();
    let cancel_prefix = if cancel_highlighted { "▸ " } else { "  " };
    let cancel_style = if cancel_highlighted {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    content.push(Line::from(Span::styled(
        format!("{}Cancel", cancel_prefix),
        cancel_style,
    )));

    content.push(Line::from(""));
    content.push(Line::from(vec![
        Span::styled("↑↓", Style::default().fg(Color::Cyan)),
        Span::styled(" select  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::styled(" confirm  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::styled(" cancel", Style::default().fg(Color::DarkGray)),
    ]));

    let dialog = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::new().bg(Color::Black).fg(Color::White));

    frame.render_widget(dialog, dialog_area);
}

/// Truncate a string to a maximum length with ellipsis
fn truncate_string(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len.saturating_sub(3)])
    }
}
