//! Form editor screen

use super::question_card::{card_height, draw_question_card};
use crate::app::App;
use crate::state::EditorFocus;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Header height including borders
pub const HEADER_HEIGHT: u16 = 4;
/// Submit button height including borders
pub const SUBMIT_HEIGHT: u16 = 3;

/// Draw the editor screen: header, question list, submit button
pub fn draw_editor(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(SUBMIT_HEIGHT),
        ])
        .split(area);

    draw_header(frame, chunks[0], app);
    draw_question_list(frame, chunks[1], app);
    draw_submit_button(frame, chunks[2], app);
}

/// Draw the form title and description
fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let editor = &app.state.editor;

    let content = vec![
        Line::from(Span::styled(
            editor.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            editor.description.clone(),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let header = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(header, area);

    // Preview affordance pinned to the header's right edge
    let preview_hint = " p:preview ";
    let hint_width = (preview_hint.len() as u16).min(area.width.saturating_sub(2));
    if hint_width > 0 && area.height > 1 {
        let hint_area = Rect {
            x: area.x + area.width.saturating_sub(hint_width + 1),
            y: area.y + 1,
            width: hint_width,
            height: 1,
        };
        let hint = Paragraph::new(preview_hint).style(Style::default().fg(Color::DarkGray));
        frame.render_widget(hint, hint_area);
    }
}

/// Draw the scrollable question list as stacked cards
fn draw_question_list(frame: &mut Frame, area: Rect, app: &App) {
    let questions = &app.state.editor.questions;

    if questions.is_empty() {
        let message = Paragraph::new("No questions yet. Press 'n' to add one.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(message, area);
        return;
    }

    if area.height == 0 {
        return;
    }

    let bottom = area.y + area.height;
    let mut y = area.y;
    let mut last_drawn = app.state.scroll_offset;
    let mut clipped = false;

    for (index, question) in questions
        .iter()
        .enumerate()
        .skip(app.state.scroll_offset)
    {
        if y >= bottom {
            break;
        }
        // The last visible card may render clipped at the bottom
        let height = card_height(question).min(bottom - y);
        let card_area = Rect {
            x: area.x,
            y,
            width: area.width,
            height,
        };
        let is_selected = index == app.state.selected_index
            && matches!(app.state.focus, EditorFocus::Questions);
        draw_question_card(frame, card_area, question, is_selected);
        y += height;
        last_drawn = index;
        clipped = height < card_height(question);
    }

    // Overflow markers when questions are scrolled out of view
    if app.state.scroll_offset > 0 {
        draw_overflow_marker(frame, area, area.y, "^ more");
    }
    if clipped || last_drawn + 1 < questions.len() {
        draw_overflow_marker(frame, area, bottom - 1, "v more");
    }
}

/// Small right-pinned marker on the list edge
fn draw_overflow_marker(frame: &mut Frame, area: Rect, y: u16, label: &str) {
    let width = (label.len() as u16).min(area.width.saturating_sub(2));
    if width == 0 {
        return;
    }
    let marker_area = Rect {
        x: area.x + area.width.saturating_sub(width + 1),
        y,
        width,
        height: 1,
    };
    let marker = Paragraph::new(label).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(marker, marker_area);
}

/// Draw the submit button
fn draw_submit_button(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = matches!(app.state.focus, EditorFocus::Submit);

    let border_style = if is_focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let label_style = if is_focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let button = Paragraph::new(Span::styled("Submit", label_style))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        );
    frame.render_widget(button, area);
}
