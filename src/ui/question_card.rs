//! Question card rendering

use crate::state::{Question, QuestionKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by the kind-specific answer affordance
fn affordance_height(question: &Question) -> u16 {
    match question.kind {
        QuestionKind::Short => 3,
        QuestionKind::Long => 4,
        QuestionKind::Multiple => question.options.len() as u16,
    }
}

/// Total card height including borders, the kind row and the footer
pub fn card_height(question: &Question) -> u16 {
    4 + affordance_height(question)
}

/// Draw one question card
pub fn draw_question_card(frame: &mut Frame, area: Rect, question: &Question, is_selected: bool) {
    // Card styling based on selection
    let border_style = if is_selected {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut title_spans = vec![Span::styled(
        format!(" {} ", question.title),
        if is_selected {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        },
    )];
    if question.required {
        title_spans.push(Span::styled("* ", Style::default().fg(Color::Red)));
    }

    // Draw card border with the title on it
    let block = Block::default()
        .title(Line::from(title_spans))
        .borders(Borders::ALL)
        .border_style(border_style);
    frame.render_widget(block, area);

    // Inner area for content (inside borders)
    let inner = Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    };

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    // Kind row, the target of the type picker
    let kind_style = if is_selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let kind_row = Paragraph::new(Line::from(Span::styled(
        format!("[ {} ▾ ]", question.kind.label()),
        kind_style,
    )));
    frame.render_widget(kind_row, Rect { height: 1, ..inner });

    // Kind-specific answer affordance, display only
    let affordance_area = Rect {
        x: inner.x,
        y: inner.y + 1,
        width: inner.width,
        height: affordance_height(question).min(inner.height.saturating_sub(1)),
    };
    if affordance_area.height > 0 {
        match question.kind {
            QuestionKind::Short => draw_answer_box(frame, affordance_area, "Short answer"),
            QuestionKind::Long => draw_answer_box(frame, affordance_area, "Long answer"),
            QuestionKind::Multiple => draw_option_rows(frame, affordance_area, &question.options),
        }
    }

    // Required footer
    let footer_y = inner.y + 1 + affordance_height(question);
    if footer_y < inner.y + inner.height {
        let (marker, style) = if question.required {
            ("● required", Style::default().fg(Color::Green))
        } else {
            ("○ required", Style::default().fg(Color::DarkGray))
        };
        frame.render_widget(
            Paragraph::new(Span::styled(marker, style)),
            Rect {
                x: inner.x,
                y: footer_y,
                width: inner.width,
                height: 1,
            },
        );
    }
}

/// Bordered placeholder box standing in for the answer entry field
fn draw_answer_box(frame: &mut Frame, area: Rect, placeholder: &str) {
    let input = Paragraph::new(Span::styled(
        placeholder.to_string(),
        Style::default().fg(Color::DarkGray),
    ))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(input, area);
}

/// One marker row per choice label
fn draw_option_rows(frame: &mut Frame, area: Rect, options: &[String]) {
    let lines: Vec<Line> = options
        .iter()
        .map(|option| {
            Line::from(vec![
                Span::styled("○ ", Style::default().fg(Color::DarkGray)),
                Span::raw(option.clone()),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}
