//! UI module for rendering the TUI

mod editor;
mod layout;
mod preview;
mod question_card;
mod type_picker;

pub use editor::{HEADER_HEIGHT, SUBMIT_HEIGHT};
pub use question_card::card_height;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Reserve the bottom line for the status bar
    let content_area = layout::create_layout(area);

    // Draw the editor screen
    editor::draw_editor(frame, content_area, app);

    // Draw status bar
    layout::draw_status_bar(frame, app);

    // Overlays render on top of everything else
    if app.state.editor.type_picker.is_open() {
        type_picker::render_type_picker(frame, app);
    }
    if app.state.preview_open {
        preview::render_preview_notice(frame);
    }
}
