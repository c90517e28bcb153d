//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
pub mod theme;

use crate::state::AppState;
use ratatui::{style::Style, widgets::Block, Frame};
use theme::Palette;

/// Main draw function
pub fn draw(frame: &mut Frame, state: &AppState) {
    let palette = Palette::for_mode(state.theme);
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
        area,
    );

    let (header_area, main_area, status_area) = layout::create_layout(area);

    layout::draw_header(frame, header_area, state, palette);
    forms::draw_contact_form(frame, main_area, state, palette);
    layout::draw_status_bar(frame, status_area, state, palette);
}
