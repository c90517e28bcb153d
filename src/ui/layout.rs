//! Layout components (header, status bar)

use crate::shortcuts::{QUIT_HINT, THEME_SHORTCUT};
use crate::state::{AppState, SubmissionState};
use crate::ui::theme::Palette;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Widest the form gets; wider terminals center it
const MAX_FORM_WIDTH: u16 = 72;

/// Split the screen into header, main content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], centered_column(chunks[1], MAX_FORM_WIDTH), chunks[2])
}

/// Horizontally center a column no wider than `max_width`
fn centered_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

/// Draw the header line with the theme indicator
pub fn draw_header(frame: &mut Frame, area: Rect, state: &AppState, palette: Palette) {
    let title = Span::styled(
        " Portfolio · Contact ",
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    );
    let theme = Span::styled(
        format!("{} theme ({THEME_SHORTCUT}) ", state.theme.label()),
        Style::default().fg(palette.muted),
    );

    frame.render_widget(Paragraph::new(Line::from(title)), area);

    let theme_width = theme.width() as u16;
    let theme_area = Rect {
        x: area.x + area.width.saturating_sub(theme_width),
        width: theme_width.min(area.width),
        ..area
    };
    frame.render_widget(Paragraph::new(Line::from(theme)), theme_area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, state: &AppState, palette: Palette) {
    let mut spans = vec![];

    // Submission indicator
    let indicator = match state.contact.submission() {
        SubmissionState::Submitting => Span::styled(" ◌ ", Style::default().fg(palette.accent)),
        SubmissionState::Succeeded => Span::styled(" ● ", Style::default().fg(palette.success)),
        SubmissionState::Failed => Span::styled(" ● ", Style::default().fg(palette.error)),
        SubmissionState::Idle => Span::styled(" ○ ", Style::default().fg(palette.muted)),
    };
    spans.push(indicator);

    spans.push(Span::styled(
        format!("delivery: {}", state.delivery_name),
        Style::default().fg(palette.text),
    ));

    if let Some(msg) = &state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(palette.text)));
    }

    let status =
        Paragraph::new(Line::from(spans)).style(Style::default().bg(palette.status_bar));
    frame.render_widget(status, area);

    let quit_width = QUIT_HINT.len() as u16;
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_width),
        width: quit_width.min(area.width),
        ..area
    };
    let quit_widget = Paragraph::new(QUIT_HINT)
        .style(Style::default().bg(palette.status_bar).fg(palette.text));
    frame.render_widget(quit_widget, quit_area);
}
