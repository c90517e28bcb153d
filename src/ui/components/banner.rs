//! Inline status banner shown above the form

use crate::ui::theme::Palette;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Banner height in rows
pub const BANNER_HEIGHT: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

impl BannerKind {
    fn icon(&self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Error => "✗",
        }
    }
}

/// Render a bordered one-line banner in the success or error colour
pub fn render_banner(
    frame: &mut Frame,
    area: Rect,
    kind: BannerKind,
    message: &str,
    palette: Palette,
) {
    let color = match kind {
        BannerKind::Success => palette.success,
        BannerKind::Error => palette.error,
    };

    let line = Line::from(vec![
        Span::styled(
            format!("{} ", kind.icon()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(message, Style::default().fg(color)),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    frame.render_widget(
        Paragraph::new(line).wrap(Wrap { trim: true }).block(block),
        area,
    );
}
