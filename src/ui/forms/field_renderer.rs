//! Field rendering utilities for forms

use crate::ui::theme::Palette;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// What to draw for one text input
pub struct FieldView<'a> {
    pub label: &'a str,
    pub value: &'a str,
    /// Validation message shown as helper text under the input
    pub error: Option<String>,
    pub is_active: bool,
    pub is_multiline: bool,
}

/// Draw a bordered text input with its label, value, cursor and error text
pub fn draw_field(frame: &mut Frame, area: Rect, field: FieldView, palette: Palette) {
    let style = if field.is_active {
        Style::default().fg(palette.accent)
    } else {
        Style::default().fg(palette.text)
    };

    let border_style = if field.error.is_some() {
        Style::default().fg(palette.error)
    } else if field.is_active {
        Style::default().fg(palette.accent)
    } else {
        Style::default().fg(palette.muted)
    };

    let display_value = if field.value.is_empty() && !field.is_active {
        "(empty)"
    } else {
        field.value
    };
    let value_style = if field.value.is_empty() && !field.is_active {
        Style::default().fg(palette.muted)
    } else {
        style
    };

    let cursor = if field.is_active { "▌" } else { "" };
    let cursor_style = Style::default().fg(palette.accent);

    // Inner area minus one column kept free for the cursor
    let width = usize::from(area.width.saturating_sub(3)).max(1);
    let height = usize::from(area.height.saturating_sub(2));

    let content = if field.is_multiline {
        let rows = wrap_rows(display_value, width);
        let scroll = rows.len().saturating_sub(height);
        let mut lines: Vec<Line> = rows
            .into_iter()
            .map(|row| Line::from(Span::styled(row, value_style)))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans.push(Span::styled(cursor, cursor_style));
        }
        Paragraph::new(lines).scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0))
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(visible_tail(display_value, width), value_style),
            Span::styled(cursor, cursor_style),
        ]))
    };

    let mut block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);
    if let Some(error) = field.error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {error} "),
            Style::default().fg(palette.error),
        )));
    }

    frame.render_widget(content.block(block), area);
}

/// The last `width` characters of a single-line value, so typing stays in view
fn visible_tail(value: &str, width: usize) -> &str {
    let count = value.chars().count();
    if count <= width {
        return value;
    }
    match value.char_indices().nth(count - width) {
        Some((idx, _)) => &value[idx..],
        None => value,
    }
}

/// Split text into rows of at most `width` characters, breaking on newlines
fn wrap_rows(value: &str, width: usize) -> Vec<String> {
    let mut rows = Vec::new();
    for line in value.split('\n') {
        let chars: Vec<char> = line.chars().collect();
        if chars.is_empty() {
            rows.push(String::new());
            continue;
        }
        rows.extend(chars.chunks(width).map(|chunk| chunk.iter().collect()));
    }
    rows
}

/// Draw a single line of key hints
pub fn draw_help_text(frame: &mut Frame, area: Rect, hints: &[(&str, &str)], palette: Palette) {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, action) in hints {
        spans.push(Span::styled(*key, Style::default().fg(palette.accent)));
        spans.push(Span::styled(
            format!(": {action}  "),
            Style::default().fg(palette.muted),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
