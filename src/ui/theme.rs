//! Colour palettes derived from the theme mode

use crate::state::ThemeMode;
use ratatui::style::Color;

/// Colours for one frame. Built from a [`ThemeMode`] and handed to every
/// draw function by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub accent: Color,
    pub text: Color,
    pub muted: Color,
    pub error: Color,
    pub success: Color,
    pub background: Color,
    pub status_bar: Color,
}

impl Palette {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self {
                accent: Color::Blue,
                text: Color::Black,
                muted: Color::Gray,
                error: Color::Red,
                success: Color::Green,
                background: Color::White,
                status_bar: Color::Gray,
            },
            ThemeMode::Dark => Self {
                accent: Color::Cyan,
                text: Color::White,
                muted: Color::DarkGray,
                error: Color::LightRed,
                success: Color::LightGreen,
                background: Color::Black,
                status_bar: Color::DarkGray,
            },
        }
    }
}
