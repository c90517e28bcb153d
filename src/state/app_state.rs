//! Application state definitions

use super::forms::{ContactForm, FieldKey};
use serde::{Deserialize, Serialize};

/// Light or dark colour scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }
}

/// Which control on the contact form has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(FieldKey),
    SubmitButton,
}

impl Default for Focus {
    fn default() -> Self {
        Focus::Field(FieldKey::Name)
    }
}

impl Focus {
    /// Focus order: name, email, message, submit button
    const ORDER: [Focus; 4] = [
        Focus::Field(FieldKey::Name),
        Focus::Field(FieldKey::Email),
        Focus::Field(FieldKey::Message),
        Focus::SubmitButton,
    ];

    fn index(&self) -> usize {
        Self::ORDER.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(&self) -> Self {
        let idx = self.index();
        if idx == 0 {
            Self::ORDER[Self::ORDER.len() - 1]
        } else {
            Self::ORDER[idx - 1]
        }
    }

    /// The field being edited, if focus is on a text input
    pub fn field(&self) -> Option<FieldKey> {
        match self {
            Focus::Field(key) => Some(*key),
            Focus::SubmitButton => None,
        }
    }
}

/// Everything the presentation layer reads when drawing a frame
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Contact form controller
    pub contact: ContactForm,
    /// Focused control
    pub focus: Focus,
    /// Active colour scheme
    pub theme: ThemeMode,
    /// Transient status bar message
    pub status_message: Option<String>,
    /// Name of the configured delivery backend
    pub delivery_name: &'static str,
}

impl AppState {
    pub fn new(theme: ThemeMode, delivery_name: &'static str) -> Self {
        Self {
            theme,
            delivery_name,
            ..Default::default()
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
    }
}
