//! Contact form rendering

use super::field_renderer::{draw_field, draw_help_text, FieldView};
use crate::shortcuts::{SUBMIT_SHORTCUT, THEME_SHORTCUT};
use crate::state::{AppState, FieldKey, Focus, SubmissionState};
use crate::ui::components::{
    render_banner, render_button, BannerKind, BANNER_HEIGHT, BUTTON_HEIGHT,
};
use crate::ui::theme::Palette;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders},
    Frame,
};

const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";
const FAILURE_MESSAGE: &str = "Something went wrong. Please try again later.";

/// Banner for the last finished attempt, if any
fn banner_for(submission: SubmissionState) -> Option<(BannerKind, &'static str)> {
    match submission {
        SubmissionState::Succeeded => Some((BannerKind::Success, SUCCESS_MESSAGE)),
        SubmissionState::Failed => Some((BannerKind::Error, FAILURE_MESSAGE)),
        SubmissionState::Idle | SubmissionState::Submitting => None,
    }
}

fn submit_label(submission: SubmissionState) -> &'static str {
    if submission.is_submitting() {
        "Sending..."
    } else {
        "Send Message"
    }
}

/// Draw the contact form: banner, three inputs, submit button and hints
pub fn draw_contact_form(frame: &mut Frame, area: Rect, state: &AppState, palette: Palette) {
    let form = &state.contact;
    let submission = form.submission();
    let banner = banner_for(submission);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(if banner.is_some() { BANNER_HEIGHT } else { 0 }),
            Constraint::Length(3),             // Name
            Constraint::Length(3),             // Email
            Constraint::Min(6),                // Message
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Length(1),             // Help text
        ])
        .margin(1)
        .split(area);

    let block = Block::default()
        .title(" Contact Me ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent));
    frame.render_widget(block, area);

    if let Some((kind, message)) = banner {
        render_banner(frame, chunks[0], kind, message, palette);
    }

    for (idx, key) in FieldKey::ALL.into_iter().enumerate() {
        draw_field(
            frame,
            chunks[idx + 1],
            FieldView {
                label: key.label(),
                value: form.fields().get(key),
                error: form.errors().get(key).map(|e| e.to_string()),
                is_active: state.focus == Focus::Field(key),
                is_multiline: key.is_multiline(),
            },
            palette,
        );
    }

    render_button(
        frame,
        chunks[4],
        submit_label(submission),
        state.focus == Focus::SubmitButton,
        !submission.is_submitting(),
        palette,
    );

    let enter_hint = match state.focus {
        Focus::Field(FieldKey::Message) => "newline",
        Focus::SubmitButton => "send",
        Focus::Field(_) => "next field",
    };
    draw_help_text(
        frame,
        chunks[5],
        &[
            ("Tab", "next field"),
            ("Enter", enter_hint),
            (SUBMIT_SHORTCUT, "send"),
            (THEME_SHORTCUT, "theme"),
        ],
        palette,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delivery::DeliveryError;
    use crate::state::ThemeMode;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(state: &AppState) -> String {
        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                draw_contact_form(
                    frame,
                    frame.area(),
                    state,
                    Palette::for_mode(state.theme),
                )
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn filled_state() -> AppState {
        let mut state = AppState::new(ThemeMode::Dark, "simulated");
        state.contact.update_field(FieldKey::Name, "Jane");
        state.contact.update_field(FieldKey::Email, "jane@x.com");
        state.contact.update_field(FieldKey::Message, "Hi");
        state
    }

    #[test]
    fn test_banner_only_after_finished_attempt() {
        assert!(banner_for(SubmissionState::Idle).is_none());
        assert!(banner_for(SubmissionState::Submitting).is_none());
        assert_eq!(
            banner_for(SubmissionState::Succeeded),
            Some((BannerKind::Success, SUCCESS_MESSAGE))
        );
        assert_eq!(
            banner_for(SubmissionState::Failed),
            Some((BannerKind::Error, FAILURE_MESSAGE))
        );
    }

    #[test]
    fn test_button_label() {
        assert_eq!(submit_label(SubmissionState::Idle), "Send Message");
        assert_eq!(submit_label(SubmissionState::Submitting), "Sending...");
        assert_eq!(submit_label(SubmissionState::Failed), "Send Message");
    }

    #[test]
    fn test_renders_labels_and_values() {
        let screen = render(&filled_state());
        assert!(screen.contains("Contact Me"));
        assert!(screen.contains("Name"));
        assert!(screen.contains("Jane"));
        assert!(screen.contains("jane@x.com"));
        assert!(screen.contains("Send Message"));
    }

    #[test]
    fn test_renders_validation_errors() {
        let mut state = AppState::default();
        state.contact.begin_submit();
        let screen = render(&state);
        assert!(screen.contains("Name is required"));
        assert!(screen.contains("Email is required"));
        assert!(screen.contains("Message is required"));
    }

    #[test]
    fn test_renders_sending_state() {
        let mut state = filled_state();
        state.contact.begin_submit();
        let screen = render(&state);
        assert!(screen.contains("Sending..."));
        assert!(!screen.contains("Send Message"));
    }

    #[test]
    fn test_renders_failure_banner_and_keeps_values() {
        let mut state = filled_state();
        state.contact.begin_submit();
        state
            .contact
            .settle(Err(DeliveryError::Rejected("down".to_string())));
        let screen = render(&state);
        assert!(screen.contains(FAILURE_MESSAGE));
        assert!(screen.contains("jane@x.com"));
    }

    #[test]
    fn test_renders_success_banner() {
        let mut state = filled_state();
        state.contact.begin_submit();
        state.contact.settle(Ok(()));
        let screen = render(&state);
        assert!(screen.contains(SUCCESS_MESSAGE));
        assert!(!screen.contains("jane@x.com"));
    }
}
