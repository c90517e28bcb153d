//! Application state and core logic

use crate::config::FolioConfig;
use crate::delivery::{self, deliver_with_timeout, DeliveryError, MessageDelivery};
use crate::state::{AppState, FieldKey, Focus, SubmissionState, SubmitStart};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Window for the second Ctrl+C of a double-tap quit
const DOUBLE_TAP_WINDOW: Duration = Duration::from_millis(500);

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Backend that receives contact messages
    delivery: Arc<dyn MessageDelivery>,
    /// Upper bound on one delivery
    submit_timeout: Duration,
    /// Loaded configuration, saved back when the theme changes
    config: FolioConfig,
    /// Delivery results from spawned submission tasks
    results_tx: mpsc::UnboundedSender<Result<(), DeliveryError>>,
    results_rx: mpsc::UnboundedReceiver<Result<(), DeliveryError>>,
    /// Whether the app should quit
    quit: bool,
    /// Timestamp of last Ctrl+C press for double-tap quit
    pub last_ctrl_c: Option<Instant>,
}

impl App {
    /// Create a new App from configuration
    pub fn new(config: FolioConfig) -> Self {
        let delivery = delivery::from_config(&config);
        Self::with_delivery(config, delivery)
    }

    /// Create an App with an explicit delivery backend
    pub fn with_delivery(config: FolioConfig, delivery: Arc<dyn MessageDelivery>) -> Self {
        let (results_tx, results_rx) = mpsc::unbounded_channel();
        let state = AppState::new(config.theme(), delivery.name());
        tracing::info!("Using {} delivery backend", delivery.name());

        Self {
            state,
            delivery,
            submit_timeout: config.submit_timeout(),
            config,
            results_tx,
            results_rx,
            quit: false,
            last_ctrl_c: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // AltGr arrives as Ctrl+Alt on some platforms and is plain text input
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL)
            && !key.modifiers.contains(KeyModifiers::ALT);

        if ctrl && key.code == KeyCode::Char('c') {
            let now = Instant::now();
            if self
                .last_ctrl_c
                .is_some_and(|prev| now.duration_since(prev) <= DOUBLE_TAP_WINDOW)
            {
                self.quit = true;
            } else {
                self.last_ctrl_c = Some(now);
                self.state.status_message = Some("Press Ctrl+C again to quit".to_string());
            }
            return Ok(());
        }
        self.last_ctrl_c = None;

        // Clear any status messages on key press
        self.state.status_message = None;

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Char('s') if ctrl => self.submit(),
            KeyCode::Char('t') if ctrl => self.toggle_theme(),
            KeyCode::Tab => self.state.focus_next(),
            KeyCode::BackTab => self.state.focus_prev(),
            KeyCode::Enter => match self.state.focus {
                Focus::SubmitButton => self.submit(),
                Focus::Field(FieldKey::Message) => {
                    self.state.contact.push_char(FieldKey::Message, '\n')
                }
                Focus::Field(_) => self.state.focus_next(),
            },
            KeyCode::Char(c) if !ctrl => {
                if let Some(field) = self.state.focus.field() {
                    self.state.contact.push_char(field, c);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.state.focus.field() {
                    self.state.contact.pop_char(field);
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Start a submission if the form is valid and nothing is in flight.
    ///
    /// Delivery runs on a spawned task with a snapshot of the fields; its
    /// result comes back through [`App::poll_delivery`]. A task that panics
    /// is reported as [`DeliveryError::Aborted`].
    pub fn submit(&mut self) {
        match self.state.contact.begin_submit() {
            SubmitStart::Started(snapshot) => {
                let delivery = Arc::clone(&self.delivery);
                let tx = self.results_tx.clone();
                let timeout = self.submit_timeout;
                tokio::spawn(async move {
                    // A panicking backend must still settle the attempt
                    let attempt = tokio::spawn(async move {
                        deliver_with_timeout(delivery.as_ref(), &snapshot, timeout).await
                    });
                    let result = attempt.await.unwrap_or_else(|e| Err(DeliveryError::from(e)));
                    // Receiver only goes away when the app shuts down
                    let _ = tx.send(result);
                });
            }
            SubmitStart::Invalid => {
                self.focus_first_error();
            }
            SubmitStart::InFlight => {
                self.state.status_message = Some("Already sending".to_string());
            }
        }
    }

    /// Apply any finished deliveries. Returns true if state changed.
    pub fn poll_delivery(&mut self) -> bool {
        let mut changed = false;
        while let Ok(result) = self.results_rx.try_recv() {
            self.state.contact.settle(result);
            changed = true;
        }
        changed
    }

    /// Wait for the in-flight delivery (if any) to settle
    pub async fn wait_for_delivery(&mut self) {
        if !self.state.contact.submission().is_submitting() {
            return;
        }
        if let Some(result) = self.results_rx.recv().await {
            self.state.contact.settle(result);
        }
    }

    /// Whether the event loop should poll quickly
    pub fn is_busy(&self) -> bool {
        matches!(self.state.contact.submission(), SubmissionState::Submitting)
    }

    fn focus_first_error(&mut self) {
        let errors = *self.state.contact.errors();
        if let Some(key) = FieldKey::ALL
            .into_iter()
            .find(|key| errors.get(*key).is_some())
        {
            self.state.focus = Focus::Field(key);
        }
    }

    fn toggle_theme(&mut self) {
        self.state.toggle_theme();
        self.config.theme_mode = Some(self.state.theme);
        if let Err(e) = self.config.save() {
            tracing::warn!("Failed to save theme preference: {e}");
            self.state.status_message = Some("Could not save theme".to_string());
        }
    }
}
