//! Configuration handling for the TUI

use crate::state::ThemeMode;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Environment override for the delivery backend
const DELIVERY_ENV: &str = "FOLIO_DELIVERY";
/// Environment override for the outbox file
const OUTBOX_PATH_ENV: &str = "FOLIO_OUTBOX_PATH";

const DEFAULT_SIMULATED_DELAY_MS: u64 = 1500;
const DEFAULT_SUBMIT_TIMEOUT_MS: u64 = 10_000;

/// Which backend receives contact messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryKind {
    #[default]
    Simulated,
    Outbox,
}

impl DeliveryKind {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "simulated" => Some(Self::Simulated),
            "outbox" => Some(Self::Outbox),
            _ => None,
        }
    }
}

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FolioConfig {
    /// Colour scheme at startup
    pub theme_mode: Option<ThemeMode>,
    /// Delivery backend
    pub delivery: Option<DeliveryKind>,
    /// Latency of the simulated backend
    pub simulated_delay_ms: Option<u64>,
    /// Make the simulated backend fail every delivery
    pub simulate_failure: Option<bool>,
    /// Upper bound on a single delivery
    pub submit_timeout_ms: Option<u64>,
    /// Outbox file for the outbox backend
    pub outbox_path: Option<PathBuf>,
}

impl FolioConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("dev", "folio", "folio-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = Self::load_file()?;
        config.apply_env_overrides(
            std::env::var(DELIVERY_ENV).ok(),
            std::env::var(OUTBOX_PATH_ENV).ok(),
        );
        Ok(config)
    }

    fn load_file() -> Result<Self> {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: FolioConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    fn apply_env_overrides(&mut self, delivery: Option<String>, outbox_path: Option<String>) {
        if let Some(value) = delivery {
            match DeliveryKind::parse(&value) {
                Some(kind) => self.delivery = Some(kind),
                None => tracing::warn!("Ignoring unknown {DELIVERY_ENV} value: {value}"),
            }
        }
        if let Some(path) = outbox_path.filter(|p| !p.is_empty()) {
            self.outbox_path = Some(PathBuf::from(path));
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme_mode.unwrap_or_default()
    }

    pub fn delivery_kind(&self) -> DeliveryKind {
        self.delivery.unwrap_or_default()
    }

    pub fn simulated_delay(&self) -> Duration {
        Duration::from_millis(
            self.simulated_delay_ms
                .unwrap_or(DEFAULT_SIMULATED_DELAY_MS),
        )
    }

    pub fn submit_timeout(&self) -> Duration {
        Duration::from_millis(self.submit_timeout_ms.unwrap_or(DEFAULT_SUBMIT_TIMEOUT_MS))
    }

    /// Log file; the terminal is owned by the UI while the app runs
    pub fn log_path() -> PathBuf {
        Self::project_dirs()
            .map(|dirs| dirs.data_dir().join("folio.log"))
            .unwrap_or_else(|| PathBuf::from("folio.log"))
    }

    /// Configured outbox file, or `outbox.jsonl` in the data directory
    pub fn outbox_path(&self) -> PathBuf {
        self.outbox_path.clone().unwrap_or_else(|| {
            Self::project_dirs()
                .map(|dirs| dirs.data_dir().join("outbox.jsonl"))
                .unwrap_or_else(|| PathBuf::from("outbox.jsonl"))
        })
    }
}
