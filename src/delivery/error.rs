//! Delivery failure causes

use std::time::Duration;
use thiserror::Error;

/// Why a message could not be delivered.
///
/// The contact form collapses every variant into a single failed outcome;
/// the cause is only logged.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("delivery timed out after {0:?}")]
    Timeout(Duration),

    #[error("delivery rejected: {0}")]
    Rejected(String),

    #[error("outbox write failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode message: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("delivery task aborted: {0}")]
    Aborted(#[from] tokio::task::JoinError),
}
