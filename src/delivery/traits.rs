//! Trait abstraction for message delivery to enable mocking in tests

use super::error::DeliveryError;
use crate::state::ContactMessage;
use async_trait::async_trait;
use std::time::Duration;

/// Sends a validated contact message somewhere the portfolio owner will see it
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageDelivery: Send + Sync {
    /// Deliver one message. Resolves once the backend has accepted or refused it.
    async fn deliver(&self, message: &ContactMessage) -> Result<(), DeliveryError>;

    /// Short backend name for logs and the status bar
    fn name(&self) -> &'static str;
}

/// Run a delivery bounded by `timeout`, mapping expiry to [`DeliveryError::Timeout`]
pub async fn deliver_with_timeout(
    delivery: &dyn MessageDelivery,
    message: &ContactMessage,
    timeout: Duration,
) -> Result<(), DeliveryError> {
    match tokio::time::timeout(timeout, delivery.deliver(message)).await {
        Ok(result) => result,
        Err(_) => Err(DeliveryError::Timeout(timeout)),
    }
}
