//! Stand-in backend that waits and then reports an outcome

use super::{error::DeliveryError, traits::MessageDelivery};
use crate::state::ContactMessage;
use async_trait::async_trait;
use std::time::Duration;

/// Default stand-in latency
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

/// Pretends to send a message: sleeps for `delay`, then succeeds or fails
#[derive(Debug, Clone)]
pub struct SimulatedDelivery {
    delay: Duration,
    fail: bool,
}

impl SimulatedDelivery {
    pub fn new(delay: Duration, fail: bool) -> Self {
        Self { delay, fail }
    }
}

impl Default for SimulatedDelivery {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY, false)
    }
}

#[async_trait]
impl MessageDelivery for SimulatedDelivery {
    async fn deliver(&self, message: &ContactMessage) -> Result<(), DeliveryError> {
        tracing::debug!(
            "Simulating delivery for {} ({} chars)",
            message.email,
            message.message.len()
        );
        tokio::time::sleep(self.delay).await;

        if self.fail {
            return Err(DeliveryError::Rejected("simulated failure".to_string()));
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "simulated"
    }
}
