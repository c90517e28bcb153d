//! Message delivery backends for the contact form

mod error;
mod outbox;
mod simulated;
mod traits;

pub use error::DeliveryError;
pub use outbox::OutboxDelivery;
pub use simulated::SimulatedDelivery;
pub use traits::{deliver_with_timeout, MessageDelivery};

#[cfg(test)]
pub use traits::MockMessageDelivery;

use crate::config::{DeliveryKind, FolioConfig};
use std::sync::Arc;

/// Build the backend selected by configuration
pub fn from_config(config: &FolioConfig) -> Arc<dyn MessageDelivery> {
    match config.delivery_kind() {
        DeliveryKind::Simulated => Arc::new(SimulatedDelivery::new(
            config.simulated_delay(),
            config.simulate_failure.unwrap_or(false),
        )),
        DeliveryKind::Outbox => {
            let outbox = OutboxDelivery::new(config.outbox_path());
            tracing::info!("Queueing messages in {}", outbox.path().display());
            Arc::new(outbox)
        }
    }
}
