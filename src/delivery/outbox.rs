//! Outbox backend: appends each message as a JSON line to a local file

use super::{error::DeliveryError, traits::MessageDelivery};
use crate::state::ContactMessage;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

/// One line in the outbox file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutboxEntry {
    pub id: Uuid,
    pub sent_at: DateTime<Utc>,
    #[serde(flatten)]
    pub message: ContactMessage,
}

/// Durable local delivery; a separate process can drain the file
#[derive(Debug, Clone)]
pub struct OutboxDelivery {
    path: PathBuf,
}

impl OutboxDelivery {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl MessageDelivery for OutboxDelivery {
    async fn deliver(&self, message: &ContactMessage) -> Result<(), DeliveryError> {
        let entry = OutboxEntry {
            id: Uuid::new_v4(),
            sent_at: Utc::now(),
            message: message.clone(),
        };
        let mut line = serde_json::to_string(&entry)?;
        line.push('\n');

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;

        tracing::info!("Queued message {} in {}", entry.id, self.path.display());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "outbox"
    }
}
