use std::sync::atomic::Ordering;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::contact::ContactMessage,
    errors::AppError,
    repositories::memory::{MemoryContactRepo, Sequenced},
};

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn create_contact_message(&self, msg: &ContactMessage) -> Result<Uuid, AppError>;
    async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>, AppError>;
    async fn count_contact_messages(&self) -> Result<u64, AppError>;
}

impl MemoryContactRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContactRepository for MemoryContactRepo {
    async fn create_contact_message(&self, msg: &ContactMessage) -> Result<Uuid, AppError> {
        let seq = self.seq.fetch_add(1, Ordering::Relaxed);
        self.records.insert(msg.id, Sequenced {
            seq,
            record: msg.clone(),
        });
        Ok(msg.id)
    }

    async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>, AppError> {
        let mut entries: Vec<(u64, ContactMessage)> = self.records
            .iter()
            .map(|entry| (entry.value().seq, entry.value().record.clone()))
            .collect();

        // Newest first, matching the catalog's ordering policy.
        entries.sort_by(|a, b| (b.1.created_at, b.0).cmp(&(a.1.created_at, a.0)));

        Ok(entries.into_iter().map(|(_, msg)| msg).collect())
    }

    async fn count_contact_messages(&self) -> Result<u64, AppError> {
        Ok(self.records.len() as u64)
    }
}
