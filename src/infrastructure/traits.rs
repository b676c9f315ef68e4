//! Infrastructure traits, used for DI on higher levels

use crate::infrastructure::entities;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("username `{0}` is already taken")]
    DuplicateUsername(String),
}

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("webhook request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("webhook responded with status {0}")]
    Status(u16),
}

/// Keyed storage for leads and users. Every record gets an id from a counter
/// kept per record type; ids only grow and are never handed out twice.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn create_lead(&self, lead: entities::NewLead) -> Result<entities::Lead, StoreError>;

    async fn get_lead(&self, id: i64) -> Result<Option<entities::Lead>, StoreError>;

    async fn count_leads(&self) -> Result<u64, StoreError>;

    async fn get_user(&self, id: i64) -> Result<Option<entities::User>, StoreError>;

    async fn get_user_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entities::User>, StoreError>;

    /// Returns `StoreError::DuplicateUsername` if the username is taken.
    async fn create_user(&self, user: entities::NewUser) -> Result<entities::User, StoreError>;
}

/// Outbound relay of accepted leads to the notification sink.
#[async_trait]
pub trait LeadNotifier: Send + Sync {
    /// Sends a single summary of `lead`. There is no retry.
    async fn notify(&self, lead: &entities::Lead) -> Result<(), NotifyError>;
}
