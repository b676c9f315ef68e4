//! DI "Interfaces"

use crate::core::validation::{LeadSubmission, ValidationErrors};
use crate::infrastructure::entities;
use crate::infrastructure::traits::StoreError;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LeadError {
    #[error("invalid lead: {0}")]
    Validation(#[from] ValidationErrors),

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[async_trait]
pub trait LeadService: Send + Sync {
    /// Validates, stores and relays one lead submission.
    ///
    /// Returns `Err(LeadError::Validation)` without touching the store when the
    /// submission is invalid. A failed notification is logged and does not
    /// turn into an error, since the lead has already been stored by then.
    async fn submit_lead(&self, submission: LeadSubmission) -> Result<entities::Lead, LeadError>;
}
