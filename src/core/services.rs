//! Implementations for the service the app needs.
//!

use crate::core::traits::{LeadError, LeadService};
use crate::core::validation::{LeadSubmission, validate_lead};
use crate::infrastructure::entities::{Lead, NewLead};
use crate::infrastructure::traits::{LeadNotifier, RecordStore};
use async_trait::async_trait;
use chrono::Utc;
use di::{Ref, injectable};
use log::{debug, info, warn};

#[injectable(LeadService)]
pub struct MyLeadService {
    store: Ref<dyn RecordStore>,
    notifier: Ref<dyn LeadNotifier>,
}

#[async_trait]
impl LeadService for MyLeadService {
    async fn submit_lead(&self, submission: LeadSubmission) -> Result<Lead, LeadError> {
        let valid = validate_lead(&submission).inspect_err(|errors| {
            debug!("rejected lead submission: {errors}");
        })?;

        let lead = self
            .store
            .create_lead(NewLead {
                name: valid.name,
                whatsapp: valid.whatsapp,
                store_name: valid.store_name,
                email: valid.email,
                city: valid.city,
                message: valid.message,
                created_at: Utc::now(),
            })
            .await?;

        info!("lead {} accepted", lead.id);

        if let Err(e) = self.notifier.notify(&lead).await {
            warn!("notification for lead {} failed: {e}", lead.id);
        }

        Ok(lead)
    }
}
