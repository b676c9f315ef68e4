//! Lead intake endpoint

use crate::api::ApiError;
use crate::api::leads::schemas::LeadCreated;
use crate::core::traits::LeadService;
use crate::core::validation::LeadSubmission;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use di_axum::Inject;

pub fn router() -> Router {
    Router::new().route("/", post(create_lead))
}

async fn create_lead(
    Inject(lead_service): Inject<dyn LeadService>,
    payload: Result<Json<LeadSubmission>, JsonRejection>,
) -> Result<(StatusCode, Json<LeadCreated>), ApiError> {
    let Json(submission) = payload?;
    let lead = lead_service.submit_lead(submission).await?;

    Ok((
        StatusCode::CREATED,
        Json(LeadCreated {
            message: "Lead submitted successfully",
            lead: lead.into(),
        }),
    ))
}

pub mod schemas {
    use crate::infrastructure::entities;
    use serde::Serialize;

    #[derive(Serialize, Debug)]
    #[serde(rename_all = "camelCase")]
    pub struct Lead {
        pub id: i64,
        pub name: String,
        pub whatsapp: String,
        pub store_name: String,
        pub email: Option<String>,
        pub city: Option<String>,
        pub message: Option<String>,
        pub created_at: String,
    }

    impl From<entities::Lead> for Lead {
        fn from(lead: entities::Lead) -> Self {
            let created_at = lead.created_at_iso();
            Lead {
                id: lead.id,
                name: lead.name,
                whatsapp: lead.whatsapp,
                store_name: lead.store_name,
                email: lead.email,
                city: lead.city,
                message: lead.message,
                created_at,
            }
        }
    }

    #[derive(Serialize, Debug)]
    pub struct LeadCreated {
        pub message: &'static str,
        pub lead: Lead,
    }
}
