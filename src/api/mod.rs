use crate::core::traits::LeadError;
use crate::core::validation::ValidationErrors;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use log::error;
use serde::Serialize;
use thiserror::Error;

pub mod leads;

/// Routes served under the application root.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/leads", leads::router())
}

#[derive(Serialize, Debug)]
struct Health {
    status: &'static str,
}

async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    #[error(transparent)]
    Lead(#[from] LeadError),
}

#[derive(Serialize, Debug)]
struct ValidationBody<'a> {
    message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<&'a ValidationErrors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize, Debug)]
struct FailureBody {
    message: &'static str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InvalidBody(rejection) => {
                // Wrong content type and oversized bodies keep their own status;
                // anything unparseable is a plain validation failure.
                let status = rejection.status();
                let (status, message) = if status == StatusCode::UNSUPPORTED_MEDIA_TYPE
                    || status == StatusCode::PAYLOAD_TOO_LARGE
                {
                    (status, "Invalid request body")
                } else {
                    (StatusCode::BAD_REQUEST, "Validation error")
                };

                (
                    status,
                    Json(ValidationBody {
                        message,
                        errors: None,
                        error: Some(rejection.body_text()),
                    }),
                )
                    .into_response()
            }
            ApiError::Lead(LeadError::Validation(errors)) => (
                StatusCode::BAD_REQUEST,
                Json(ValidationBody {
                    message: "Validation error",
                    errors: Some(&errors),
                    error: None,
                }),
            )
                .into_response(),
            // Store details stay in the log, never in the response.
            ApiError::Lead(LeadError::Store(e)) => {
                error!("Error creating lead: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(FailureBody {
                        message: "Failed to submit lead information",
                    }),
                )
                    .into_response()
            }
        }
    }
}
