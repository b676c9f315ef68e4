//! Chat webhook notifications for accepted leads

use crate::infrastructure::entities::Lead;
use crate::infrastructure::traits::{LeadNotifier, NotifyError};
use crate::settings::Settings;
use async_trait::async_trait;
use di::{Ref, inject, injectable};
use log::{debug, info};
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

pub const NOT_PROVIDED: &str = "Não informado";

const SENDER_NAME: &str = "Lead Intake";
const EMBED_TITLE: &str = "New lead received";
const EMBED_COLOR: u32 = 0xF7CB15;

#[derive(Serialize, Debug)]
pub struct WebhookMessage {
    pub username: String,
    pub embeds: Vec<Embed>,
}

#[derive(Serialize, Debug)]
pub struct Embed {
    pub title: String,
    pub color: u32,
    pub fields: Vec<EmbedField>,
    pub timestamp: String,
}

#[derive(Serialize, Debug)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl EmbedField {
    fn new(name: &str, value: &str, inline: bool) -> Self {
        EmbedField {
            name: name.to_owned(),
            value: value.to_owned(),
            inline,
        }
    }
}

/// Formats one embed per lead, one field per attribute. Missing optional
/// values are shown as [`NOT_PROVIDED`] instead of being dropped.
pub fn lead_message(lead: &Lead) -> WebhookMessage {
    let optional = |value: &Option<String>| value.as_deref().unwrap_or(NOT_PROVIDED).to_owned();

    let fields = vec![
        EmbedField::new("Name", &lead.name, true),
        EmbedField::new("WhatsApp", &lead.whatsapp, true),
        EmbedField::new("Store Name", &lead.store_name, true),
        EmbedField::new("Email", &optional(&lead.email), true),
        EmbedField::new("City", &optional(&lead.city), true),
        EmbedField::new("Message", &optional(&lead.message), false),
        EmbedField::new(
            "Date",
            &lead.created_at.format("%d/%m/%Y %H:%M:%S UTC").to_string(),
            false,
        ),
    ];

    WebhookMessage {
        username: SENDER_NAME.to_owned(),
        embeds: vec![Embed {
            title: EMBED_TITLE.to_owned(),
            color: EMBED_COLOR,
            fields,
            timestamp: lead.created_at_iso(),
        }],
    }
}

/// HTTP client for the webhook. Every call is bounded by `timeout`.
pub fn build_client(timeout: Duration) -> reqwest::Result<Client> {
    Client::builder().timeout(timeout).build()
}

pub struct WebhookNotifier {
    client: Client,
    url: Option<String>,
}

#[injectable(LeadNotifier)]
impl WebhookNotifier {
    #[inject]
    pub fn create(settings: Ref<Settings>, client: Ref<Client>) -> WebhookNotifier {
        if settings.webhook_url.is_none() {
            info!("LEAD_WEBHOOK_URL is not set, lead notifications are disabled");
        }

        WebhookNotifier {
            client: Client::clone(&client),
            url: settings.webhook_url.clone(),
        }
    }
}

#[async_trait]
impl LeadNotifier for WebhookNotifier {
    async fn notify(&self, lead: &Lead) -> Result<(), NotifyError> {
        let Some(url) = &self.url else {
            debug!("skipping notification for lead {}", lead.id);
            return Ok(());
        };

        let response = self
            .client
            .post(url)
            .json(&lead_message(lead))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::Status(status.as_u16()));
        }

        debug!("notification sent for lead {}", lead.id);
        Ok(())
    }
}
