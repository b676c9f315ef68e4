//! Lead intake API for the agency landing page - Library exports for testing

pub mod api;
pub mod core;
pub mod infrastructure;
pub mod settings;

use crate::core::services::MyLeadService;
use crate::infrastructure::database::DatabaseConnection;
use crate::infrastructure::memory::MemoryRecordStore;
use crate::infrastructure::repositories::SqliteRecordStore;
use crate::infrastructure::webhook::{WebhookNotifier, build_client};
use crate::settings::Settings;
use anyhow::anyhow;
use di::{Injectable, Ref, ServiceCollection, ServiceProvider, singleton_as_self};

/// Registers every component for the given settings. The record store is a
/// singleton, so all request scopes of one provider share the same tables.
pub fn build_provider(settings: Settings) -> anyhow::Result<ServiceProvider> {
    let use_database = settings.database_url.is_some();
    let client = build_client(settings.webhook_timeout)?;

    let mut services = ServiceCollection::new();
    services
        .add(singleton_as_self::<Settings>().from(move |_| Ref::new(settings.clone())))
        .add(singleton_as_self::<reqwest::Client>().from(move |_| Ref::new(client.clone())))
        .add(WebhookNotifier::singleton())
        .add(MyLeadService::scoped());

    if use_database {
        services
            .add(DatabaseConnection::singleton())
            .add(SqliteRecordStore::singleton());
    } else {
        services.add(MemoryRecordStore::singleton());
    }

    services
        .build_provider()
        .map_err(|e| anyhow!("invalid service configuration: {e:?}"))
}
