//! Stored records

use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Lead {
    pub id: i64,
    pub name: String,
    pub whatsapp: String,
    pub store_name: String,
    pub email: Option<String>,
    pub city: Option<String>,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Lead {
    /// `created_at` as ISO-8601 in UTC, e.g. `2025-03-01T12:30:00.000Z`.
    pub fn created_at_iso(&self) -> String {
        self.created_at.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// A validated lead that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLead {
    pub name: String,
    pub whatsapp: String,
    pub store_name: String,
    pub email: Option<String>,
    pub city: Option<String>,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl NewLead {
    pub(crate) fn into_lead(self, id: i64) -> Lead {
        Lead {
            id,
            name: self.name,
            whatsapp: self.whatsapp,
            store_name: self.store_name,
            email: self.email,
            city: self.city,
            message: self.message,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}
