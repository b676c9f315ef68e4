//! SQLite-backed record store

use crate::infrastructure::database::DatabaseConnection;
use crate::infrastructure::entities::{Lead, NewLead, NewUser, User};
use crate::infrastructure::traits::{RecordStore, StoreError};
use async_trait::async_trait;
use di::{Ref, inject, injectable};
use log::error;

pub struct SqliteRecordStore {
    connection: Ref<DatabaseConnection>,
}

#[injectable(RecordStore)]
impl SqliteRecordStore {
    #[inject]
    pub fn new(connection: Ref<DatabaseConnection>) -> SqliteRecordStore {
        SqliteRecordStore { connection }
    }
}

fn log_error(e: sqlx::Error) -> StoreError {
    error!("{e}");
    StoreError::Database(e)
}

#[async_trait]
impl RecordStore for SqliteRecordStore {
    async fn create_lead(&self, lead: NewLead) -> Result<Lead, StoreError> {
        sqlx::query_as(
            "INSERT INTO leads (name, whatsapp, store_name, email, city, message, created_at) VALUES (?, ?, ?, ?, ?, ?, ?) RETURNING *",
        )
        .bind(lead.name)
        .bind(lead.whatsapp)
        .bind(lead.store_name)
        .bind(lead.email)
        .bind(lead.city)
        .bind(lead.message)
        .bind(lead.created_at)
        .fetch_one(&**self.connection)
        .await
        .map_err(log_error)
    }

    async fn get_lead(&self, id: i64) -> Result<Option<Lead>, StoreError> {
        sqlx::query_as("SELECT * FROM leads WHERE id = ?")
            .bind(id)
            .fetch_optional(&**self.connection)
            .await
            .map_err(log_error)
    }

    async fn count_leads(&self) -> Result<u64, StoreError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM leads")
            .fetch_one(&**self.connection)
            .await
            .map_err(log_error)?;

        Ok(count.max(0) as u64)
    }

    async fn get_user(&self, id: i64) -> Result<Option<User>, StoreError> {
        sqlx::query_as("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&**self.connection)
            .await
            .map_err(log_error)
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        sqlx::query_as("SELECT * FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(&**self.connection)
            .await
            .map_err(log_error)
    }

    async fn create_user(&self, user: NewUser) -> Result<User, StoreError> {
        let result = sqlx::query_as(
            "INSERT INTO users (username, password) VALUES (?, ?) RETURNING *",
        )
        .bind(&user.username)
        .bind(user.password)
        .fetch_one(&**self.connection)
        .await;

        match result {
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(StoreError::DuplicateUsername(user.username))
            }
            other => other.map_err(log_error),
        }
    }
}
