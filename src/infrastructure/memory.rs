//! Process-lifetime record store

use crate::infrastructure::entities::{Lead, NewLead, NewUser, User};
use crate::infrastructure::traits::{RecordStore, StoreError};
use async_trait::async_trait;
use di::{inject, injectable};
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

struct Tables {
    leads: BTreeMap<i64, Lead>,
    users: BTreeMap<i64, User>,
    next_lead_id: i64,
    next_user_id: i64,
}

pub struct MemoryRecordStore {
    tables: Mutex<Tables>,
}

#[injectable(RecordStore)]
impl MemoryRecordStore {
    #[inject]
    pub fn new() -> MemoryRecordStore {
        MemoryRecordStore {
            tables: Mutex::new(Tables {
                leads: BTreeMap::new(),
                users: BTreeMap::new(),
                next_lead_id: 1,
                next_user_id: 1,
            }),
        }
    }
}

impl MemoryRecordStore {
    // Nothing inside the lock can leave the tables half-written, so a
    // poisoned lock still guards consistent data.
    fn tables(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MemoryRecordStore {
    fn default() -> Self {
        MemoryRecordStore::new()
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn create_lead(&self, lead: NewLead) -> Result<Lead, StoreError> {
        let mut tables = self.tables();
        let id = tables.next_lead_id;
        tables.next_lead_id += 1;

        let lead = lead.into_lead(id);
        tables.leads.insert(id, lead.clone());
        Ok(lead)
    }

    async fn get_lead(&self, id: i64) -> Result<Option<Lead>, StoreError> {
        Ok(self.tables().leads.get(&id).cloned())
    }

    async fn count_leads(&self) -> Result<u64, StoreError> {
        Ok(self.tables().leads.len() as u64)
    }

    async fn get_user(&self, id: i64) -> Result<Option<User>, StoreError> {
        Ok(self.tables().users.get(&id).cloned())
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        Ok(self
            .tables()
            .users
            .values()
            .find(|user| user.username == username)
            .cloned())
    }

    async fn create_user(&self, user: NewUser) -> Result<User, StoreError> {
        let mut tables = self.tables();
        if tables.users.values().any(|u| u.username == user.username) {
            return Err(StoreError::DuplicateUsername(user.username));
        }

        let id = tables.next_user_id;
        tables.next_user_id += 1;

        let user = User {
            id,
            username: user.username,
            password: user.password,
        };
        tables.users.insert(id, user.clone());
        Ok(user)
    }
}
