//! 会话存储：tabs / active tab / auth record over a key-value slot.

use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::kernel::services::ports::{KeyValueStorage, StorageError};
use crate::kernel::workspace::{PersistedSession, PersistedTab};
use crate::models::{Principal, ProgramId};

pub const OPEN_TABS_KEY: &str = "openTabs";
pub const ACTIVE_TAB_KEY: &str = "activeTab";
pub const AUTH_KEY: &str = "auth";
/// Id of the principal whose workspace `openTabs` holds.
pub const TABS_OWNER_KEY: &str = "tabsOwner";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthRecord {
    pub user: Principal,
    pub token: String,
    /// Epoch milliseconds.
    pub expires_at: u64,
}

impl AuthRecord {
    pub fn is_expired(&self, now_ms: u64) -> bool {
        now_ms >= self.expires_at
    }
}

pub fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

pub struct SessionStore {
    storage: Box<dyn KeyValueStorage>,
    auth_ttl: Duration,
}

impl SessionStore {
    pub fn new(storage: Box<dyn KeyValueStorage>, auth_ttl: Duration) -> Self {
        Self { storage, auth_ttl }
    }

    pub fn save_session(&mut self, session: &PersistedSession) -> Result<(), StorageError> {
        let tabs = serde_json::to_string(&session.tabs)?;
        self.storage.set(OPEN_TABS_KEY, tabs)?;
        self.storage
            .set(ACTIVE_TAB_KEY, session.active.as_str().to_string())
    }

    /// Missing or malformed data reads as "no previous session".
    pub fn load_session(&self) -> Option<PersistedSession> {
        let raw = match self.storage.get(OPEN_TABS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(error = %e, "session read failed");
                return None;
            }
        };
        let tabs: Vec<PersistedTab> = match serde_json::from_str(&raw) {
            Ok(tabs) => tabs,
            Err(e) => {
                tracing::warn!(error = %e, "ignoring malformed tab list");
                return None;
            }
        };
        let active = match self.storage.get(ACTIVE_TAB_KEY) {
            Ok(Some(active)) if !active.trim().is_empty() => ProgramId::new(active),
            Ok(_) => ProgramId::dashboard(),
            Err(e) => {
                tracing::warn!(error = %e, "active tab read failed");
                ProgramId::dashboard()
            }
        };
        Some(PersistedSession { tabs, active })
    }

    pub fn clear_session(&mut self) {
        self.remove_keys(&[OPEN_TABS_KEY, ACTIVE_TAB_KEY, TABS_OWNER_KEY, AUTH_KEY]);
    }

    /// Hands the stored workspace to `user_id`. Tabs saved by anyone else,
    /// or by nobody on record, are dropped first.
    pub fn claim_workspace(&mut self, user_id: &str) {
        let owner = match self.storage.get(TABS_OWNER_KEY) {
            Ok(owner) => owner,
            Err(e) => {
                tracing::warn!(error = %e, "workspace owner read failed");
                None
            }
        };
        if owner.as_deref() == Some(user_id) {
            return;
        }
        if let Some(previous) = owner {
            tracing::info!(%previous, user = user_id, "dropping workspace saved for another user");
        }
        self.remove_keys(&[OPEN_TABS_KEY, ACTIVE_TAB_KEY]);
        if let Err(e) = self.storage.set(TABS_OWNER_KEY, user_id.to_string()) {
            tracing::warn!(error = %e, "workspace owner not saved");
        }
    }

    fn remove_keys(&mut self, keys: &[&'static str]) {
        for &key in keys {
            if let Err(e) = self.storage.remove(key) {
                tracing::warn!(key, error = %e, "session clear failed");
            }
        }
    }

    pub fn save_auth(
        &mut self,
        user: Principal,
        token: String,
        now_ms: u64,
    ) -> Result<AuthRecord, StorageError> {
        let ttl_ms = self.auth_ttl.as_millis() as u64;
        let record = AuthRecord {
            user,
            token,
            expires_at: now_ms.saturating_add(ttl_ms),
        };
        self.storage.set(AUTH_KEY, serde_json::to_string(&record)?)?;
        Ok(record)
    }

    /// An expired or unreadable record is deleted and reads as logged-out.
    pub fn load_auth(&mut self, now_ms: u64) -> Option<AuthRecord> {
        let raw = match self.storage.get(AUTH_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(error = %e, "auth record read failed");
                return None;
            }
        };
        match serde_json::from_str::<AuthRecord>(&raw) {
            Ok(record) if !record.is_expired(now_ms) => Some(record),
            Ok(record) => {
                tracing::info!(user = %record.user.id, "auth record expired");
                self.discard_auth();
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "discarding malformed auth record");
                self.discard_auth();
                None
            }
        }
    }

    fn discard_auth(&mut self) {
        if let Err(e) = self.storage.remove(AUTH_KEY) {
            tracing::warn!(error = %e, "auth record could not be removed");
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/session.rs"]
mod tests;
