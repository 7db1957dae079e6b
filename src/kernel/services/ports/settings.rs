use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use super::config::{ConsoleConfig, DEFAULT_DASHBOARD_TITLE};

/// On-disk settings. Every field is optional so a partial file still loads.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolve_timeout_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_ttl_hours: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dashboard_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory_path: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            resolve_timeout_ms: Some(5_000),
            auth_ttl_hours: Some(24),
            dashboard_title: Some(DEFAULT_DASHBOARD_TITLE.to_string()),
            directory_path: None,
            session_path: None,
        }
    }
}

impl Settings {
    pub fn to_config(&self) -> ConsoleConfig {
        let mut config = ConsoleConfig::default();
        if let Some(ms) = self.resolve_timeout_ms.filter(|ms| *ms > 0) {
            config.resolve_timeout = Duration::from_millis(ms);
        }
        if let Some(hours) = self.auth_ttl_hours.filter(|h| *h > 0) {
            config.auth_ttl = Duration::from_secs(hours.saturating_mul(60 * 60));
        }
        if let Some(title) = self
            .dashboard_title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
        {
            config.dashboard_title = title.to_string();
        }
        config
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/settings.rs"]
mod tests;
