use std::time::Duration;

pub const DEFAULT_DASHBOARD_TITLE: &str = "대시보드";

#[derive(Clone, Debug)]
pub struct ConsoleConfig {
    pub resolve_timeout: Duration,
    pub auth_ttl: Duration,
    pub dashboard_title: String,
    pub settle_timeout: Duration,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            resolve_timeout: Duration::from_secs(5),
            auth_ttl: Duration::from_secs(24 * 60 * 60),
            dashboard_title: DEFAULT_DASHBOARD_TITLE.to_string(),
            settle_timeout: Duration::from_secs(10),
        }
    }
}
