//! 程序（画面）标识与目录记录

use compact_str::CompactString;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

pub const DASHBOARD_ID: &str = "dashboard";

/// Opaque program identifier. Directory data writes ids either as strings or
/// as numbers; both deserialize to the same textual id.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ProgramId(CompactString);

impl ProgramId {
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(CompactString::new(raw.as_ref().trim()))
    }

    pub fn dashboard() -> Self {
        Self(CompactString::const_new(DASHBOARD_ID))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_dashboard(&self) -> bool {
        self.0 == DASHBOARD_ID
    }
}

impl fmt::Display for ProgramId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ProgramId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<u64> for ProgramId {
    fn from(value: u64) -> Self {
        Self(compact_str::format_compact!("{value}"))
    }
}

impl<'de> Deserialize<'de> for ProgramId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(CompactString),
            Number(u64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(text) => ProgramId::new(text),
            Raw::Number(n) => ProgramId::from(n),
        })
    }
}

/// Program registry entry as served by the program service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramRecord {
    pub id: ProgramId,
    pub name: String,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// One row of a company/user authorization list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramLink {
    pub program_id: ProgramId,
}

impl ProgramLink {
    pub fn new(program_id: impl Into<ProgramId>) -> Self {
        Self {
            program_id: program_id.into(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/program.rs"]
mod tests;
