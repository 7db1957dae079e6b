use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
    Super,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
            Role::Super => "super",
        }
    }

    /// Super-admins skip authorization lookups entirely.
    pub fn bypasses_authorization(self) -> bool {
        matches!(self, Role::Super)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The signed-in identity. Built once at login and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Principal {
    pub id: CompactString,
    pub company_id: CompactString,
    pub role: Role,
}

impl Principal {
    pub fn new(id: &str, company_id: &str, role: Role) -> Self {
        Self {
            id: CompactString::new(id),
            company_id: CompactString::new(company_id),
            role,
        }
    }
}
