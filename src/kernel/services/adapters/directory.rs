//! 目录服务适配器
//!
//! `FileDirectory` re-reads its JSON file on every call so edits show up
//! without a restart. `StaticDirectory` serves the same data from memory.

use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

use crate::kernel::services::ports::{Directory, DirectoryError, SignIn};
use crate::models::{Principal, ProgramLink, ProgramRecord, Role};

use super::session::now_ms;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryUser {
    #[serde(flatten)]
    pub principal: Principal,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryData {
    #[serde(default)]
    pub users: Vec<DirectoryUser>,
    #[serde(default)]
    pub programs: Vec<ProgramRecord>,
    #[serde(default)]
    pub company_programs: BTreeMap<String, Vec<ProgramLink>>,
    #[serde(default)]
    pub user_programs: BTreeMap<String, Vec<ProgramLink>>,
}

impl DirectoryData {
    /// First-run data: one account per role and the full program table.
    pub fn sample() -> Self {
        let program = |id: u64, name: &str, module: &str| ProgramRecord {
            id: id.into(),
            name: name.to_string(),
            path: format!("pages/{module}.jsx"),
            description: None,
            created_at: None,
            updated_at: None,
        };
        let links = |ids: &[u64]| -> Vec<ProgramLink> {
            ids.iter().map(|id| ProgramLink::new(*id)).collect()
        };
        let user = |id: &str, role: Role| DirectoryUser {
            principal: Principal::new(id, "C001", role),
            password: id.to_string(),
        };

        Self {
            users: vec![
                user("super", Role::Super),
                user("admin", Role::Admin),
                user("user", Role::User),
            ],
            programs: vec![
                program(1, "회사관리", "CompanyManagement"),
                program(2, "품목관리", "ItemManagement"),
                program(3, "공통코드관리", "CommonCodeManagement"),
                program(4, "사용자관리", "UserManagement"),
                program(5, "프로그램관리", "ProgramManagement"),
                program(6, "수주등록", "OrderRegistration"),
                program(7, "수주현황", "OrderStatus"),
                program(8, "출고등록", "ShipmentRegistration"),
                program(9, "출고현황", "ShipmentStatus"),
                program(10, "메뉴관리", "MenuManagement"),
            ],
            company_programs: BTreeMap::from([(
                "C001".to_string(),
                links(&[1, 2, 3, 4, 6, 7, 8, 9]),
            )]),
            user_programs: BTreeMap::from([("user".to_string(), links(&[6, 7]))]),
        }
    }

    fn sign_in(&self, user_id: &str, password: &str) -> Option<SignIn> {
        let user = self
            .users
            .iter()
            .find(|u| u.principal.id == user_id && u.password == password)?;
        Some(SignIn {
            principal: user.principal.clone(),
            token: issue_token(user_id, now_ms()),
        })
    }

    fn company_programs(&self, company_id: &str) -> Vec<ProgramLink> {
        self.company_programs
            .get(company_id)
            .cloned()
            .unwrap_or_default()
    }

    fn user_programs(&self, user_id: &str) -> Vec<ProgramLink> {
        self.user_programs.get(user_id).cloned().unwrap_or_default()
    }
}

fn issue_token(user_id: &str, issued_at: u64) -> String {
    let mut hasher = DefaultHasher::new();
    user_id.hash(&mut hasher);
    issued_at.hash(&mut hasher);
    format!("{:016x}", hasher.finish())
}

#[derive(Debug, Clone)]
pub struct StaticDirectory {
    data: DirectoryData,
    unavailable: Option<String>,
}

impl StaticDirectory {
    pub fn new(data: DirectoryData) -> Self {
        Self {
            data,
            unavailable: None,
        }
    }

    /// Every call fails with `DirectoryError::Unavailable(reason)`.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            data: DirectoryData::default(),
            unavailable: Some(reason.into()),
        }
    }

    fn data(&self) -> Result<&DirectoryData, DirectoryError> {
        match &self.unavailable {
            Some(reason) => Err(DirectoryError::Unavailable(reason.clone())),
            None => Ok(&self.data),
        }
    }
}

impl Directory for StaticDirectory {
    fn sign_in(&self, user_id: &str, password: &str) -> Result<Option<SignIn>, DirectoryError> {
        Ok(self.data()?.sign_in(user_id, password))
    }

    fn company_programs(&self, company_id: &str) -> Result<Vec<ProgramLink>, DirectoryError> {
        Ok(self.data()?.company_programs(company_id))
    }

    fn user_programs(&self, user_id: &str) -> Result<Vec<ProgramLink>, DirectoryError> {
        Ok(self.data()?.user_programs(user_id))
    }

    fn programs(&self) -> Result<Vec<ProgramRecord>, DirectoryError> {
        Ok(self.data()?.programs.clone())
    }
}

#[derive(Debug, Clone)]
pub struct FileDirectory {
    path: PathBuf,
}

impl FileDirectory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<DirectoryData, DirectoryError> {
        let data = std::fs::read_to_string(&self.path)
            .map_err(|e| DirectoryError::Unavailable(format!("{}: {}", self.path.display(), e)))?;
        serde_json::from_str(&data).map_err(|e| DirectoryError::Malformed(e.to_string()))
    }
}

impl Directory for FileDirectory {
    fn sign_in(&self, user_id: &str, password: &str) -> Result<Option<SignIn>, DirectoryError> {
        Ok(self.read()?.sign_in(user_id, password))
    }

    fn company_programs(&self, company_id: &str) -> Result<Vec<ProgramLink>, DirectoryError> {
        Ok(self.read()?.company_programs(company_id))
    }

    fn user_programs(&self, user_id: &str) -> Result<Vec<ProgramLink>, DirectoryError> {
        Ok(self.read()?.user_programs(user_id))
    }

    fn programs(&self) -> Result<Vec<ProgramRecord>, DirectoryError> {
        Ok(self.read()?.programs)
    }
}

/// Writes `DirectoryData::sample()` to `path` unless something is already there.
pub fn ensure_directory_file(path: &Path) -> std::io::Result<()> {
    if path.exists() {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let content = serde_json::to_string_pretty(&DirectoryData::sample())
        .unwrap_or_else(|_| "{}".to_string());
    std::fs::write(path, content)
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/directory.rs"]
mod tests;
