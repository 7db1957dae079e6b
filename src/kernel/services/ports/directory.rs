//! Directory port: sign-in, program registry and authorization lists served
//! by the remote business services.

use std::fmt;

use crate::models::{Principal, ProgramLink, ProgramRecord};

#[derive(Debug, Clone)]
pub struct SignIn {
    pub principal: Principal,
    pub token: String,
}

pub trait Directory: Send + Sync {
    fn sign_in(&self, user_id: &str, password: &str) -> Result<Option<SignIn>, DirectoryError>;
    fn company_programs(&self, company_id: &str) -> Result<Vec<ProgramLink>, DirectoryError>;
    fn user_programs(&self, user_id: &str) -> Result<Vec<ProgramLink>, DirectoryError>;
    fn programs(&self) -> Result<Vec<ProgramRecord>, DirectoryError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    Unavailable(String),
    Malformed(String),
}

impl fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectoryError::Unavailable(msg) => write!(f, "directory unavailable: {}", msg),
            DirectoryError::Malformed(msg) => write!(f, "malformed directory data: {}", msg),
        }
    }
}

impl std::error::Error for DirectoryError {}
