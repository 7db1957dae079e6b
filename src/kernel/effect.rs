use std::fmt;

use super::workspace::{PersistedSession, ResolveRequest};
use crate::models::{Principal, ProgramId};

#[derive(Debug, Clone)]
pub enum Effect {
    FetchAuthorization {
        generation: u64,
        principal: Principal,
    },
    ResolveProgram(ResolveRequest),
    RestoreWorkspace {
        generation: u64,
    },
    PersistWorkspace(PersistedSession),
    ClearSession,
    Notify(Notice),
}

/// Blocking notices shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    ProgramNotFound { program: ProgramId, title: String },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::ProgramNotFound { program, title } => {
                write!(f, "'{}' 화면을 찾을 수 없습니다. (program {})", title, program)
            }
        }
    }
}
