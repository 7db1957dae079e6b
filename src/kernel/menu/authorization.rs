use compact_str::CompactString;
use rustc_hash::FxHashSet;

use crate::kernel::services::ports::DirectoryError;
use crate::models::{Principal, ProgramId, ProgramLink, Role};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProgramAuthorization {
    Unrestricted,
    Only(FxHashSet<ProgramId>),
}

impl ProgramAuthorization {
    pub fn none() -> Self {
        ProgramAuthorization::Only(FxHashSet::default())
    }

    pub fn from_links(links: impl IntoIterator<Item = ProgramLink>) -> Self {
        ProgramAuthorization::Only(links.into_iter().map(|link| link.program_id).collect())
    }

    pub fn allows(&self, program: &ProgramId) -> bool {
        match self {
            ProgramAuthorization::Unrestricted => true,
            ProgramAuthorization::Only(set) => set.contains(program),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ProgramAuthorization::Only(set) if set.is_empty())
    }
}

/// Where a principal's authorization list comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthorizationScope {
    Bypass,
    Company(CompactString),
    User(CompactString),
}

pub fn scope_for(principal: &Principal) -> AuthorizationScope {
    match principal.role {
        Role::Super => AuthorizationScope::Bypass,
        Role::Admin => AuthorizationScope::Company(principal.company_id.clone()),
        Role::User => AuthorizationScope::User(principal.id.clone()),
    }
}

/// Fail-closed: a fetch error yields the empty set, never full access.
pub fn authorized_programs(
    principal: &Principal,
    fetched: Result<Vec<ProgramLink>, DirectoryError>,
) -> ProgramAuthorization {
    if principal.role.bypasses_authorization() {
        return ProgramAuthorization::Unrestricted;
    }
    match fetched {
        Ok(links) => ProgramAuthorization::from_links(links),
        Err(e) => {
            tracing::warn!(
                principal = %principal.id,
                role = %principal.role,
                error = %e,
                "authorization fetch failed, showing no menu"
            );
            ProgramAuthorization::none()
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/menu/authorization.rs"]
mod tests;
