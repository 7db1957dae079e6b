use crate::kernel::services::ports::DirectoryError;
use crate::kernel::workspace::WorkspaceAction;
use crate::models::{MenuId, Principal, ProgramLink};

#[derive(Debug, Clone)]
pub enum Action {
    SessionStarted {
        principal: Principal,
    },
    AuthorizationLoaded {
        generation: u64,
        result: Result<Vec<ProgramLink>, DirectoryError>,
    },
    MenuToggle {
        id: MenuId,
    },
    MenuActivate {
        id: MenuId,
    },
    Workspace(WorkspaceAction),
    Logout,
}
