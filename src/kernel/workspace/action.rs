use crate::kernel::program::Resolution;
use crate::models::ProgramId;

use super::restore::RestoredTab;
use super::state::ResolveRequest;

#[derive(Debug, Clone)]
pub enum WorkspaceAction {
    Open {
        id: ProgramId,
        title: String,
    },
    Resolved {
        request: ResolveRequest,
        resolution: Resolution,
    },
    Close {
        id: ProgramId,
    },
    CloseOthers {
        id: ProgramId,
    },
    CloseAll,
    Select {
        id: ProgramId,
    },
    Next,
    Prev,
    Restored {
        generation: u64,
        active: ProgramId,
        entries: Vec<RestoredTab>,
    },
    RestoreFailed {
        generation: u64,
    },
}
