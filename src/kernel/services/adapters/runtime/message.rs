use crate::kernel::action::Action;
use crate::kernel::program::Resolution;
use crate::kernel::services::ports::DirectoryError;
use crate::kernel::workspace::{ResolveRequest, RestoredTab, WorkspaceAction};
use crate::models::{ProgramId, ProgramLink};

#[derive(Debug)]
pub enum AppMessage {
    AuthorizationLoaded {
        generation: u64,
        result: Result<Vec<ProgramLink>, DirectoryError>,
    },
    ProgramResolved {
        request: ResolveRequest,
        resolution: Resolution,
    },
    SessionRestored {
        generation: u64,
        active: ProgramId,
        entries: Vec<RestoredTab>,
    },
    RestoreFailed {
        generation: u64,
        error: String,
    },
}

impl AppMessage {
    pub fn into_action(self) -> Action {
        match self {
            AppMessage::AuthorizationLoaded { generation, result } => {
                Action::AuthorizationLoaded { generation, result }
            }
            AppMessage::ProgramResolved {
                request,
                resolution,
            } => Action::Workspace(WorkspaceAction::Resolved {
                request,
                resolution,
            }),
            AppMessage::SessionRestored {
                generation,
                active,
                entries,
            } => Action::Workspace(WorkspaceAction::Restored {
                generation,
                active,
                entries,
            }),
            AppMessage::RestoreFailed { generation, error } => {
                tracing::warn!(generation, error = %error, "session restore task failed");
                Action::Workspace(WorkspaceAction::RestoreFailed { generation })
            }
        }
    }
}
