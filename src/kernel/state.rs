use crate::kernel::menu::{full_menu, SidebarState};
use crate::kernel::services::ports::ConsoleConfig;
use crate::kernel::workspace::WorkspaceState;
use crate::models::Principal;

#[derive(Debug)]
pub struct AppState {
    pub config: ConsoleConfig,
    pub principal: Option<Principal>,
    pub sidebar: SidebarState,
    pub workspace: WorkspaceState,
}

impl AppState {
    pub fn new(config: ConsoleConfig) -> Self {
        let workspace = WorkspaceState::new(config.dashboard_title.clone());
        Self {
            config,
            principal: None,
            sidebar: SidebarState::new(full_menu()),
            workspace,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.principal.is_some()
    }

    pub fn generation(&self) -> u64 {
        self.workspace.generation()
    }
}
