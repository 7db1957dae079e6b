use serde::{Deserialize, Serialize};

use crate::kernel::program::Screen;
use crate::models::ProgramId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub id: ProgramId,
    pub title: String,
    pub screen: Screen,
    pub closable: bool,
}

impl Tab {
    pub fn dashboard(title: &str) -> Self {
        Self {
            id: ProgramId::dashboard(),
            title: title.to_string(),
            screen: Screen::dashboard(),
            closable: false,
        }
    }

    pub fn program(id: ProgramId, title: String, screen: Screen) -> Self {
        Self {
            id,
            title,
            screen,
            closable: true,
        }
    }

    pub fn persisted(&self) -> PersistedTab {
        PersistedTab {
            id: self.id.clone(),
            title: self.title.clone(),
            closable: self.closable,
        }
    }
}

/// The durable projection of a tab; the screen handle is runtime-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedTab {
    pub id: ProgramId,
    pub title: String,
    pub closable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedSession {
    pub tabs: Vec<PersistedTab>,
    pub active: ProgramId,
}

/// One pending program lookup. `generation` ties it to the session that
/// issued it; results from an older generation are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveRequest {
    pub request_id: u64,
    pub generation: u64,
    pub program: ProgramId,
    pub title: String,
}

/// Invariants: the dashboard tab is always present and never closable, and
/// `active` always names a tab in `tabs`.
#[derive(Debug)]
pub struct WorkspaceState {
    pub(super) tabs: Vec<Tab>,
    pub(super) active: ProgramId,
    pub(super) generation: u64,
    pub(super) dashboard_title: String,
    next_request_id: u64,
}

impl WorkspaceState {
    pub fn new(dashboard_title: impl Into<String>) -> Self {
        let dashboard_title = dashboard_title.into();
        Self {
            tabs: vec![Tab::dashboard(&dashboard_title)],
            active: ProgramId::dashboard(),
            generation: 0,
            dashboard_title,
            next_request_id: 1,
        }
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn active_id(&self) -> &ProgramId {
        &self.active
    }

    pub fn active_index(&self) -> Option<usize> {
        self.position(&self.active)
    }

    pub fn active_tab(&self) -> Option<&Tab> {
        self.tab(&self.active)
    }

    pub fn position(&self, id: &ProgramId) -> Option<usize> {
        self.tabs.iter().position(|tab| &tab.id == id)
    }

    pub fn tab(&self, id: &ProgramId) -> Option<&Tab> {
        self.tabs.iter().find(|tab| &tab.id == id)
    }

    pub fn contains(&self, id: &ProgramId) -> bool {
        self.position(id).is_some()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn dashboard_title(&self) -> &str {
        &self.dashboard_title
    }

    pub fn snapshot(&self) -> PersistedSession {
        PersistedSession {
            tabs: self.tabs.iter().map(Tab::persisted).collect(),
            active: self.active.clone(),
        }
    }

    /// Back to the single-dashboard state and a new generation, so that any
    /// lookup still in flight is ignored when it lands.
    pub fn reset(&mut self) {
        self.generation = self.generation.saturating_add(1);
        self.reset_tabs();
    }

    pub(super) fn reset_tabs(&mut self) {
        self.tabs = vec![Tab::dashboard(&self.dashboard_title)];
        self.active = ProgramId::dashboard();
    }

    pub(super) fn alloc_request(&mut self, program: ProgramId, title: String) -> ResolveRequest {
        let request_id = self.next_request_id;
        self.next_request_id = self.next_request_id.saturating_add(1);
        ResolveRequest {
            request_id,
            generation: self.generation,
            program,
            title,
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/workspace/state.rs"]
mod tests;
