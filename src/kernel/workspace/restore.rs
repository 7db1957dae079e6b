use rustc_hash::FxHashSet;

use crate::kernel::program::Resolution;
use crate::models::ProgramId;

use super::state::{PersistedTab, Tab, WorkspaceState};

/// A persisted tab paired with the outcome of re-resolving its program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestoredTab {
    pub entry: PersistedTab,
    pub resolution: Resolution,
}

impl WorkspaceState {
    /// Rebuilds the tab list from a previous session. Entries that did not
    /// resolve are dropped, duplicates keep their first slot, and the
    /// dashboard always comes first. `active` is honored only if it survived.
    ///
    /// Tabs opened while the restore was in flight are kept after the
    /// restored ones. If one of them is active it stays active.
    pub fn restore(&mut self, entries: Vec<RestoredTab>, active: &ProgramId) -> bool {
        let mut seen = FxHashSet::default();
        let mut tabs = Vec::with_capacity(entries.len() + 1);
        let mut dropped = 0usize;

        for RestoredTab { entry, resolution } in entries {
            let Resolution::Found(screen) = resolution else {
                dropped += 1;
                continue;
            };
            if entry.id.is_dashboard() || !seen.insert(entry.id.clone()) {
                continue;
            }
            tabs.push(Tab {
                id: entry.id,
                title: entry.title,
                screen,
                closable: entry.closable,
            });
        }
        tabs.insert(0, Tab::dashboard(&self.dashboard_title));

        let previous = std::mem::take(&mut self.tabs);
        let mut kept_active = false;
        let mut kept = 0usize;
        for tab in &previous {
            if !tab.closable || seen.contains(&tab.id) {
                continue;
            }
            kept_active |= tab.id == self.active;
            kept += 1;
            tabs.push(tab.clone());
        }

        let active = if kept_active {
            self.active.clone()
        } else if tabs.iter().any(|tab| &tab.id == active) {
            active.clone()
        } else {
            ProgramId::dashboard()
        };

        if dropped > 0 {
            tracing::info!(dropped, "restore skipped unresolved tabs");
        }
        tracing::debug!(tabs = tabs.len(), kept, active = %active, "workspace restored");

        let changed = tabs != previous || active != self.active;
        self.tabs = tabs;
        self.active = active;
        changed
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/workspace/restore.rs"]
mod tests;
