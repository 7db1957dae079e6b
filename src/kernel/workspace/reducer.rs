use crate::kernel::effect::{Effect, Notice};
use crate::kernel::program::Resolution;
use crate::models::ProgramId;

use super::action::WorkspaceAction;
use super::state::{ResolveRequest, Tab, WorkspaceState};

impl WorkspaceState {
    pub fn dispatch_action(&mut self, action: WorkspaceAction) -> (bool, Vec<Effect>) {
        match action {
            WorkspaceAction::Open { id, title } => self.open(id, title),
            WorkspaceAction::Resolved {
                request,
                resolution,
            } => self.resolved(request, resolution),
            WorkspaceAction::Close { id } => {
                let changed = self.close(&id);
                self.persist_if(changed)
            }
            WorkspaceAction::CloseOthers { id } => {
                let changed = self.close_others(&id);
                self.persist_if(changed)
            }
            WorkspaceAction::CloseAll => {
                let changed = self.close_all();
                self.persist_if(changed)
            }
            WorkspaceAction::Select { id } => {
                if !self.contains(&id) {
                    return (false, Vec::new());
                }
                let changed = self.select(&id);
                (changed, vec![self.persist_effect()])
            }
            WorkspaceAction::Next => {
                let changed = self.next_tab();
                self.persist_if(changed)
            }
            WorkspaceAction::Prev => {
                let changed = self.prev_tab();
                self.persist_if(changed)
            }
            WorkspaceAction::Restored {
                generation,
                active,
                entries,
            } => {
                if generation != self.generation {
                    tracing::debug!(generation, current = self.generation, "stale restore dropped");
                    return (false, Vec::new());
                }
                let changed = self.restore(entries, &active);
                (changed, vec![self.persist_effect()])
            }
            WorkspaceAction::RestoreFailed { generation } => {
                if generation != self.generation {
                    return (false, Vec::new());
                }
                tracing::warn!(generation, "session restore failed, falling back to dashboard");
                self.reset_tabs();
                (true, vec![self.persist_effect()])
            }
        }
    }

    /// Reopening an open id only activates it. A new id needs a lookup first;
    /// nothing changes until the lookup comes back.
    fn open(&mut self, id: ProgramId, title: String) -> (bool, Vec<Effect>) {
        if self.contains(&id) {
            let changed = self.select(&id);
            return (changed, vec![self.persist_effect()]);
        }
        let request = self.alloc_request(id, title);
        tracing::debug!(
            program = %request.program,
            request_id = request.request_id,
            "resolving program"
        );
        (false, vec![Effect::ResolveProgram(request)])
    }

    fn resolved(&mut self, request: ResolveRequest, resolution: Resolution) -> (bool, Vec<Effect>) {
        if request.generation != self.generation {
            tracing::debug!(
                program = %request.program,
                request_id = request.request_id,
                "stale resolution dropped"
            );
            return (false, Vec::new());
        }

        let screen = match resolution {
            Resolution::Found(screen) => screen,
            Resolution::NotFound => {
                return (
                    false,
                    vec![Effect::Notify(Notice::ProgramNotFound {
                        program: request.program,
                        title: request.title,
                    })],
                );
            }
        };

        // A faster concurrent open of the same id already added it.
        if self.contains(&request.program) {
            let changed = self.select(&request.program);
            return (changed, vec![self.persist_effect()]);
        }

        let id = request.program;
        self.tabs.push(Tab::program(id.clone(), request.title, screen));
        self.active = id;
        (true, vec![self.persist_effect()])
    }

    pub fn select(&mut self, id: &ProgramId) -> bool {
        if !self.contains(id) || &self.active == id {
            return false;
        }
        self.active = id.clone();
        true
    }

    /// Closing the active tab at index `i` activates whatever slid into `i`,
    /// or the new last tab when `i` fell off the end.
    pub fn close(&mut self, id: &ProgramId) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        if !self.tabs[index].closable {
            return false;
        }

        let was_active = &self.active == id;
        self.tabs.remove(index);

        if self.tabs.is_empty() {
            self.reset_tabs();
        } else if was_active {
            let next = if index < self.tabs.len() {
                index
            } else {
                self.tabs.len() - 1
            };
            self.active = self.tabs[next].id.clone();
        }
        true
    }

    pub fn close_others(&mut self, keep: &ProgramId) -> bool {
        if !self.contains(keep) {
            return false;
        }
        let before = self.tabs.len();
        self.tabs.retain(|tab| !tab.closable || &tab.id == keep);
        let changed = self.tabs.len() != before || &self.active != keep;
        self.active = keep.clone();
        changed
    }

    pub fn close_all(&mut self) -> bool {
        let before = self.tabs.len();
        self.tabs.retain(|tab| !tab.closable);
        if self.tabs.is_empty() {
            self.reset_tabs();
            return true;
        }
        if !self.contains(&self.active) {
            self.active = self.tabs[0].id.clone();
        }
        self.tabs.len() != before
    }

    pub fn next_tab(&mut self) -> bool {
        let len = self.tabs.len();
        if len <= 1 {
            return false;
        }
        let current = self.active_index().unwrap_or(0);
        self.active = self.tabs[(current + 1) % len].id.clone();
        true
    }

    pub fn prev_tab(&mut self) -> bool {
        let len = self.tabs.len();
        if len <= 1 {
            return false;
        }
        let current = self.active_index().unwrap_or(0);
        let prev = if current == 0 { len - 1 } else { current - 1 };
        self.active = self.tabs[prev].id.clone();
        true
    }

    fn persist_effect(&self) -> Effect {
        Effect::PersistWorkspace(self.snapshot())
    }

    fn persist_if(&self, changed: bool) -> (bool, Vec<Effect>) {
        if changed {
            (true, vec![self.persist_effect()])
        } else {
            (false, Vec::new())
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/workspace/reducer.rs"]
mod tests;
