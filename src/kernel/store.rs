use super::menu::{authorized_programs, ProgramAuthorization};
use super::workspace::WorkspaceAction;
use super::{Action, AppState, Effect};
use crate::models::{MenuNode, Role};

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn unchanged() -> Self {
        Self {
            effects: Vec::new(),
            state_changed: false,
        }
    }
}

pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::SessionStarted { principal } => {
                self.state.workspace.reset();
                self.state.sidebar.clear();
                let generation = self.state.workspace.generation();

                let mut effects = Vec::new();
                if principal.role.bypasses_authorization() {
                    self.state
                        .sidebar
                        .apply_authorization(Role::Super, ProgramAuthorization::Unrestricted);
                } else {
                    effects.push(Effect::FetchAuthorization {
                        generation,
                        principal: principal.clone(),
                    });
                }
                effects.push(Effect::RestoreWorkspace { generation });

                tracing::info!(
                    principal = %principal.id,
                    role = %principal.role,
                    generation,
                    "session started"
                );
                self.state.principal = Some(principal);
                DispatchResult {
                    effects,
                    state_changed: true,
                }
            }
            Action::AuthorizationLoaded { generation, result } => {
                if generation != self.state.workspace.generation() {
                    return DispatchResult::unchanged();
                }
                let Some(principal) = self.state.principal.as_ref() else {
                    return DispatchResult::unchanged();
                };
                let role = principal.role;
                let authorization = authorized_programs(principal, result);
                DispatchResult {
                    effects: Vec::new(),
                    state_changed: self.state.sidebar.apply_authorization(role, authorization),
                }
            }
            Action::MenuToggle { id } => DispatchResult {
                effects: Vec::new(),
                state_changed: self.state.sidebar.toggle(id),
            },
            Action::MenuActivate { id } => match self.state.sidebar.find(id) {
                Some(MenuNode::Leaf(leaf)) => {
                    let open = WorkspaceAction::Open {
                        id: leaf.program_id.clone(),
                        title: leaf.title.clone(),
                    };
                    self.dispatch_workspace(open)
                }
                Some(MenuNode::Branch(_)) => DispatchResult {
                    effects: Vec::new(),
                    state_changed: self.state.sidebar.toggle(id),
                },
                None => DispatchResult::unchanged(),
            },
            Action::Workspace(action) => self.dispatch_workspace(action),
            Action::Logout => {
                if let Some(principal) = self.state.principal.take() {
                    tracing::info!(principal = %principal.id, "session ended");
                }
                self.state.sidebar.clear();
                self.state.workspace.reset();
                DispatchResult {
                    effects: vec![Effect::ClearSession],
                    state_changed: true,
                }
            }
        }
    }

    fn dispatch_workspace(&mut self, action: WorkspaceAction) -> DispatchResult {
        let (state_changed, effects) = self.state.workspace.dispatch_action(action);
        DispatchResult {
            effects,
            state_changed,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
