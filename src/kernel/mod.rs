//! Headless application core (state/action/effect).

pub mod action;
pub mod effect;
pub mod menu;
pub mod program;
pub mod services;
pub mod state;
pub mod store;
pub mod workspace;

pub use action::Action;
pub use effect::{Effect, Notice};
pub use program::{ProgramRegistry, ProgramResolver, Resolution, Screen, ScreenKind};
pub use state::AppState;
pub use store::{DispatchResult, Store};
pub use workspace::{
    PersistedSession, PersistedTab, ResolveRequest, RestoredTab, Tab, WorkspaceAction,
    WorkspaceState,
};
