//! Workspace domain: open program tabs, the active tab, restoration.

mod action;
mod reducer;
mod restore;
mod state;

pub use action::WorkspaceAction;
pub use restore::RestoredTab;
pub use state::{PersistedSession, PersistedTab, ResolveRequest, Tab, WorkspaceState};
