//! Menu domain: static catalog, role filtering, sidebar navigation state.

mod authorization;
mod catalog;
mod filter;
mod sidebar;

pub use authorization::{authorized_programs, scope_for, AuthorizationScope, ProgramAuthorization};
pub use catalog::full_menu;
pub use filter::{filter_for, filter_menu};
pub use sidebar::{MenuRow, MenuRowKind, SidebarState};
