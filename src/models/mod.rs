//! 数据模型层

pub mod menu;
pub mod principal;
pub mod program;

pub use menu::{find_in, MenuBranch, MenuId, MenuLeaf, MenuNode};
pub use principal::{Principal, Role};
pub use program::{ProgramId, ProgramLink, ProgramRecord, DASHBOARD_ID};
