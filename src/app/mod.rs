//! 应用层：AppContext 与控制台前端

pub mod console;
pub mod context;
pub mod render;

pub use console::{execute, ConsoleCommand, ParseError, Reply};
pub use context::{AppContext, ContextError};
