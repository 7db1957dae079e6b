use std::fmt;

use super::runtime::BoxFuture;
use crate::kernel::program::{Screen, ScreenKind};
use crate::models::ProgramId;

/// Loads the runtime handle for a registered screen. Loading may be slow
/// (module fetch, initial data); callers bound it with a timeout.
pub trait ScreenLoader: Send + Sync {
    fn load(
        &self,
        kind: ScreenKind,
        program: ProgramId,
    ) -> BoxFuture<'static, Result<Screen, LoadError>>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadError {
    pub kind: ScreenKind,
    pub reason: String,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to load {}: {}", self.kind.module_name(), self.reason)
    }
}

impl std::error::Error for LoadError {}

/// Builds screens in-process with no IO.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinScreenLoader;

impl ScreenLoader for BuiltinScreenLoader {
    fn load(
        &self,
        kind: ScreenKind,
        program: ProgramId,
    ) -> BoxFuture<'static, Result<Screen, LoadError>> {
        Box::pin(async move { Ok(Screen::new(kind, program)) })
    }
}
