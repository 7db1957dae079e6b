use std::sync::Arc;
use std::time::Duration;

use super::registry::{ProgramRegistry, Screen, ScreenKind};
use crate::kernel::services::ports::ScreenLoader;
use crate::models::ProgramId;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    Found(Screen),
    NotFound,
}

#[derive(Clone)]
pub struct ProgramResolver {
    registry: Arc<ProgramRegistry>,
    loader: Arc<dyn ScreenLoader>,
    timeout: Duration,
}

impl ProgramResolver {
    pub fn new(
        registry: ProgramRegistry,
        loader: Arc<dyn ScreenLoader>,
        timeout: Duration,
    ) -> Self {
        Self {
            registry: Arc::new(registry),
            loader,
            timeout,
        }
    }

    pub fn with_registry(&self, registry: ProgramRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
            loader: self.loader.clone(),
            timeout: self.timeout,
        }
    }

    pub fn lookup(&self, program: &ProgramId) -> Option<ScreenKind> {
        self.registry.lookup(program)
    }

    /// Never fails past this boundary: registry misses, loader errors and
    /// timeouts all come back as `NotFound`.
    pub async fn resolve(&self, program: &ProgramId) -> Resolution {
        let Some(kind) = self.lookup(program) else {
            tracing::debug!(program = %program, "program not registered");
            return Resolution::NotFound;
        };

        match tokio::time::timeout(self.timeout, self.loader.load(kind, program.clone())).await {
            Ok(Ok(screen)) => Resolution::Found(screen),
            Ok(Err(e)) => {
                tracing::warn!(program = %program, error = %e, "screen load failed");
                Resolution::NotFound
            }
            Err(_) => {
                tracing::warn!(
                    program = %program,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "screen load timed out"
                );
                Resolution::NotFound
            }
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/program/resolver.rs"]
mod tests;
