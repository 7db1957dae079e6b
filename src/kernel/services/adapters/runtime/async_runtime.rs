use super::message::AppMessage;
use crate::kernel::menu::{scope_for, AuthorizationScope};
use crate::kernel::program::{ProgramResolver, Resolution};
use crate::kernel::services::ports::{Directory, DirectoryError};
use crate::kernel::workspace::{PersistedSession, ResolveRequest, RestoredTab};
use crate::models::Principal;
use std::io;
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::time::Duration;

pub struct AsyncRuntime {
    runtime: tokio::runtime::Runtime,
    tx: Sender<AppMessage>,
}

impl AsyncRuntime {
    pub fn new(tx: Sender<AppMessage>) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .or_else(|e| {
                tracing::error!(
                    error = %e,
                    "Failed to create multi-thread tokio runtime, falling back to current-thread"
                );
                tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
            })?;
        Ok(Self { runtime, tx })
    }

    /// Stops accepting work; tasks still running after `timeout` are abandoned.
    pub fn shutdown(self, timeout: Duration) {
        self.runtime.shutdown_timeout(timeout);
    }

    /// The directory port is blocking, so the lookup runs on the blocking pool.
    pub fn fetch_authorization(
        &self,
        directory: Arc<dyn Directory>,
        principal: Principal,
        generation: u64,
    ) {
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let result = tokio::task::spawn_blocking(move || match scope_for(&principal) {
                AuthorizationScope::Bypass => Ok(Vec::new()),
                AuthorizationScope::Company(company) => directory.company_programs(&company),
                AuthorizationScope::User(user) => directory.user_programs(&user),
            })
            .await
            .unwrap_or_else(|e| Err(DirectoryError::Unavailable(e.to_string())));

            let _ = tx.send(AppMessage::AuthorizationLoaded { generation, result });
        });
    }

    /// A resolve that panics reports `NotFound`, so every request gets an answer.
    pub fn resolve_program(&self, resolver: ProgramResolver, request: ResolveRequest) {
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let program = request.program.clone();
            let task = tokio::spawn(async move { resolver.resolve(&program).await });
            let resolution = task.await.unwrap_or_else(|e| {
                tracing::error!(program = %request.program, error = %e, "program resolve aborted");
                Resolution::NotFound
            });
            let _ = tx.send(AppMessage::ProgramResolved {
                request,
                resolution,
            });
        });
    }

    /// Entries resolve one after another, each under the resolver's own
    /// timeout, so the restored order matches the persisted order.
    pub fn restore_session(
        &self,
        resolver: ProgramResolver,
        generation: u64,
        session: PersistedSession,
    ) {
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let PersistedSession { tabs, active } = session;
            let task = tokio::spawn(async move {
                let mut entries = Vec::with_capacity(tabs.len());
                for entry in tabs {
                    let resolution = resolver.resolve(&entry.id).await;
                    entries.push(RestoredTab { entry, resolution });
                }
                entries
            });

            let message = match task.await {
                Ok(entries) => AppMessage::SessionRestored {
                    generation,
                    active,
                    entries,
                },
                Err(e) => AppMessage::RestoreFailed {
                    generation,
                    error: e.to_string(),
                },
            };
            let _ = tx.send(message);
        });
    }
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/runtime/async_runtime.rs"]
mod tests;
