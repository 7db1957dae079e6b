//! 应用上下文：持有 Store、会话存储与异步运行时
//!
//! All state mutation happens on the thread that owns the context. Async
//! work reports back through `AppMessage`s drained by `pump`/`settle`.

use std::fmt;
use std::io;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::kernel::program::{ProgramRegistry, ProgramResolver};
use crate::kernel::services::adapters::{now_ms, AppMessage, AsyncRuntime, SessionStore};
use crate::kernel::services::ports::{
    ConsoleConfig, Directory, DirectoryError, KeyValueStorage, ScreenLoader,
};
use crate::kernel::{Action, AppState, Effect, Notice, Store};
use crate::models::Principal;

const SHUTDOWN_GRACE: Duration = Duration::from_millis(500);

#[derive(Debug)]
pub enum ContextError {
    Runtime(io::Error),
    Directory(DirectoryError),
    InvalidCredentials,
}

impl fmt::Display for ContextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContextError::Runtime(e) => write!(f, "failed to start async runtime: {}", e),
            ContextError::Directory(e) => write!(f, "{}", e),
            ContextError::InvalidCredentials => {
                write!(f, "아이디 또는 비밀번호가 올바르지 않습니다.")
            }
        }
    }
}

impl std::error::Error for ContextError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ContextError::Runtime(e) => Some(e),
            ContextError::Directory(e) => Some(e),
            ContextError::InvalidCredentials => None,
        }
    }
}

pub struct AppContext {
    store: Store,
    session: SessionStore,
    directory: Arc<dyn Directory>,
    resolver: ProgramResolver,
    runtime: AsyncRuntime,
    rx: Receiver<AppMessage>,
    in_flight: usize,
    notices: Vec<Notice>,
}

impl AppContext {
    /// Builds the context and resumes the stored login, if it is still valid.
    pub fn init(
        config: ConsoleConfig,
        storage: Box<dyn KeyValueStorage>,
        directory: Arc<dyn Directory>,
        loader: Arc<dyn ScreenLoader>,
    ) -> Result<Self, ContextError> {
        let (tx, rx) = mpsc::channel();
        let runtime = AsyncRuntime::new(tx).map_err(ContextError::Runtime)?;
        let resolver = ProgramResolver::new(ProgramRegistry::new(), loader, config.resolve_timeout);
        let session = SessionStore::new(storage, config.auth_ttl);

        let mut ctx = Self {
            store: Store::new(AppState::new(config)),
            session,
            directory,
            resolver,
            runtime,
            rx,
            in_flight: 0,
            notices: Vec::new(),
        };

        if let Some(record) = ctx.session.load_auth(now_ms()) {
            tracing::info!(user = %record.user.id, "resuming stored session");
            ctx.start_session(record.user);
        }
        Ok(ctx)
    }

    pub fn dispose(self) {
        tracing::debug!(in_flight = self.in_flight, "disposing app context");
        self.runtime.shutdown(SHUTDOWN_GRACE);
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub fn login(&mut self, user_id: &str, password: &str) -> Result<(), ContextError> {
        let sign_in = self
            .directory
            .sign_in(user_id, password)
            .map_err(ContextError::Directory)?
            .ok_or(ContextError::InvalidCredentials)?;

        self.session.claim_workspace(&sign_in.principal.id);
        if let Err(e) = self
            .session
            .save_auth(sign_in.principal.clone(), sign_in.token, now_ms())
        {
            tracing::warn!(error = %e, "auth record not saved");
        }
        self.start_session(sign_in.principal);
        Ok(())
    }

    pub fn logout(&mut self) -> bool {
        self.dispatch(Action::Logout)
    }

    pub fn dispatch(&mut self, action: Action) -> bool {
        let result = self.store.dispatch(action);
        for effect in result.effects {
            self.run_effect(effect);
        }
        result.state_changed
    }

    /// Applies every message that has already arrived.
    pub fn pump(&mut self) -> bool {
        let mut changed = false;
        while let Ok(msg) = self.rx.try_recv() {
            changed |= self.handle_message(msg);
        }
        changed
    }

    /// Waits until no async work is outstanding or `timeout` elapses.
    pub fn settle(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        let mut changed = false;
        while self.in_flight > 0 {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.rx.recv_timeout(remaining) {
                Ok(msg) => changed |= self.handle_message(msg),
                Err(RecvTimeoutError::Timeout) => {
                    tracing::warn!(in_flight = self.in_flight, "settle timed out");
                    break;
                }
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
        changed | self.pump()
    }

    fn handle_message(&mut self, msg: AppMessage) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.dispatch(msg.into_action())
    }

    /// The program catalog is read once per session; if it is unavailable
    /// ids are looked up as raw module names.
    fn start_session(&mut self, principal: Principal) {
        let registry = match self.directory.programs() {
            Ok(records) => {
                let registry = ProgramRegistry::from_records(records);
                tracing::debug!(programs = registry.len(), "program catalog loaded");
                registry
            }
            Err(e) => {
                tracing::warn!(error = %e, "program catalog unavailable");
                ProgramRegistry::new()
            }
        };
        self.resolver = self.resolver.with_registry(registry);
        self.dispatch(Action::SessionStarted { principal });
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::FetchAuthorization {
                generation,
                principal,
            } => {
                self.in_flight += 1;
                self.runtime
                    .fetch_authorization(self.directory.clone(), principal, generation);
            }
            Effect::ResolveProgram(request) => {
                self.in_flight += 1;
                self.runtime.resolve_program(self.resolver.clone(), request);
            }
            Effect::RestoreWorkspace { generation } => match self.session.load_session() {
                Some(session) => {
                    self.in_flight += 1;
                    self.runtime
                        .restore_session(self.resolver.clone(), generation, session);
                }
                None => tracing::debug!(generation, "no stored workspace"),
            },
            Effect::PersistWorkspace(snapshot) => {
                if let Err(e) = self.session.save_session(&snapshot) {
                    tracing::warn!(error = %e, "workspace not persisted");
                }
            }
            Effect::ClearSession => self.session.clear_session(),
            Effect::Notify(notice) => {
                tracing::info!(notice = %notice, "notice");
                self.notices.push(notice);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/context.rs"]
mod tests;
