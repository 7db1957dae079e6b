//! Service ports: traits + data contracts.

pub mod config;
pub mod directory;
pub mod runtime;
pub mod screen;
pub mod settings;
pub mod storage;

pub use config::{ConsoleConfig, DEFAULT_DASHBOARD_TITLE};
pub use directory::{Directory, DirectoryError, SignIn};
pub use runtime::BoxFuture;
pub use screen::{BuiltinScreenLoader, LoadError, ScreenLoader};
pub use settings::Settings;
pub use storage::{KeyValueStorage, StorageError};
