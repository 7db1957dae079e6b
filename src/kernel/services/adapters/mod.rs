//! Service adapters: OS/runtime specific implementations (IO/async).

pub mod directory;
pub mod paths;
pub mod runtime;
pub mod session;
pub mod settings;
pub mod storage;

pub use directory::{
    ensure_directory_file, DirectoryData, DirectoryUser, FileDirectory, StaticDirectory,
};
pub use paths::{
    ensure_data_dir, ensure_log_dir, get_app_data_dir, get_directory_path, get_log_dir,
    get_session_path,
};
pub use runtime::{AppMessage, AsyncRuntime};
pub use session::{now_ms, AuthRecord, SessionStore};
pub use settings::{ensure_settings_file, get_settings_path, load_settings, load_settings_from};
pub use storage::{FileStorage, MemoryStorage};
