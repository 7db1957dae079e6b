//! Async runtime adapter: runs directory and resolver work off the caller's
//! thread and sends the results back as `AppMessage`s.

mod async_runtime;
mod message;

pub use async_runtime::AsyncRuntime;
pub use message::AppMessage;
