//! Program domain: registry of known screens + async resolution.

mod registry;
mod resolver;

pub use registry::{normalize_program_path, ProgramRegistry, Screen, ScreenKind};
pub use resolver::{ProgramResolver, Resolution};
