//! gitsync - run a command in every repository declared in a gitsync config

pub mod commands;
pub mod config;
pub mod constants;
pub mod logger;
pub mod runner;
pub mod utils;

pub type Result<T> = anyhow::Result<T>;

// Re-export commonly used types
pub use commands::{Command, CommandContext};
pub use config::{Config, RepositoryEntry};
pub use runner::{CommandRunner, ExecutionOutcome, ProcessExecutor, RunError};
