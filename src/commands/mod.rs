//! Command implementations

pub mod base;
pub mod exec;
pub mod ls;

pub use base::{Command, CommandContext};
pub use exec::{CommandLine, CommandMode, ExecCommand};
pub use ls::ListCommand;
