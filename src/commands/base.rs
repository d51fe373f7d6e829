//! Base types and traits for the command pattern

use crate::config::Config;
use crate::logger::Logger;
use anyhow::Result;

/// Context passed to all commands containing shared configuration and options
#[derive(Clone)]
pub struct CommandContext {
    /// The loaded configuration
    pub config: Config,
    /// Glob patterns a source directory must match (any of them); empty matches all
    pub include: Vec<String>,
    /// Glob patterns excluding a source directory
    pub exclude: Vec<String>,
    /// Where user-facing output goes
    pub logger: Logger,
}

impl CommandContext {
    pub fn new(config: Config, include: Vec<String>, exclude: Vec<String>) -> Self {
        Self {
            config,
            include,
            exclude,
            logger: Logger::new(),
        }
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger;
        self
    }
}

/// Trait that all commands must implement
#[async_trait::async_trait]
pub trait Command {
    /// Execute the command with the given context, returning the process exit code
    async fn execute(&self, context: &CommandContext) -> Result<i32>;
}
