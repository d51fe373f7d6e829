//! Exec command implementation

use super::{Command, CommandContext};
use crate::runner::{CommandRunner, ProcessExecutor, RunError, SystemExecutor};
use anyhow::Result;
use async_trait::async_trait;

/// How the command to execute is taken from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommandMode {
    /// The command must be given positionally
    Strict,
    /// The command may instead be the first token after `--`
    #[default]
    Passthrough,
}

/// Command and arguments to execute in every repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub command: String,
    pub args: Vec<String>,
}

impl CommandLine {
    /// Combine positional input with tokens given after `--`
    ///
    /// Passthrough tokens are always appended after the positional `args`. In
    /// [`CommandMode::Passthrough`] the first of them becomes the command when
    /// none was given positionally.
    pub fn resolve(
        command: Option<String>,
        args: Vec<String>,
        passthrough: Vec<String>,
        mode: CommandMode,
    ) -> Result<Self, RunError> {
        let mut extra = passthrough.into_iter();

        let command = match (command.filter(|c| !c.trim().is_empty()), mode) {
            (Some(command), _) => command,
            (None, CommandMode::Passthrough) => extra
                .next()
                .filter(|c| !c.trim().is_empty())
                .ok_or(RunError::MissingCommand)?,
            (None, CommandMode::Strict) => return Err(RunError::MissingCommand),
        };

        let args = args.into_iter().chain(extra).collect();
        Ok(Self { command, args })
    }
}

/// Exec command running one external command in each filtered repository
#[derive(Debug)]
pub struct ExecCommand {
    pub command_line: CommandLine,
}

impl ExecCommand {
    pub fn new(command_line: CommandLine) -> Self {
        Self { command_line }
    }

    /// Run with a caller-supplied process executor
    pub async fn execute_with<E: ProcessExecutor>(
        &self,
        context: &CommandContext,
        executor: E,
    ) -> Result<i32> {
        let repositories = context
            .config
            .filter_repos(&context.include, &context.exclude)?;

        let runner = CommandRunner::with_executor(executor, context.logger.clone());
        runner
            .run(
                &repositories,
                &self.command_line.command,
                &self.command_line.args,
            )
            .await
    }
}

#[async_trait]
impl Command for ExecCommand {
    async fn execute(&self, context: &CommandContext) -> Result<i32> {
        self.execute_with(context, SystemExecutor).await
    }
}
