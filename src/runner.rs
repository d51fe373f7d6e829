//! Command execution runner for operating across multiple repositories
//!
//! [`CommandRunner::run`] walks the repositories strictly in order, skips
//! those whose directory is absent, and runs one external command in each of
//! the rest. Failures never stop the walk; the exit code of the last failing
//! invocation becomes the run's exit code.

use crate::config::RepositoryEntry;
use crate::constants::messages;
use crate::logger::Logger;
use crate::utils::exit_codes::{
    exit_code_from_status, get_exit_code_description, launch_failure_exit_code,
};
use anyhow::Result;
use async_trait::async_trait;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Errors that abort a run before any repository is touched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// No command to execute was supplied
    MissingCommand,
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunError::MissingCommand => write!(f, "{}", messages::MISSING_COMMAND),
        }
    }
}

impl std::error::Error for RunError {}

/// Exit code and combined stdout/stderr of a finished process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    pub exit_code: i32,
    pub output: String,
}

/// Capability to run an external program to completion
///
/// An `Err` means the process could not be started at all.
#[async_trait]
pub trait ProcessExecutor: Send + Sync {
    async fn execute(&self, program: &str, args: &[String], cwd: &Path) -> io::Result<ProcessOutput>;
}

/// Spawns real processes through `tokio::process`
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemExecutor;

#[async_trait]
impl ProcessExecutor for SystemExecutor {
    async fn execute(&self, program: &str, args: &[String], cwd: &Path) -> io::Result<ProcessOutput> {
        let mut child = tokio::process::Command::new(program)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| io::Error::other("stdout was not captured"))?;
        let stderr = child
            .stderr
            .take()
            .ok_or_else(|| io::Error::other("stderr was not captured"))?;

        // Interleave both streams line by line in arrival order
        let mut stdout = BufReader::new(stdout).split(b'\n');
        let mut stderr = BufReader::new(stderr).split(b'\n');
        let mut lines: Vec<String> = Vec::new();
        let (mut stdout_open, mut stderr_open) = (true, true);

        while stdout_open || stderr_open {
            tokio::select! {
                segment = stdout.next_segment(), if stdout_open => match segment? {
                    Some(bytes) => lines.push(decode_line(&bytes)),
                    None => stdout_open = false,
                },
                segment = stderr.next_segment(), if stderr_open => match segment? {
                    Some(bytes) => lines.push(decode_line(&bytes)),
                    None => stderr_open = false,
                },
            }
        }

        let status = child.wait().await?;

        Ok(ProcessOutput {
            exit_code: exit_code_from_status(&status),
            output: lines.join("\n"),
        })
    }
}

fn decode_line(bytes: &[u8]) -> String {
    let line = String::from_utf8_lossy(bytes);
    line.strip_suffix('\r').unwrap_or(&line).to_string()
}

/// A repository entry paired with the local directory it resolved to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRepository {
    pub entry: RepositoryEntry,
    pub dir: PathBuf,
}

impl ResolvedRepository {
    pub fn resolve(entry: &RepositoryEntry) -> Self {
        Self {
            dir: entry.target_dir(),
            entry: entry.clone(),
        }
    }
}

/// What happened to one repository during a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionOutcome {
    /// Resolved directory does not exist (or is not a directory)
    MissingDirectory,
    /// Directory could not be inspected; the entry was skipped
    Unreachable { reason: String },
    Succeeded { output: String },
    Failed {
        exit_code: i32,
        message: String,
        output: String,
    },
}

impl ExecutionOutcome {
    /// Process exit code, absent when the command never ran
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            ExecutionOutcome::Succeeded { .. } => Some(0),
            ExecutionOutcome::Failed { exit_code, .. } => Some(*exit_code),
            ExecutionOutcome::MissingDirectory | ExecutionOutcome::Unreachable { .. } => None,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, ExecutionOutcome::Failed { .. })
    }

    pub fn is_skipped(&self) -> bool {
        self.exit_code().is_none()
    }
}

/// Outcome of every processed repository plus the overall exit code
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub entries: Vec<(ResolvedRepository, ExecutionOutcome)>,
    pub exit_code: i32,
}

impl RunReport {
    pub fn failed(&self) -> usize {
        self.entries.iter().filter(|(_, o)| o.is_failure()).count()
    }

    pub fn skipped(&self) -> usize {
        self.entries.iter().filter(|(_, o)| o.is_skipped()).count()
    }
}

pub struct CommandRunner<E = SystemExecutor> {
    executor: E,
    logger: Logger,
}

impl CommandRunner {
    pub fn new() -> Self {
        Self::with_executor(SystemExecutor, Logger::new())
    }
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: ProcessExecutor> CommandRunner<E> {
    pub fn with_executor(executor: E, logger: Logger) -> Self {
        Self { executor, logger }
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Run `command args...` in every repository, returning the overall exit code
    ///
    /// The result is 0 unless some invocation failed, in which case it is the
    /// exit code of the last failure in iteration order. Successes never
    /// clear an earlier failure.
    pub async fn run(&self, repos: &[RepositoryEntry], command: &str, args: &[String]) -> Result<i32> {
        Ok(self.run_with_report(repos, command, args).await?.exit_code)
    }

    /// Same as [`CommandRunner::run`] but keeps the per-repository outcomes
    pub async fn run_with_report(
        &self,
        repos: &[RepositoryEntry],
        command: &str,
        args: &[String],
    ) -> Result<RunReport> {
        if command.trim().is_empty() {
            return Err(RunError::MissingCommand.into());
        }

        let mut report = RunReport::default();

        for entry in repos {
            let repo = ResolvedRepository::resolve(entry);
            let outcome = self.run_in_repo(&repo, command, args).await;

            if let ExecutionOutcome::Failed { exit_code, .. } = outcome {
                report.exit_code = exit_code;
            }
            report.entries.push((repo, outcome));
        }

        self.logger.success(messages::DONE);
        Ok(report)
    }

    /// Execute the command in a single resolved repository and log the result
    pub async fn run_in_repo(
        &self,
        repo: &ResolvedRepository,
        command: &str,
        args: &[String],
    ) -> ExecutionOutcome {
        let dir = repo.dir.display().to_string();

        match tokio::fs::metadata(&repo.dir).await {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => return self.skip_missing(&dir),
            Err(e) if e.kind() == io::ErrorKind::NotFound => return self.skip_missing(&dir),
            Err(e) => {
                self.logger.warn(&format!(
                    "Unable to access repository directory \"{}\": {}, skipping",
                    dir, e
                ));
                return ExecutionOutcome::Unreachable {
                    reason: e.to_string(),
                };
            }
        }

        self.logger.info(&format!("Executing command in {}", dir));

        let command_line = render_command_line(command, args);

        match self.executor.execute(command, args, &repo.dir).await {
            Ok(ProcessOutput { exit_code: 0, output }) => {
                if !output.is_empty() {
                    self.logger.info(&output);
                }
                ExecutionOutcome::Succeeded { output }
            }
            Ok(ProcessOutput { exit_code, output }) => {
                let message = format!(
                    "Command failed with exit code {} ({}): {}",
                    exit_code,
                    get_exit_code_description(exit_code),
                    command_line
                );
                self.logger.warn(&format!("{} {}", message, output));
                ExecutionOutcome::Failed {
                    exit_code,
                    message,
                    output,
                }
            }
            Err(e) => {
                let exit_code = launch_failure_exit_code(&e);
                let message = format!(
                    "Command failed to start with exit code {} ({}): {}: {}",
                    exit_code,
                    get_exit_code_description(exit_code),
                    command_line,
                    e
                );
                self.logger.warn(&message);
                ExecutionOutcome::Failed {
                    exit_code,
                    message,
                    output: String::new(),
                }
            }
        }
    }

    fn skip_missing(&self, dir: &str) -> ExecutionOutcome {
        self.logger.warn(&format!(
            "Repository directory \"{}\" does not exist, skipping",
            dir
        ));
        ExecutionOutcome::MissingDirectory
    }
}

fn render_command_line(command: &str, args: &[String]) -> String {
    std::iter::once(command)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}
