use anyhow::Result;
use clap::{Parser, Subcommand};
use gitsync::commands::{CommandLine, CommandMode, ExecCommand, ListCommand};
use gitsync::logger::Logger;
use gitsync::{Command, CommandContext, config::Config, constants};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "gitsync")]
#[command(about = "Run commands across the repositories declared in a gitsync config")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, default_value_t = constants::config::DEFAULT_CONFIG_FILE.to_string())]
    config: String,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Execute command in the relative repositories directory
    Exec {
        /// The command to execute (may instead be given after `--`)
        #[arg(value_name = "CMD")]
        command: Option<String>,

        /// The arguments passed to the command
        #[arg(value_name = "ARGS")]
        args: Vec<String>,

        /// Include only source directories matching the given glob (can be specified multiple times)
        #[arg(long)]
        include: Vec<String>,

        /// Exclude source directories matching the given glob (can be specified multiple times)
        #[arg(long)]
        exclude: Vec<String>,

        /// Require the command positionally; never take it from the tokens after `--`
        #[arg(long)]
        strict: bool,

        /// Tokens after `--`, appended to the arguments
        #[arg(last = true, value_name = "PASSTHROUGH")]
        passthrough: Vec<String>,
    },

    /// List repositories with optional filtering
    Ls {
        /// Include only source directories matching the given glob (can be specified multiple times)
        #[arg(long)]
        include: Vec<String>,

        /// Exclude source directories matching the given glob (can be specified multiple times)
        #[arg(long)]
        exclude: Vec<String>,

        /// Output in JSON format for machine consumption
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let logger = Logger::new();

    let code = match cli.command {
        Commands::Exec {
            command,
            args,
            include,
            exclude,
            strict,
            passthrough,
        } => {
            let mode = if strict {
                CommandMode::Strict
            } else {
                CommandMode::Passthrough
            };

            // Validate before touching the config or any repository
            let command_line = match CommandLine::resolve(command, args, passthrough, mode) {
                Ok(line) => line,
                Err(e) => {
                    logger.error(&e.to_string());
                    return Ok(to_exit_code(constants::exit::USAGE_ERROR));
                }
            };

            let config = Config::load(&cli.config)?;
            let context = CommandContext::new(config, include, exclude).with_logger(logger);
            ExecCommand::new(command_line).execute(&context).await?
        }
        Commands::Ls {
            include,
            exclude,
            json,
        } => {
            let config = Config::load(&cli.config)?;
            let context = CommandContext::new(config, include, exclude).with_logger(logger);
            ListCommand { json }.execute(&context).await?
        }
    };

    Ok(to_exit_code(code))
}

/// Codes outside the portable 0..=255 range collapse to a generic failure
fn to_exit_code(code: i32) -> ExitCode {
    u8::try_from(code)
        .map(ExitCode::from)
        .unwrap_or(ExitCode::FAILURE)
}
