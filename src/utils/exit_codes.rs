//! Exit code utilities and mappings

use crate::constants::exit;
use std::io;
use std::process::ExitStatus;

/// Get a human-readable description for an exit code
pub fn get_exit_code_description(exit_code: i32) -> &'static str {
    match exit_code {
        0 => "success",
        1 => "general error",
        2 => "shell builtin misuse",
        126 => "command invoked cannot execute",
        127 => "command not found",
        128 => "invalid argument to exit",
        130 => "script terminated by Control-C",
        131..=255 => "terminated by signal",
        _ => "error",
    }
}

/// Exit code of a finished process; signal terminations become `128 + signal`
pub fn exit_code_from_status(status: &ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return exit::SIGNAL_OFFSET + signal;
        }
    }

    exit::USAGE_ERROR
}

/// Exit code recorded when a process could not be started at all
pub fn launch_failure_exit_code(error: &io::Error) -> i32 {
    match error.kind() {
        io::ErrorKind::NotFound => exit::NOT_FOUND,
        io::ErrorKind::PermissionDenied => exit::NOT_EXECUTABLE,
        _ => exit::USAGE_ERROR,
    }
}
