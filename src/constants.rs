//! Central constants for the gitsync application

/// Default values for configuration
pub mod config {
    /// Default configuration file name, looked up in the current directory
    pub const DEFAULT_CONFIG_FILE: &str = ".gitsync.json";

    /// Directory (relative to the config file) holding checkouts of remote targets
    pub const REMOTE_CACHE_DIR: &str = ".gitsync/repos";
}

/// Messages shared between the CLI and the runner
pub mod messages {
    /// Logged when neither a positional command nor a `--` passthrough command was given
    pub const MISSING_COMMAND: &str = "Require command argument to execute";

    /// Logged once every repository has been processed
    pub const DONE: &str = "Done!";
}

/// Process exit codes produced by gitsync itself
pub mod exit {
    /// Usage or setup failure
    pub const USAGE_ERROR: i32 = 1;

    /// Launch failure: executable could not be found
    pub const NOT_FOUND: i32 = 127;

    /// Launch failure: executable found but not runnable
    pub const NOT_EXECUTABLE: i32 = 126;

    /// Offset added to a signal number when a process is killed by it
    pub const SIGNAL_OFFSET: i32 = 128;
}
