//! Utility modules for common functionality

pub mod exit_codes;
pub mod filters;
pub mod sanitizers;
pub mod validators;

// Re-export commonly used functions
pub use exit_codes::{exit_code_from_status, get_exit_code_description, launch_failure_exit_code};
pub use filters::{SourceDirFilter, filter_by_source_dir};
pub use sanitizers::sanitize_for_dirname;
