//! Repository entry as declared in the config file

use crate::constants;
use crate::utils::sanitizers::sanitize_for_dirname;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One managed repository
///
/// `source_dir` is a logical name used for include/exclude filtering; it is
/// never treated as a filesystem path. `target` is either a local path or a
/// remote locator from which the local working directory is derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryEntry {
    pub source_dir: String,
    pub target: String,
    /// Directory of the config file this entry was loaded from
    #[serde(skip)]
    pub config_dir: Option<PathBuf>,
}

impl RepositoryEntry {
    pub fn new(source_dir: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source_dir: source_dir.into(),
            target: target.into(),
            config_dir: None,
        }
    }

    pub fn set_config_dir(&mut self, config_dir: Option<PathBuf>) {
        self.config_dir = config_dir;
    }

    /// Whether `target` points at a remote repository rather than a local path
    pub fn is_remote(&self) -> bool {
        is_remote_locator(&self.target)
    }

    /// Local directory the command is executed in
    ///
    /// Absolute local targets are used as-is, relative ones are joined onto
    /// the config directory. Remote targets map to a sanitized directory under
    /// the config directory's remote cache.
    pub fn target_dir(&self) -> PathBuf {
        let base = self
            .config_dir
            .as_deref()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        if self.is_remote() {
            return base
                .join(constants::config::REMOTE_CACHE_DIR)
                .join(sanitize_for_dirname(&self.target));
        }

        let target = Path::new(&self.target);
        if target.is_absolute() {
            target.to_path_buf()
        } else {
            base.join(target)
        }
    }
}

/// `scheme://host/path` or scp-like `user@host:path`
fn is_remote_locator(target: &str) -> bool {
    if target.contains("://") {
        return true;
    }

    match (target.find('@'), target.find(':')) {
        (Some(at), Some(colon)) => at < colon && !target[..at].contains('/'),
        _ => false,
    }
}
