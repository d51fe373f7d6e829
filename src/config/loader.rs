//! Configuration file loading

use super::RepositoryEntry;
use crate::utils::filters;
use crate::utils::validators;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub repos: Vec<RepositoryEntry>,
}

impl Config {
    /// Load configuration from a file
    ///
    /// `.json` files are parsed as JSON, anything else as YAML. Each entry
    /// remembers the config file's directory so relative targets resolve
    /// against it rather than the current directory.
    pub fn load(path: &str) -> Result<Self> {
        let config_path = Path::new(path);
        if !config_path.is_file() {
            anyhow::bail!("Config file not found: {}", path);
        }

        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file {}", path))?;

        let mut config = Self::parse(&content, config_path)
            .with_context(|| format!("Failed to parse config file {}", path))?;

        let config_dir = config_path.parent().map(|p| p.to_path_buf());
        for repo in &mut config.repos {
            repo.set_config_dir(config_dir.clone());
        }

        config.validate()?;

        Ok(config)
    }

    fn parse(content: &str, path: &Path) -> Result<Self> {
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Ok(serde_json::from_str(content)?)
        } else {
            Ok(serde_yaml::from_str(content)?)
        }
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        validators::validate_repositories(&self.repos)
            .map_err(validators::validation_errors_to_anyhow)
    }

    /// Create a new empty configuration
    pub fn new() -> Self {
        Self { repos: Vec::new() }
    }

    /// Repositories whose source directory matches `include` (all when empty)
    /// and none of `exclude`, in declared order
    pub fn filter_repos(&self, include: &[String], exclude: &[String]) -> Result<Vec<RepositoryEntry>> {
        filters::filter_by_source_dir(&self.repos, include, exclude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> String {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path.to_string_lossy().to_string()
    }

    #[test]
    fn test_load_json_sets_config_dir() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            ".gitsync.json",
            r#"{"repos": [{"sourceDir": "packages/a", "target": "../a"}]}"#,
        );

        let config = Config::load(&path).unwrap();
        assert_eq!(config.repos.len(), 1);
        assert_eq!(config.repos[0].source_dir, "packages/a");
        assert_eq!(config.repos[0].config_dir, Some(dir.path().to_path_buf()));
        assert_eq!(config.repos[0].target_dir(), dir.path().join("../a"));
    }

    #[test]
    fn test_load_yaml() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "gitsync.yaml",
            "repos:\n  - sourceDir: packages/a\n    target: /srv/a\n  - sourceDir: packages/b\n    target: /srv/b\n",
        );

        let config = Config::load(&path).unwrap();
        assert_eq!(config.repos.len(), 2);
        assert_eq!(config.repos[1].target_dir(), PathBuf::from("/srv/b"));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            ".gitsync.json",
            r#"{"repos": [{"sourceDir": "a", "target": "/srv/a", "branch": "main"}], "extra": 1}"#,
        );
        assert!(Config::load(&path).is_ok());
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load("/definitely/not/here/.gitsync.json").unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_load_rejects_invalid_entries() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            ".gitsync.json",
            r#"{"repos": [{"sourceDir": "", "target": "/srv/a"}]}"#,
        );

        let err = Config::load(&path).unwrap_err();
        assert!(err.to_string().contains("sourceDir cannot be empty"));
    }

    #[test]
    fn test_filter_repos_delegates_to_glob_filter() {
        let config = Config {
            repos: vec![
                RepositoryEntry::new("packages/a", "/srv/a"),
                RepositoryEntry::new("tools/b", "/srv/b"),
            ],
        };

        let filtered = config
            .filter_repos(&["packages/*".to_string()], &[])
            .unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].source_dir, "packages/a");

        let all = config.filter_repos(&[], &[]).unwrap();
        assert_eq!(all, config.repos);
    }

    #[test]
    fn test_config_new_default() {
        assert_eq!(Config::new(), Config::default());
        assert!(Config::new().repos.is_empty());
        assert!(Config::new().validate().is_ok());
    }
}
