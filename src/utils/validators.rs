//! Configuration validation utilities
//!
//! This module provides centralized validation logic for all configuration-related
//! validation rules, promoting separation of concerns and improved testability.

use crate::config::RepositoryEntry;
use anyhow::anyhow;
use std::collections::HashSet;

/// Enumeration of possible validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Repository entry has an empty source directory (index in the repos list)
    EmptySourceDir(usize),
    /// Repository target is empty (source directory of the entry)
    EmptyTarget(String),
    /// Same source directory and target declared twice
    DuplicateEntry(String, String),
    /// Filter pattern is empty or whitespace-only
    EmptyPattern(String),
    /// Filter pattern is not a valid glob (pattern, reason)
    InvalidPattern(String, String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptySourceDir(index) => {
                write!(f, "Repository #{} sourceDir cannot be empty", index)
            }
            ValidationError::EmptyTarget(source_dir) => {
                write!(f, "Repository '{}' target cannot be empty", source_dir)
            }
            ValidationError::DuplicateEntry(source_dir, target) => {
                write!(
                    f,
                    "Duplicate repository: sourceDir '{}' with target '{}'",
                    source_dir, target
                )
            }
            ValidationError::EmptyPattern(pattern) => {
                write!(f, "Pattern cannot be empty: '{}'", pattern)
            }
            ValidationError::InvalidPattern(pattern, reason) => {
                write!(f, "Invalid glob pattern '{}': {}", pattern, reason)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validates a list of repositories
///
/// Checks for duplicate entries and validates each individual repository.
pub fn validate_repositories(repositories: &[RepositoryEntry]) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let mut seen = HashSet::new();
    for repo in repositories {
        if !seen.insert((&repo.source_dir, &repo.target)) {
            errors.push(ValidationError::DuplicateEntry(
                repo.source_dir.clone(),
                repo.target.clone(),
            ));
        }
    }

    for (index, repo) in repositories.iter().enumerate() {
        if let Err(mut repo_errors) = validate_repository(index, repo) {
            errors.append(&mut repo_errors);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a single repository entry at position `index`
pub fn validate_repository(
    index: usize,
    repository: &RepositoryEntry,
) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if repository.source_dir.trim().is_empty() {
        errors.push(ValidationError::EmptySourceDir(index));
    }

    if repository.target.trim().is_empty() {
        errors.push(ValidationError::EmptyTarget(repository.source_dir.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Converts validation errors to a user-friendly anyhow error
pub fn validation_errors_to_anyhow(errors: Vec<ValidationError>) -> anyhow::Error {
    let error_messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    anyhow!("Validation errors: {}", error_messages.join("; "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_repositories_valid() {
        let repos = vec![
            RepositoryEntry::new("packages/a", "/srv/a"),
            RepositoryEntry::new("packages/b", "git@github.com:owner/b.git"),
        ];
        assert!(validate_repositories(&repos).is_ok());
    }

    #[test]
    fn test_validate_repositories_empty_list() {
        assert!(validate_repositories(&[]).is_ok());
    }

    #[test]
    fn test_same_source_dir_different_targets_is_allowed() {
        let repos = vec![
            RepositoryEntry::new("packages/a", "/srv/a"),
            RepositoryEntry::new("packages/a", "/mirror/a"),
        ];
        assert!(validate_repositories(&repos).is_ok());
    }

    #[test]
    fn test_duplicate_entries() {
        let repos = vec![
            RepositoryEntry::new("packages/a", "/srv/a"),
            RepositoryEntry::new("packages/a", "/srv/a"),
        ];

        let errors = validate_repositories(&repos).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0],
            ValidationError::DuplicateEntry("packages/a".to_string(), "/srv/a".to_string())
        );
    }

    #[test]
    fn test_empty_fields_collected() {
        let repos = vec![
            RepositoryEntry::new("packages/a", "/srv/a"),
            RepositoryEntry::new("", "/srv/b"),
            RepositoryEntry::new("packages/c", "  "),
        ];

        let errors = validate_repositories(&repos).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::EmptySourceDir(1),
                ValidationError::EmptyTarget("packages/c".to_string()),
            ]
        );
    }

    #[test]
    fn test_validation_errors_to_anyhow_joins_messages() {
        let err = validation_errors_to_anyhow(vec![
            ValidationError::EmptySourceDir(0),
            ValidationError::EmptyPattern(String::new()),
        ]);
        assert_eq!(
            err.to_string(),
            "Validation errors: Repository #0 sourceDir cannot be empty; Pattern cannot be empty: ''"
        );
    }

    #[test]
    fn test_display_invalid_pattern() {
        let err = ValidationError::InvalidPattern("[a".to_string(), "invalid range pattern".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid glob pattern '[a': invalid range pattern"
        );
    }
}
