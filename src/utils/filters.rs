//! Repository filtering utilities

use crate::config::RepositoryEntry;
use crate::utils::validators::{ValidationError, validation_errors_to_anyhow};
use anyhow::Result;
use glob::{MatchOptions, Pattern};

/// `*` and `?` stay within one path segment; `**` crosses segments.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Compiled include/exclude glob patterns over source directory names
#[derive(Debug, Clone, Default)]
pub struct SourceDirFilter {
    include: Vec<Pattern>,
    exclude: Vec<Pattern>,
}

impl SourceDirFilter {
    /// Compile the given patterns, reporting every invalid one at once
    pub fn new(include: &[String], exclude: &[String]) -> Result<Self> {
        let mut errors = Vec::new();
        let include = compile_patterns(include, &mut errors);
        let exclude = compile_patterns(exclude, &mut errors);

        if !errors.is_empty() {
            return Err(validation_errors_to_anyhow(errors));
        }

        Ok(Self { include, exclude })
    }

    /// True if `source_dir` matches some include pattern (or there are none)
    /// and no exclude pattern
    pub fn matches(&self, source_dir: &str) -> bool {
        let included = self.include.is_empty()
            || self
                .include
                .iter()
                .any(|p| p.matches_with(source_dir, MATCH_OPTIONS));

        let excluded = self
            .exclude
            .iter()
            .any(|p| p.matches_with(source_dir, MATCH_OPTIONS));

        included && !excluded
    }

    /// Order-preserving subsequence of `repositories` accepted by this filter
    pub fn apply(&self, repositories: &[RepositoryEntry]) -> Vec<RepositoryEntry> {
        repositories
            .iter()
            .filter(|repo| self.matches(&repo.source_dir))
            .cloned()
            .collect()
    }
}

fn compile_patterns(patterns: &[String], errors: &mut Vec<ValidationError>) -> Vec<Pattern> {
    patterns
        .iter()
        .filter_map(|raw| {
            if raw.trim().is_empty() {
                errors.push(ValidationError::EmptyPattern(raw.clone()));
                return None;
            }
            match Pattern::new(raw) {
                Ok(pattern) => Some(pattern),
                Err(e) => {
                    errors.push(ValidationError::InvalidPattern(raw.clone(), e.msg.to_string()));
                    None
                }
            }
        })
        .collect()
}

/// Filter repositories by source directory globs
pub fn filter_by_source_dir(
    repositories: &[RepositoryEntry],
    include: &[String],
    exclude: &[String],
) -> Result<Vec<RepositoryEntry>> {
    Ok(SourceDirFilter::new(include, exclude)?.apply(repositories))
}
