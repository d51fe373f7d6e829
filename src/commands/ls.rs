//! List command implementation

use super::{Command, CommandContext};
use crate::config::RepositoryEntry;
use anyhow::Result;
use async_trait::async_trait;
use colored::*;
use serde::Serialize;

/// Output format for a repository in JSON mode
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryOutput {
    pub source_dir: String,
    pub target: String,
    pub dir: String,
    pub exists: bool,
}

impl From<&RepositoryEntry> for RepositoryOutput {
    fn from(repo: &RepositoryEntry) -> Self {
        let dir = repo.target_dir();
        Self {
            source_dir: repo.source_dir.clone(),
            target: repo.target.clone(),
            exists: dir.is_dir(),
            dir: dir.display().to_string(),
        }
    }
}

/// List command for displaying filtered repositories and where they resolve to
pub struct ListCommand {
    /// Output in JSON format
    pub json: bool,
}

#[async_trait]
impl Command for ListCommand {
    async fn execute(&self, context: &CommandContext) -> Result<i32> {
        let repositories = context
            .config
            .filter_repos(&context.include, &context.exclude)?;
        let output: Vec<RepositoryOutput> =
            repositories.iter().map(RepositoryOutput::from).collect();

        if self.json {
            println!("{}", serde_json::to_string_pretty(&output)?);
            return Ok(0);
        }

        let logger = &context.logger;

        if output.is_empty() {
            let mut filter_parts = Vec::new();
            if !context.include.is_empty() {
                filter_parts.push(format!("including {:?}", context.include));
            }
            if !context.exclude.is_empty() {
                filter_parts.push(format!("excluding {:?}", context.exclude));
            }

            if filter_parts.is_empty() {
                logger.warn("No repositories configured");
            } else {
                logger.warn(&format!(
                    "No repositories found {}",
                    filter_parts.join(" and ")
                ));
            }
            return Ok(0);
        }

        logger.success(&format!("Found {} repositories", output.len()));

        for repo in &output {
            let state = if repo.exists {
                "present".green()
            } else {
                "missing".yellow()
            };
            logger.info(&format!(
                "{} {} -> {} ({})",
                "•".blue(),
                repo.source_dir.bold(),
                repo.dir,
                state
            ));
        }

        Ok(0)
    }
}
