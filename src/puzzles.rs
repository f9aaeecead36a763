//! Puzzles file schema
//!
//! A puzzle fixes the start and goal articles of a race. Files may be YAML
//! (`.yaml`/`.yml`) or JSON (anything else).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root structure of a puzzles file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PuzzlesFile {
    /// ISO date when the file was created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    pub puzzles: Vec<Puzzle>,
}

/// A single race definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    pub puzzle_id: u32,
    pub start_title: String,
    pub goal_title: String,
}

impl PuzzlesFile {
    pub fn find(&self, puzzle_id: u32) -> Option<&Puzzle> {
        self.puzzles.iter().find(|p| p.puzzle_id == puzzle_id)
    }

    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        if is_yaml(path) {
            serde_yaml::from_str(content)
                .with_context(|| format!("Failed to parse {}", path.display()))
        } else {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse {}", path.display()))
        }
    }

    pub fn render(&self, path: &Path) -> Result<String> {
        if is_yaml(path) {
            Ok(serde_yaml::to_string(self)?)
        } else {
            Ok(serde_json::to_string_pretty(self)?)
        }
    }

    pub async fn load(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&content, path)
    }
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml" | "yml")
    )
}
