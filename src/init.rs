//! init command: Create a puzzles file template

use crate::puzzles::{Puzzle, PuzzlesFile};
use anyhow::{bail, Context, Result};
use chrono::Utc;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args)]
pub struct InitArgs {
    /// Output file path (.yaml/.yml or .json)
    #[arg(short, long, default_value = "puzzles.yaml")]
    pub output: PathBuf,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

#[derive(Debug, Serialize)]
pub struct InitOutput {
    pub created: String,
    pub file: String,
    pub puzzles: usize,
}

pub async fn run_init(args: InitArgs) -> Result<()> {
    if args.output.exists() && !args.force {
        let error = serde_json::json!({
            "error": "file_exists",
            "message": format!("{} already exists. Use --force to overwrite.", args.output.display()),
            "file": args.output.display().to_string()
        });
        println!("{}", serde_json::to_string(&error)?);
        bail!("File exists");
    }

    let puzzles = template();
    let content = puzzles.render(&args.output)?;
    tokio::fs::write(&args.output, content)
        .await
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    let output = InitOutput {
        created: Utc::now().to_rfc3339(),
        file: args.output.display().to_string(),
        puzzles: puzzles.puzzles.len(),
    };
    println!("{}", serde_json::to_string(&output)?);

    Ok(())
}

fn template() -> PuzzlesFile {
    PuzzlesFile {
        created: Some(Utc::now().format("%Y-%m-%d").to_string()),
        puzzles: vec![Puzzle {
            puzzle_id: 1,
            start_title: "東京".to_string(),
            goal_title: "京都".to_string(),
        }],
    }
}
