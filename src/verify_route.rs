//! verify command: Check a proposed race route against live article links
//!
//! Compact JSON outcome on stdout, human-readable progress on stderr.

use crate::mediawiki::{ClientConfig, MediaWikiClient, DEFAULT_ENDPOINT};
use crate::puzzles::PuzzlesFile;
use crate::route::Route;
use crate::title::normalize_input;
use crate::verifier::{LinkChainVerifier, VerificationOutcome, VerifierConfig};
use anyhow::{Context, Result};
use clap::Args;
use std::io::{self, BufRead};
use std::path::PathBuf;

/// Exit code when a step is not linked
pub const EXIT_STEP_FAILURE: i32 = 1;
/// Exit code when the link service could not be consulted
pub const EXIT_TRANSPORT_ERROR: i32 = 2;

#[derive(Args)]
pub struct VerifyArgs {
    /// Intermediate articles (titles or Wikipedia URLs), in order
    #[arg(value_name = "STEP")]
    steps: Vec<String>,

    /// Start article (title or Wikipedia URL)
    #[arg(long, requires = "goal", conflicts_with = "puzzles")]
    start: Option<String>,

    /// Goal article (title or Wikipedia URL)
    #[arg(long, requires = "start")]
    goal: Option<String>,

    /// Puzzles file (.yaml/.yml or .json)
    #[arg(long, requires = "puzzle")]
    puzzles: Option<PathBuf>,

    /// Puzzle id within the puzzles file
    #[arg(long, requires = "puzzles")]
    puzzle: Option<u32>,

    /// Read intermediate articles from stdin (one per line)
    #[arg(long)]
    stdin: bool,

    /// MediaWiki api.php endpoint
    #[arg(long, env = "WIKIRACE_API", default_value = DEFAULT_ENDPOINT)]
    api: String,

    /// User-Agent sent to the API
    #[arg(long, env = "WIKIRACE_USER_AGENT")]
    user_agent: Option<String>,

    /// Timeout per API request in milliseconds
    #[arg(long, default_value = "10000")]
    timeout: u64,

    /// Maximum link pages fetched per step
    #[arg(long, default_value = "500", value_parser = clap::value_parser!(u64).range(1..))]
    max_pages: u64,
}

/// Run the verify command
pub async fn run_verify(args: VerifyArgs) -> Result<()> {
    let route = build_route(&args).await?;

    eprintln!(
        "Verifying {} -> {} ({} steps)...",
        route.start(),
        route.goal(),
        route.step_count()
    );

    let mut client_config = ClientConfig {
        endpoint: args.api.clone(),
        timeout_ms: args.timeout,
        ..ClientConfig::default()
    };
    if let Some(ua) = &args.user_agent {
        client_config.user_agent = ua.clone();
    }
    let client = MediaWikiClient::new(client_config).context("Failed to build HTTP client")?;
    let verifier = LinkChainVerifier::new(
        client,
        VerifierConfig {
            max_pages_per_step: args.max_pages as usize,
        },
    );

    let outcome = verifier.verify_route(&route).await;

    println!("{}", serde_json::to_string(&outcome)?);
    eprintln!("{}", describe(&outcome, &route));

    match outcome {
        VerificationOutcome::Success { .. } => Ok(()),
        VerificationOutcome::StepFailure { .. } => std::process::exit(EXIT_STEP_FAILURE),
        VerificationOutcome::TransportError { .. } => std::process::exit(EXIT_TRANSPORT_ERROR),
    }
}

/// Assemble `[start, steps.., goal]` from flags, puzzle file and stdin.
async fn build_route(args: &VerifyArgs) -> Result<Route> {
    let (start, goal) = match (&args.start, &args.goal, &args.puzzles, args.puzzle) {
        (Some(start), Some(goal), _, _) => (start.clone(), goal.clone()),
        (_, _, Some(path), Some(id)) => {
            let file = PuzzlesFile::load(path).await?;
            let puzzle = file
                .find(id)
                .with_context(|| format!("Puzzle {} not found in {}", id, path.display()))?;
            (puzzle.start_title.clone(), puzzle.goal_title.clone())
        }
        _ => {
            eprintln!("Usage:");
            eprintln!("  wikirace verify --start <TITLE> --goal <TITLE> [STEP...]");
            eprintln!("  wikirace verify --puzzles <FILE> --puzzle <ID> [STEP...]");
            eprintln!("  wikirace verify --start <TITLE> --goal <TITLE> --stdin");
            std::process::exit(1);
        }
    };

    let start = normalize_input(&start)
        .with_context(|| format!("Invalid start article: '{}'", start))?;
    let goal =
        normalize_input(&goal).with_context(|| format!("Invalid goal article: '{}'", goal))?;

    let mut raw = args.steps.clone();
    if args.stdin {
        raw.extend(read_steps(io::stdin().lock())?);
    }

    let via = parse_steps(&raw)?;
    Ok(Route::from_parts(start, via, goal)?)
}

/// Non-blank lines of `reader`; any unreadable line fails the whole read.
fn read_steps<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let lines = reader
        .lines()
        .collect::<io::Result<Vec<_>>>()
        .context("Failed to read steps from stdin")?;
    Ok(lines
        .into_iter()
        .filter(|line| !line.trim().is_empty())
        .collect())
}

/// Turn each URL or title into a title, naming the first bad input.
fn parse_steps(raw: &[String]) -> Result<Vec<String>> {
    raw.iter()
        .enumerate()
        .map(|(i, input)| {
            normalize_input(input)
                .with_context(|| format!("Invalid article at position {}: '{}'", i + 1, input))
        })
        .collect()
}

/// Human-readable message for an outcome; the three cases never share wording.
pub fn describe(outcome: &VerificationOutcome, route: &Route) -> String {
    match outcome {
        VerificationOutcome::Success { step_count } => {
            format!("Success! Steps: {}", step_count)
        }
        VerificationOutcome::StepFailure { failed_step_index } => {
            let i = *failed_step_index;
            let titles = route.titles();
            format!(
                "Failed: no link at step {} ({} -> {})",
                i,
                titles[i - 1],
                titles[i]
            )
        }
        VerificationOutcome::TransportError { message } => {
            format!("Communication error: {}", message)
        }
    }
}
