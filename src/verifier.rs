//! Route verification engine
//!
//! Walks a route left to right and, for each step, pages through the
//! source article's outbound links until the target shows up or the
//! continuation chain runs out. The first step that is not linked, or the
//! first transport fault, ends the verification.

use crate::error::{RouteError, TransportError};
use crate::links::LinkSource;
use crate::route::Route;
use serde::{Serialize, Serializer};

pub const DEFAULT_MAX_PAGES_PER_STEP: usize = 500;

/// Verifier configuration
#[derive(Debug, Clone, Copy)]
pub struct VerifierConfig {
    /// Upper bound on link pages fetched for one step.
    pub max_pages_per_step: usize,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            max_pages_per_step: DEFAULT_MAX_PAGES_PER_STEP,
        }
    }
}

/// Result of checking one `(source, target)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkExistsResult {
    Found,
    NotFound,
    Error(TransportError),
}

/// Result of verifying a whole route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationOutcome {
    /// Every step is linked.
    Success { step_count: usize },
    /// First unlinked step, 1-based.
    StepFailure { failed_step_index: usize },
    /// The link service could not be consulted; no step is blamed.
    TransportError { message: String },
}

#[derive(Serialize)]
struct OutcomeBody<'a> {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    step_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    failed_step: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

impl Serialize for VerificationOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let body = match self {
            VerificationOutcome::Success { step_count } => OutcomeBody {
                valid: true,
                step_count: Some(*step_count),
                failed_step: None,
                error: None,
            },
            VerificationOutcome::StepFailure { failed_step_index } => OutcomeBody {
                valid: false,
                step_count: None,
                failed_step: Some(*failed_step_index),
                error: None,
            },
            VerificationOutcome::TransportError { message } => OutcomeBody {
                valid: false,
                step_count: None,
                failed_step: None,
                error: Some(message),
            },
        };
        body.serialize(serializer)
    }
}

/// Checks that every consecutive pair of a route is joined by a live link.
pub struct LinkChainVerifier<S> {
    source: S,
    config: VerifierConfig,
}

impl<S: LinkSource> LinkChainVerifier<S> {
    pub fn new(source: S, config: VerifierConfig) -> Self {
        Self { source, config }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Validate raw titles, then verify them.
    pub async fn verify_titles(
        &self,
        titles: Vec<String>,
    ) -> Result<VerificationOutcome, RouteError> {
        let route = Route::new(titles)?;
        Ok(self.verify_route(&route).await)
    }

    /// Verify steps strictly in order, stopping at the first failure or fault.
    pub async fn verify_route(&self, route: &Route) -> VerificationOutcome {
        for step in route.steps() {
            match self.link_exists(step.source, step.target).await {
                LinkExistsResult::Found => {
                    tracing::debug!(
                        step = step.index,
                        source = step.source,
                        target = step.target,
                        "FOUND"
                    );
                }
                LinkExistsResult::NotFound => {
                    tracing::info!(
                        step = step.index,
                        source = step.source,
                        target = step.target,
                        "validation failed"
                    );
                    return VerificationOutcome::StepFailure {
                        failed_step_index: step.index,
                    };
                }
                LinkExistsResult::Error(e) => {
                    tracing::warn!(error = %e, "link service unreachable during validation");
                    return VerificationOutcome::TransportError {
                        message: e.to_string(),
                    };
                }
            }
        }

        let step_count = route.step_count();
        tracing::info!(step_count, "validation ok");
        VerificationOutcome::Success { step_count }
    }

    /// Page through `source`'s links looking for exactly `target`.
    pub async fn link_exists(&self, source: &str, target: &str) -> LinkExistsResult {
        let mut cursor: Option<String> = None;

        for _ in 0..self.config.max_pages_per_step {
            let page = match self.source.fetch_links(source, cursor.as_deref()).await {
                Ok(page) => page,
                Err(e) => return LinkExistsResult::Error(e),
            };

            if page.contains(target) {
                return LinkExistsResult::Found;
            }

            match page.continuation {
                Some(next) => cursor = Some(next),
                None => {
                    tracing::debug!(source, target, "NOT FOUND");
                    return LinkExistsResult::NotFound;
                }
            }
        }

        LinkExistsResult::Error(TransportError::PageLimit {
            title: source.to_string(),
            max_pages: self.config.max_pages_per_step,
        })
    }
}
