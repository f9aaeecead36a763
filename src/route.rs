//! Candidate route: ordered article titles from start to goal inclusive

use crate::error::RouteError;
use serde::Serialize;

/// An ordered, validated chain of article titles.
///
/// Always holds at least two non-empty titles. Titles are kept exactly as
/// given; no case-folding or underscore handling happens here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Route {
    titles: Vec<String>,
}

/// One consecutive pair of titles. `index` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step<'a> {
    pub index: usize,
    pub source: &'a str,
    pub target: &'a str,
}

impl Route {
    pub fn new(titles: Vec<String>) -> Result<Self, RouteError> {
        if titles.len() < 2 {
            return Err(RouteError::TooShort { len: titles.len() });
        }
        if let Some(index) = titles.iter().position(|t| t.is_empty()) {
            return Err(RouteError::EmptyTitle { index });
        }
        Ok(Self { titles })
    }

    /// Build `[start, via.., goal]`.
    pub fn from_parts(
        start: impl Into<String>,
        via: impl IntoIterator<Item = String>,
        goal: impl Into<String>,
    ) -> Result<Self, RouteError> {
        let mut titles = vec![start.into()];
        titles.extend(via);
        titles.push(goal.into());
        Self::new(titles)
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn start(&self) -> &str {
        &self.titles[0]
    }

    pub fn goal(&self) -> &str {
        &self.titles[self.titles.len() - 1]
    }

    pub fn step_count(&self) -> usize {
        self.titles.len() - 1
    }

    /// Steps in left-to-right order.
    pub fn steps(&self) -> impl Iterator<Item = Step<'_>> {
        self.titles.windows(2).enumerate().map(|(i, pair)| Step {
            index: i + 1,
            source: &pair[0],
            target: &pair[1],
        })
    }
}
