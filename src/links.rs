//! Link-listing service seam and MediaWiki `prop=links` response decoding

use crate::error::TransportError;
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;

/// One page of outbound links for a queried article.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkQueryPage {
    pub links: Vec<String>,
    /// Cursor for the next page; `None` on the final page.
    pub continuation: Option<String>,
}

impl LinkQueryPage {
    pub fn contains(&self, title: &str) -> bool {
        self.links.iter().any(|l| l == title)
    }
}

/// A service that lists the outbound links of an article, one page at a time.
#[async_trait]
pub trait LinkSource: Send + Sync {
    async fn fetch_links(
        &self,
        title: &str,
        continuation: Option<&str>,
    ) -> Result<LinkQueryPage, TransportError>;
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    error: Option<ApiError>,
    #[serde(default, rename = "continue")]
    cont: Option<Continue>,
    #[serde(default)]
    query: Option<Query>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    code: String,
    #[serde(default)]
    info: String,
}

#[derive(Debug, Deserialize)]
struct Continue {
    #[serde(default)]
    plcontinue: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Query {
    #[serde(default)]
    pages: Option<HashMap<String, QueryPage>>,
}

#[derive(Debug, Deserialize)]
struct QueryPage {
    #[serde(default)]
    links: Option<Vec<Link>>,
}

#[derive(Debug, Deserialize)]
struct Link {
    title: String,
}

/// Decode an `action=query&prop=links&format=json` body.
///
/// Missing or null `query`, `pages` or `links` means an empty page (a title that
/// does not exist comes back as a page without links). A body that is not
/// the expected shape, or an API `error` object, is a decode error.
pub fn parse_links_response(body: &str) -> Result<LinkQueryPage, TransportError> {
    let resp: QueryResponse =
        serde_json::from_str(body).map_err(|e| TransportError::Decode(e.to_string()))?;

    if let Some(err) = resp.error {
        return Err(TransportError::Decode(format!(
            "API error {}: {}",
            err.code, err.info
        )));
    }

    let links = resp
        .query
        .and_then(|q| q.pages)
        .map(|pages| {
            pages
                .into_values()
                .flat_map(|p| p.links.unwrap_or_default().into_iter().map(|l| l.title))
                .collect()
        })
        .unwrap_or_default();

    let continuation = resp
        .cont
        .and_then(|c| c.plcontinue)
        .filter(|c| !c.is_empty());

    Ok(LinkQueryPage {
        links,
        continuation,
    })
}
