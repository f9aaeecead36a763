//! In-memory link source for unit tests

use crate::error::TransportError;
use crate::links::{LinkQueryPage, LinkSource};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

type Key = (String, Option<String>);

/// Scripted responses keyed by `(title, continuation)`, with a call log.
///
/// Unscripted titles answer with an empty final page.
#[derive(Default)]
pub struct ScriptedSource {
    responses: HashMap<Key, Result<LinkQueryPage, TransportError>>,
    delay: Option<Duration>,
    calls: Mutex<Vec<Key>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single final page of links for `title`.
    pub fn links(self, title: &str, links: &[&str]) -> Self {
        self.page(title, None, links, None)
    }

    pub fn page(
        mut self,
        title: &str,
        cursor: Option<&str>,
        links: &[&str],
        next: Option<&str>,
    ) -> Self {
        self.responses.insert(
            (title.to_string(), cursor.map(String::from)),
            Ok(LinkQueryPage {
                links: links.iter().map(|s| s.to_string()).collect(),
                continuation: next.map(String::from),
            }),
        );
        self
    }

    pub fn fail(self, title: &str, error: TransportError) -> Self {
        self.fail_page(title, None, error)
    }

    pub fn fail_page(mut self, title: &str, cursor: Option<&str>, error: TransportError) -> Self {
        self.responses
            .insert((title.to_string(), cursor.map(String::from)), Err(error));
        self
    }

    /// Sleep before every answer.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> Vec<Key> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_for(&self, title: &str) -> usize {
        self.calls().iter().filter(|(t, _)| t == title).count()
    }
}

#[async_trait]
impl LinkSource for ScriptedSource {
    async fn fetch_links(
        &self,
        title: &str,
        continuation: Option<&str>,
    ) -> Result<LinkQueryPage, TransportError> {
        let key = (title.to_string(), continuation.map(String::from));
        self.calls.lock().unwrap().push(key.clone());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.responses
            .get(&key)
            .cloned()
            .unwrap_or_else(|| Ok(LinkQueryPage::default()))
    }
}
