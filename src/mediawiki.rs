//! MediaWiki Action API client (`action=query&prop=links`)

use crate::error::TransportError;
use crate::links::{parse_links_response, LinkQueryPage, LinkSource};
use async_trait::async_trait;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://ja.wikipedia.org/w/api.php";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub endpoint: String,
    pub user_agent: String,
    pub timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            user_agent: format!("wikirace/{}", env!("CARGO_PKG_VERSION")),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

/// Link source backed by a live MediaWiki `api.php`.
pub struct MediaWikiClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl MediaWikiClient {
    pub fn new(config: ClientConfig) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| TransportError::Network(e.to_string()))?;
        Ok(Self { http, config })
    }

    async fn request(
        &self,
        title: &str,
        continuation: Option<&str>,
    ) -> Result<LinkQueryPage, TransportError> {
        let mut params = vec![
            ("action", "query"),
            ("prop", "links"),
            ("titles", title),
            ("pllimit", "max"),
            ("format", "json"),
        ];
        if let Some(cursor) = continuation {
            params.push(("plcontinue", cursor));
        }

        let response = self
            .http
            .get(&self.config.endpoint)
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        parse_links_response(&body)
    }
}

#[async_trait]
impl LinkSource for MediaWikiClient {
    async fn fetch_links(
        &self,
        title: &str,
        continuation: Option<&str>,
    ) -> Result<LinkQueryPage, TransportError> {
        tracing::trace!(title, ?continuation, "querying links");
        let timeout_ms = self.config.timeout_ms;
        match tokio::time::timeout(
            Duration::from_millis(timeout_ms),
            self.request(title, continuation),
        )
        .await
        {
            Ok(result) => result,
            Err(_) => Err(TransportError::Timeout { timeout_ms }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer, timeout_ms: u64) -> MediaWikiClient {
        MediaWikiClient::new(ClientConfig {
            endpoint: format!("{}/w/api.php", server.uri()),
            timeout_ms,
            ..ClientConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout_ms, 10_000);
        assert!(config.user_agent.starts_with("wikirace/"));
    }

    #[tokio::test]
    async fn test_sends_query_parameters() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/w/api.php"))
            .and(query_param("action", "query"))
            .and(query_param("prop", "links"))
            .and(query_param("titles", "東京"))
            .and(query_param("pllimit", "max"))
            .and(query_param("format", "json"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"continue": {"plcontinue": "123|0|京都"}, "query": {"pages": {"1": {"links": [{"title": "日本"}]}}}}"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, 5_000).await;
        let page = client.fetch_links("東京", None).await.unwrap();
        assert_eq!(page.links, vec!["日本".to_string()]);
        assert_eq!(page.continuation.as_deref(), Some("123|0|京都"));
    }

    #[tokio::test]
    async fn test_sends_continuation_cursor() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("plcontinue", "next"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"query": {"pages": {"1": {"links": [{"title": "TARGET"}]}}}}"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, 5_000).await;
        let page = client.fetch_links("SRC", Some("next")).await.unwrap();
        assert!(page.contains("TARGET"));
    }

    #[tokio::test]
    async fn test_non_success_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = client_for(&server, 5_000).await;
        let err = client.fetch_links("SRC", None).await.unwrap_err();
        assert_eq!(err, TransportError::Status { status: 503 });
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = client_for(&server, 5_000).await;
        let err = client.fetch_links("SRC", None).await.unwrap_err();
        assert!(matches!(err, TransportError::Decode(_)));
    }

    #[tokio::test]
    async fn test_slow_response_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(r#"{"query": {"pages": {}}}"#)
                    .set_delay(Duration::from_secs(5)),
            )
            .mount(&server)
            .await;

        let client = client_for(&server, 100).await;
        let err = client.fetch_links("SRC", None).await.unwrap_err();
        assert_eq!(err, TransportError::Timeout { timeout_ms: 100 });
    }

    #[tokio::test]
    async fn test_unreachable_host() {
        let client = MediaWikiClient::new(ClientConfig {
            endpoint: "http://127.0.0.1:9/w/api.php".to_string(),
            timeout_ms: 2_000,
            ..ClientConfig::default()
        })
        .unwrap();
        let err = client.fetch_links("SRC", None).await.unwrap_err();
        assert!(matches!(
            err,
            TransportError::Network(_) | TransportError::Timeout { .. }
        ));
    }
}
