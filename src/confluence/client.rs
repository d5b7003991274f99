//! HTTP client for the Confluence REST API

use reqwest::Client;
use url::Url;

use super::error::{ConfluenceError, ConfluenceResult};
use super::types::{SearchQuery, SearchResponse};

/// Path under the site URL where the REST API lives
pub const REST_PATH: &str = "/wiki/rest/api";

/// Client bound to one Confluence site and account
pub struct ConfluenceClient {
    client: Client,
    endpoint: String,
    username: String,
    token: String,
}

impl ConfluenceClient {
    /// Bind a client to `<base_url>/wiki/rest/api`
    pub fn new(base_url: &str, username: &str, token: &str) -> ConfluenceResult<Self> {
        Self::with_endpoint(&format!("{}{}", base_url, REST_PATH), username, token)
    }

    /// Bind a client to an explicit REST endpoint
    pub fn with_endpoint(endpoint: &str, username: &str, token: &str) -> ConfluenceResult<Self> {
        if endpoint.is_empty() {
            return Err(ConfluenceError::EmptyEndpoint);
        }
        Url::parse(endpoint).map_err(|source| ConfluenceError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            source,
        })?;

        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            username: username.to_string(),
            token: token.to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Run a CQL search
    pub async fn search(&self, query: &SearchQuery) -> ConfluenceResult<SearchResponse> {
        let url = format!("{}/search", self.endpoint);
        tracing::debug!(%url, cql = %query.cql, limit = query.limit, "Searching Confluence");

        let response = self
            .client
            .get(&url)
            .basic_auth(&self.username, Some(&self.token))
            .header(reqwest::header::ACCEPT, "application/json")
            .query(&query.params())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Confluence search rejected");
            return Err(ConfluenceError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("unknown status").to_lowercase(),
            });
        }

        let body = response.bytes().await?;
        let parsed: SearchResponse = serde_json::from_slice(&body)?;
        tracing::debug!(results = parsed.results.len(), total = parsed.total_size.unwrap_or_default(), "Search complete");
        Ok(parsed)
    }
}
