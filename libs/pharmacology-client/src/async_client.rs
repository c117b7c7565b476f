//! Pharmacology search API client

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::RawResponse;
use crate::query::{PageRequest, PharmacologyQuery};

const COUNT_PATH: &str = "target/pharmacology/count";
const PAGES_PATH: &str = "target/pharmacology/pages";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The two remote calls the widget needs.
///
/// Implementations return `Err` when no successful response was obtained
/// (transport failure or a non-success status); parsing the body is left to
/// [`crate::parse_count`] and [`crate::parse_results`].
#[async_trait]
pub trait SearchClient: Send + Sync {
    /// Count the records matching `query`. Paging and ordering do not apply.
    async fn count_query(&self, query: &PharmacologyQuery) -> Result<RawResponse>;

    /// Fetch one page of records matching `query`.
    async fn data_query(
        &self,
        query: &PharmacologyQuery,
        page: &PageRequest<'_>,
    ) -> Result<RawResponse>;
}

/// Application credentials passed through on every request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub app_id: String,
    pub app_key: String,
}

/// HTTP client for the pharmacology search REST API.
pub struct PharmacologyApiClient {
    client: Client,
    base_url: String,
    credentials: Credentials,
}

impl PharmacologyApiClient {
    /// Create a client for the API rooted at `base_url`.
    pub fn new(base_url: impl Into<String>, credentials: Credentials) -> Result<Self> {
        Self::with_timeout(base_url, credentials, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(
        base_url: impl Into<String>,
        credentials: Credentials,
        timeout: Duration,
    ) -> Result<Self> {
        let base_url = normalize_base_url(base_url.into())?;
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url,
            credentials,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full count-query URL for `query`.
    pub fn count_url(&self, query: &PharmacologyQuery) -> String {
        self.build_url(COUNT_PATH, query.query_pairs())
    }

    /// Full data-query URL for `query` and `page`.
    pub fn pages_url(&self, query: &PharmacologyQuery, page: &PageRequest<'_>) -> String {
        let mut pairs = query.query_pairs();
        pairs.extend(page.query_pairs());
        self.build_url(PAGES_PATH, pairs)
    }

    fn build_url(&self, path: &str, pairs: Vec<(String, String)>) -> String {
        let mut query_params = vec![
            format!("app_id={}", urlencoding::encode(&self.credentials.app_id)),
            format!("app_key={}", urlencoding::encode(&self.credentials.app_key)),
        ];
        for (key, value) in &pairs {
            query_params.push(format!("{}={}", key, urlencoding::encode(value)));
        }
        query_params.push("_format=json".to_string());

        format!("{}/{}?{}", self.base_url, path, query_params.join("&"))
    }

    async fn get(&self, url: &str) -> Result<RawResponse> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(RawResponse {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl SearchClient for PharmacologyApiClient {
    async fn count_query(&self, query: &PharmacologyQuery) -> Result<RawResponse> {
        let url = self.count_url(query);
        debug!(uri = %query.uri, "issuing pharmacology count query");
        self.get(&url).await
    }

    async fn data_query(
        &self,
        query: &PharmacologyQuery,
        page: &PageRequest<'_>,
    ) -> Result<RawResponse> {
        let url = self.pages_url(query, page);
        debug!(
            uri = %query.uri,
            page = page.page,
            page_size = page.page_size,
            "issuing pharmacology data query"
        );
        self.get(&url).await
    }
}

fn normalize_base_url(base_url: String) -> Result<String> {
    let trimmed = base_url.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(Error::InvalidUrl(base_url));
    }
    Ok(trimmed.to_string())
}
