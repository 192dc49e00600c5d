//! HTTP client for the investments backend.
//!
//! Every operation is a single request against the configured base URL. Any
//! non-success status becomes [`Error::Network`]; nothing is retried or cached.

use async_trait::async_trait;
use log::{debug, info};
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use std::time::Duration;

use investment_planner_core::errors::{Error, Result};
use investment_planner_core::investments::{Investment, InvestmentGateway};

/// Default timeout for API requests.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default base URL of the investments backend.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Maximum number of body characters kept on a failed response.
const ERROR_BODY_LIMIT: usize = 200;

// ─────────────────────────────────────────────────────────────────────────────
// Endpoints
// ─────────────────────────────────────────────────────────────────────────────

const LIST_PATH: &str = "/get-all-investments";
const GET_BY_ID_PATH: &str = "/get-Investment-by-id";
const CREATE_PATH: &str = "/create-investment";
const UPDATE_PATH: &str = "/update-investment";
const DELETE_PATH: &str = "/delete-Investment";

// ─────────────────────────────────────────────────────────────────────────────
// Investments API Client
// ─────────────────────────────────────────────────────────────────────────────

/// HTTP client for the investments backend.
///
/// # Example
///
/// ```ignore
/// let client = InvestmentApiClient::new("http://localhost:5000")?;
/// let investments = client.list_all().await?;
/// ```
#[derive(Debug, Clone)]
pub struct InvestmentApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl InvestmentApiClient {
    /// Create a new client with the default request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not an absolute URL or the HTTP
    /// client cannot be initialized.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a new client with an explicit request timeout.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/').to_string();
        reqwest::Url::parse(&base_url).map_err(|e| {
            Error::InvalidConfigValue(format!("Invalid API base URL '{}': {}", base_url, e))
        })?;

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Unexpected(format!("Failed to initialize HTTP client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn url_with_id(&self, path: &str, investment_id: i64) -> String {
        format!("{}{}?id={}", self.base_url, path, investment_id)
    }

    /// Send a request and return the raw body of a successful response.
    async fn send(&self, request: RequestBuilder) -> Result<String> {
        let response = request
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!("[InvestmentApi] HTTP {}: {}", status, body);
            return Err(Error::Network {
                status: status.as_u16(),
                body: truncate(&body),
            });
        }

        response
            .text()
            .await
            .map_err(|e| Error::Transport(format!("Failed to read response: {}", e)))
    }

    /// Send a request and decode the JSON body of a successful response.
    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let body = self.send(request).await?;
        serde_json::from_str(&body)
            .map_err(|e| Error::Decode(format!("{} - {}", e, truncate(&body))))
    }
}

fn truncate(body: &str) -> String {
    body.chars().take(ERROR_BODY_LIMIT).collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// InvestmentGateway Trait Implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl InvestmentGateway for InvestmentApiClient {
    async fn list_all(&self) -> Result<Vec<Investment>> {
        let url = self.url(LIST_PATH);
        debug!("[InvestmentApi] GET {}", url);

        let investments: Vec<Investment> = self.send_json(self.client.get(&url)).await?;
        info!("[InvestmentApi] Fetched {} investments", investments.len());
        Ok(investments)
    }

    async fn get_by_id(&self, investment_id: i64) -> Result<Investment> {
        let url = self.url_with_id(GET_BY_ID_PATH, investment_id);
        debug!("[InvestmentApi] GET {}", url);

        self.send_json(self.client.get(&url)).await
    }

    async fn create(&self, investment: Investment) -> Result<Investment> {
        let url = self.url(CREATE_PATH);
        debug!("[InvestmentApi] POST {}", url);

        self.send_json(self.client.post(&url).json(&investment)).await
    }

    async fn update(&self, investment: Investment) -> Result<Investment> {
        let url = self.url(UPDATE_PATH);
        debug!("[InvestmentApi] PUT {} (id {})", url, investment.investment_id);

        self.send_json(self.client.put(&url).json(&investment)).await
    }

    /// An empty success body is returned as `Value::Null`.
    async fn delete_by_id(&self, investment_id: i64) -> Result<serde_json::Value> {
        let url = self.url_with_id(DELETE_PATH, investment_id);
        debug!("[InvestmentApi] DELETE {}", url);

        let body = self.send(self.client.delete(&url)).await?;
        if body.trim().is_empty() {
            return Ok(serde_json::Value::Null);
        }
        serde_json::from_str(&body)
            .map_err(|e| Error::Decode(format!("{} - {}", e, truncate(&body))))
    }
}
