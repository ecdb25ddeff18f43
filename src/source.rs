//! Where the item collection comes from.

use async_trait::async_trait;
use std::time::Duration;
use tracing::instrument;

use crate::error::FetchError;
use crate::models::QuizItem;

pub const DEFAULT_SOURCE_URL: &str =
    "https://raw.githubusercontent.com/atharv11/api_file/refs/heads/main/quizzes.json";

#[async_trait]
pub trait CollectionSource: Send + Sync {
    /// Human readable origin, used in logs and the status panel.
    fn describe(&self) -> String;

    async fn fetch(&self) -> Result<Vec<QuizItem>, FetchError>;
}

/// Fetches the collection with a single HTTP GET.
#[derive(Debug)]
pub struct HttpSource {
    url: String,
    timeout: Option<Duration>,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: &str, timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| FetchError::Runtime(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            url: url.to_string(),
            timeout,
            client,
        })
    }
}

#[async_trait]
impl CollectionSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch(&self) -> Result<Vec<QuizItem>, FetchError> {
        let response = self.client.get(&self.url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout(self.timeout.map(|t| t.as_secs()).unwrap_or_default())
            } else {
                FetchError::Network(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        parse_collection(&body)
    }
}

/// A fixed collection, handy when the items are already in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    items: Vec<QuizItem>,
}

impl StaticSource {
    pub fn new(items: Vec<QuizItem>) -> Self {
        Self { items }
    }
}

#[async_trait]
impl CollectionSource for StaticSource {
    fn describe(&self) -> String {
        format!("{} built-in items", self.items.len())
    }

    async fn fetch(&self) -> Result<Vec<QuizItem>, FetchError> {
        Ok(self.items.clone())
    }
}

/// Parse a response body that must be a JSON array of items.
pub fn parse_collection(body: &str) -> Result<Vec<QuizItem>, FetchError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| FetchError::Parse(e.to_string()))?;

    if !value.is_array() {
        return Err(FetchError::Parse("expected a JSON array".to_string()));
    }

    serde_json::from_value(value).map_err(|e| FetchError::Parse(e.to_string()))
}
