pub mod envelope;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::config::ConvexConfig;
use crate::error::ConvexError;
pub use envelope::{FunctionCall, FunctionResult};

/// HTTP client for a Convex deployment's public function API
#[derive(Debug, Clone)]
pub struct ConvexClient {
    http: reqwest::Client,
    base_url: String,
}

/// Raw outcome of one function call. Non-200 statuses are returned here, not
/// as errors.
#[derive(Debug, Clone)]
pub struct FunctionResponse {
    pub status: StatusCode,
    pub body: String,
}

impl FunctionResponse {
    pub fn result(&self) -> Result<FunctionResult, ConvexError> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Decode the `value` of a successful call into `T`
    pub fn value<T: DeserializeOwned>(&self) -> Result<T, ConvexError> {
        let value = self.result()?.into_value()?;
        Ok(serde_json::from_value(value)?)
    }
}

impl ConvexClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &ConvexConfig) -> Result<Self, ConvexError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url().to_string(),
        })
    }

    /// `{base}/api/{kind}`; an empty or relative base fails to parse
    pub fn endpoint(&self, kind: &str) -> Result<Url, ConvexError> {
        let raw = format!("{}/api/{}", self.base_url.trim_end_matches('/'), kind);
        Url::parse(&raw).map_err(|e| ConvexError::invalid_url(raw, e))
    }

    pub async fn mutation<A: Serialize>(&self, path: &str, args: &A) -> Result<FunctionResponse, ConvexError> {
        self.call("mutation", path, args).await
    }

    pub async fn query<A: Serialize>(&self, path: &str, args: &A) -> Result<FunctionResponse, ConvexError> {
        self.call("query", path, args).await
    }

    async fn call<A: Serialize>(&self, kind: &str, path: &str, args: &A) -> Result<FunctionResponse, ConvexError> {
        let url = self.endpoint(kind)?;
        tracing::debug!("POST {} ({})", url, path);

        let response = self
            .http
            .post(url)
            .json(&FunctionCall::json(path, args))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        tracing::debug!("{} responded with {}", path, status);

        Ok(FunctionResponse { status, body })
    }
}
