//! HTTP client for the fuel API.
//!
//! Every call returns the status code and the decoded JSON envelope; the
//! caller decides how to render success and failure.

use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Could not reach {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Unreadable response from {url} (HTTP {status})")]
    InvalidBody { url: String, status: StatusCode },
}

pub type ClientResult<T> = Result<T, ClientError>;

/// A decoded API response.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: StatusCode,
    pub body: Value,
}

impl Reply {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

#[derive(Debug, Clone)]
pub struct FuelClient {
    client: Client,
    base_url: String,
}

impl FuelClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        debug!(%base_url, "Creating FuelClient");
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins the base URL and an endpoint with exactly one slash.
    pub fn url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    pub async fn get(&self, endpoint: &str) -> ClientResult<Reply> {
        self.send::<()>(Method::GET, endpoint, None).await
    }

    pub async fn post<B: Serialize>(&self, endpoint: &str, body: &B) -> ClientResult<Reply> {
        self.send(Method::POST, endpoint, Some(body)).await
    }

    pub async fn put<B: Serialize>(&self, endpoint: &str, body: &B) -> ClientResult<Reply> {
        self.send(Method::PUT, endpoint, Some(body)).await
    }

    pub async fn delete(&self, endpoint: &str) -> ClientResult<Reply> {
        self.send::<()>(Method::DELETE, endpoint, None).await
    }

    async fn send<B: Serialize>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
    ) -> ClientResult<Reply> {
        let url = self.url(endpoint);
        debug!(%method, %url, "HTTP request");

        let mut request = self.client.request(method, &url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|source| ClientError::Http {
            url: url.clone(),
            source,
        })?;
        let status = response.status();
        let text = response.text().await.map_err(|source| ClientError::Http {
            url: url.clone(),
            source,
        })?;
        debug!(%status, bytes = text.len(), "HTTP response");

        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            match serde_json::from_str(&text) {
                Ok(value) => value,
                // Error pages from proxies are not JSON; render them by status.
                Err(_) if !status.is_success() => Value::Null,
                Err(_) => return Err(ClientError::InvalidBody { url, status }),
            }
        };

        Ok(Reply { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let client = FuelClient::new("http://localhost:8080/");
        assert_eq!(client.url("/api/vehicles"), "http://localhost:8080/api/vehicles");
        assert_eq!(client.url("health"), "http://localhost:8080/health");
        assert_eq!(client.base_url(), "http://localhost:8080/");
    }
}
