//! HTTP client for the enrollment REST API
//!
//! Thin reqwest wrapper around the two endpoints the TUI uses: the
//! dependents collection and user registration. Server-side failures
//! carry the body's `error` string so the UI can show it verbatim.

use crate::config::TuiConfig;
use crate::state::{Dependent, NewUser};
use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use super::traits::ApiClient;

/// Default API address
const DEFAULT_ADDRESS: &str = "http://localhost:3333";

/// Errors surfaced by the API client
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server rejected the request and said why (`error` field)
    #[error("{0}")]
    Server(String),
    /// Transport-level failure (connection refused, timeout, bad body)
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl ApiError {
    /// The message shown to the user in the feedback dialog
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Server(msg) => msg.clone(),
            ApiError::Http(err) => err.to_string(),
        }
    }
}

/// Client for the enrollment REST API
pub struct HttpClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpClient {
    /// Create a client against an explicit base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create a client from configuration.
    ///
    /// `CADASTRO_API_URL` wins over the config file; falls back to the
    /// default local address.
    pub fn from_config(config: &TuiConfig) -> Self {
        let base_url = std::env::var("CADASTRO_API_URL")
            .ok()
            .or_else(|| config.api_base_url.clone())
            .unwrap_or_else(|| DEFAULT_ADDRESS.to_string());
        Self::new(base_url)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[derive(Debug, Deserialize)]
struct OusersResponse {
    ousers: Vec<Dependent>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

#[async_trait]
impl ApiClient for HttpClient {
    async fn fetch_dependents(&self) -> Result<Vec<Dependent>, ApiError> {
        let response = self
            .http
            .get(self.url("/ousers"))
            .send()
            .await?
            .error_for_status()?;

        let body: OusersResponse = response.json().await?;
        Ok(body.ousers)
    }

    async fn create_user(&self, user: &NewUser) -> Result<(), ApiError> {
        let response = self.http.post(self.url("/users")).json(user).send().await?;

        if response.status().is_success() {
            return Ok(());
        }

        let status = response.status();
        match response.json::<ErrorResponse>().await {
            Ok(body) => Err(ApiError::Server(body.error)),
            // No error payload; fall back to the status line
            Err(_) => Err(ApiError::Server(format!("Falha na requisição ({status})"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = HttpClient::new("http://localhost:3333/");
        assert_eq!(client.url("/ousers"), "http://localhost:3333/ousers");
    }

    #[test]
    fn test_ousers_response_deserializes_in_order() {
        let json = r#"{"ousers":[{"id":"1","name":"Joana"},{"id":"2","name":"Rui"}]}"#;
        let parsed: OusersResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.ousers.len(), 2);
        assert_eq!(parsed.ousers[0].id, "1");
        assert_eq!(parsed.ousers[0].name, "Joana");
        assert_eq!(parsed.ousers[1].name, "Rui");
    }

    #[test]
    fn test_error_response_reads_error_field() {
        let json = r#"{"error":"E-mail já cadastrado"}"#;
        let parsed: ErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.error, "E-mail já cadastrado");
    }

    #[test]
    fn test_server_error_user_message_is_verbatim() {
        let err = ApiError::Server("E-mail já cadastrado".to_string());
        assert_eq!(err.user_message(), "E-mail já cadastrado");
    }
}
