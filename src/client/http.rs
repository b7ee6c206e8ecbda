//! reqwest-backed implementation of [`LinkRegistry`].

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::debug;

use crate::config::DashConfig;
use crate::errors::RegistryError;

use super::types::{CreateLinkRequest, HealthStatus, Link, LinkSummary};
use super::LinkRegistry;

pub struct HttpRegistry {
    http: reqwest::Client,
    base_url: String,
}

impl HttpRegistry {
    pub fn new(config: &DashConfig) -> Result<Self, RegistryError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| RegistryError::network(e.to_string()))?;
        Ok(HttpRegistry {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn links_url(&self) -> String {
        format!("{}/api/links", self.base_url)
    }

    fn link_url(&self, code: &str) -> String {
        format!("{}/api/links/{}", self.base_url, code)
    }

    /// Read the response body and parse it as `T`, or classify the failure.
    async fn read_json<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, RegistryError> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(classify(status, &body));
        }
        Ok(serde_json::from_str(&body)?)
    }
}

/// Map a non-success HTTP status to a classified failure.
///
/// The body may carry a JSON `error`/`message` field; when it does not, the
/// status line itself becomes the display message.
fn classify(status: StatusCode, body: &str) -> RegistryError {
    let message = error_message(status, body);
    match status {
        StatusCode::CONFLICT => RegistryError::conflict(message),
        StatusCode::NOT_FOUND => RegistryError::not_found(message),
        s if s.is_server_error() => RegistryError::server(message),
        _ => RegistryError::unknown(message),
    }
}

fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["error", "message"] {
            if let Some(msg) = value.get(key).and_then(|v| v.as_str()) {
                return msg.to_string();
            }
        }
    }
    let body = body.trim();
    if body.is_empty() {
        format!(
            "Request failed with status {}",
            status.canonical_reason().unwrap_or(status.as_str())
        )
    } else {
        body.to_string()
    }
}

#[async_trait]
impl LinkRegistry for HttpRegistry {
    async fn create(&self, request: CreateLinkRequest) -> Result<Link, RegistryError> {
        debug!(target_url = %request.target_url, code = ?request.code, "creating link");
        let response = self.http.post(self.links_url()).json(&request).send().await?;
        Self::read_json(response).await
    }

    async fn list(&self) -> Result<Vec<LinkSummary>, RegistryError> {
        debug!("listing links");
        let response = self.http.get(self.links_url()).send().await?;
        Self::read_json(response).await
    }

    async fn get_one(&self, code: &str) -> Result<Link, RegistryError> {
        debug!(code, "fetching link");
        let response = self.http.get(self.link_url(code)).send().await?;
        Self::read_json(response).await
    }

    async fn delete(&self, code: &str) -> Result<(), RegistryError> {
        debug!(code, "deleting link");
        let response = self.http.delete(self.link_url(code)).send().await?;
        let status = response.status();
        if status.is_success() {
            // 200 or 204; any body is irrelevant
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(classify(status, &body))
    }

    async fn health(&self) -> Result<HealthStatus, RegistryError> {
        debug!("checking registry health");
        let response = self
            .http
            .get(format!("{}/healthz", self.base_url))
            .send()
            .await?;
        Self::read_json(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_conflict() {
        let err = classify(StatusCode::CONFLICT, r#"{"error": "code taken"}"#);
        assert!(err.is_conflict());
        assert_eq!(err.message(), "code taken");
    }

    #[test]
    fn test_classify_not_found() {
        let err = classify(StatusCode::NOT_FOUND, "");
        assert!(err.is_not_found());
        assert_eq!(err.message(), "Request failed with status Not Found");
    }

    #[test]
    fn test_classify_server_error() {
        let err = classify(StatusCode::BAD_GATEWAY, "upstream down");
        assert!(matches!(err, RegistryError::Server(_)));
        assert_eq!(err.message(), "upstream down");
    }

    #[test]
    fn test_classify_uncategorized_status() {
        let err = classify(StatusCode::IM_A_TEAPOT, "");
        assert!(matches!(err, RegistryError::Unknown(_)));
    }

    #[test]
    fn test_error_message_prefers_json_error_field() {
        let msg = error_message(
            StatusCode::INTERNAL_SERVER_ERROR,
            r#"{"message": "database unavailable"}"#,
        );
        assert_eq!(msg, "database unavailable");
    }

    #[test]
    fn test_error_message_falls_back_to_body_text() {
        let msg = error_message(StatusCode::INTERNAL_SERVER_ERROR, "plain text failure");
        assert_eq!(msg, "plain text failure");
    }

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let config = DashConfig {
            base_url: "http://localhost:8080/".to_string(),
            ..DashConfig::default()
        };
        let registry = HttpRegistry::new(&config).unwrap();
        assert_eq!(registry.links_url(), "http://localhost:8080/api/links");
        assert_eq!(
            registry.link_url("abc123"),
            "http://localhost:8080/api/links/abc123"
        );
    }
}
