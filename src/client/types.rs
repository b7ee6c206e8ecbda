//! Wire types for the registry HTTP contract.
//!
//! Field names are camelCase on the wire. List responses carry summaries;
//! the detail endpoint adds `createdAt`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of `GET /api/links`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LinkSummary {
    pub code: String,
    pub target_url: String,
    #[serde(default)]
    pub total_clicks: u64,
    #[serde(default)]
    pub last_clicked_at: Option<DateTime<Utc>>,
}

/// Full link detail from `POST /api/links` and `GET /api/links/{code}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub code: String,
    pub target_url: String,
    #[serde(default)]
    pub total_clicks: u64,
    #[serde(default)]
    pub last_clicked_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /api/links`. `code: None` asks the registry to generate one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkRequest {
    pub target_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// `GET /healthz` payload, displayed as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub ok: bool,
    pub version: String,
    /// Uptime in whole seconds
    pub uptime: u64,
    pub checked_at: String,
}

impl HealthStatus {
    /// "5h 3m 2s" style uptime for display.
    pub fn format_uptime(&self) -> String {
        let hours = self.uptime / 3600;
        let minutes = (self.uptime % 3600) / 60;
        let seconds = self.uptime % 60;
        format!("{}h {}m {}s", hours, minutes, seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_summary_from_wire() {
        let json = r#"{
            "code": "abc123",
            "targetUrl": "https://example.com/long",
            "totalClicks": 7,
            "lastClickedAt": "2025-08-20T10:00:00Z"
        }"#;
        let summary: LinkSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.code, "abc123");
        assert_eq!(summary.target_url, "https://example.com/long");
        assert_eq!(summary.total_clicks, 7);
        assert!(summary.last_clicked_at.is_some());
    }

    #[test]
    fn test_link_summary_never_clicked() {
        let json = r#"{"code": "abc123", "targetUrl": "https://example.com"}"#;
        let summary: LinkSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.total_clicks, 0);
        assert!(summary.last_clicked_at.is_none());
    }

    #[test]
    fn test_link_detail_requires_created_at() {
        let json = r#"{"code": "abc123", "targetUrl": "https://example.com"}"#;
        assert!(serde_json::from_str::<Link>(json).is_err());

        let json = r#"{
            "code": "abc123",
            "targetUrl": "https://example.com",
            "createdAt": "2025-08-01T00:00:00Z"
        }"#;
        let link: Link = serde_json::from_str(json).unwrap();
        assert_eq!(link.total_clicks, 0);
    }

    #[test]
    fn test_create_request_omits_empty_code() {
        let req = CreateLinkRequest {
            target_url: "https://example.com".to_string(),
            code: None,
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(!json.contains("code"));
        assert!(json.contains("targetUrl"));
    }

    #[test]
    fn test_create_request_with_code() {
        let req = CreateLinkRequest {
            target_url: "https://example.com".to_string(),
            code: Some("docs123".to_string()),
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains(r#""code":"docs123""#));
    }

    #[test]
    fn test_health_status_from_wire() {
        let json = r#"{
            "ok": true,
            "version": "1.0.0",
            "uptime": 18182,
            "checkedAt": "2025-08-25T12:00:00Z"
        }"#;
        let health: HealthStatus = serde_json::from_str(json).unwrap();
        assert!(health.ok);
        assert_eq!(health.format_uptime(), "5h 3m 2s");
    }

    #[test]
    fn test_format_uptime_zero() {
        let health = HealthStatus {
            ok: false,
            version: "unknown".to_string(),
            uptime: 0,
            checked_at: String::new(),
        };
        assert_eq!(health.format_uptime(), "0h 0m 0s");
    }
}
