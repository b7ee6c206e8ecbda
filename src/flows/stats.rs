//! Read-only stats view for a single link.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::client::{Link, LinkRegistry};
use crate::utils::relative_time::{format_absolute, format_relative};

#[derive(Debug, Clone, PartialEq)]
pub enum StatsState {
    Idle,
    Loading,
    Loaded(Link),
    /// Unknown code; the view offers a path back to the dashboard
    NotFound,
    /// Any other failure, with its message
    Failed(String),
}

pub struct StatsView {
    registry: Arc<dyn LinkRegistry>,
    state: StatsState,
    /// Code of the most recent load; a finished fetch for any other code is
    /// stale and must not overwrite the view.
    current_code: Option<String>,
}

impl StatsView {
    pub fn new(registry: Arc<dyn LinkRegistry>) -> Self {
        StatsView {
            registry,
            state: StatsState::Idle,
            current_code: None,
        }
    }

    pub fn state(&self) -> &StatsState {
        &self.state
    }

    pub fn reset(&mut self) {
        self.state = StatsState::Idle;
        self.current_code = None;
    }

    /// Fetch and bind the stats for `code`.
    pub async fn load(&mut self, code: &str) {
        self.current_code = Some(code.to_string());
        self.state = StatsState::Loading;

        let result = self.registry.get_one(code).await;

        // The view may have been retargeted while the fetch was in flight.
        if self.current_code.as_deref() != Some(code) {
            return;
        }

        self.state = match result {
            Ok(link) => StatsState::Loaded(link),
            Err(err) if err.is_not_found() => StatsState::NotFound,
            Err(err) => StatsState::Failed(err.message().to_string()),
        };
    }

    /// "Last clicked" as a relative bucket ("Never" when unclicked).
    pub fn last_clicked_relative(&self, now: DateTime<Utc>) -> Option<String> {
        self.loaded()
            .map(|link| format_relative(link.last_clicked_at, now))
    }

    pub fn last_clicked_absolute(&self) -> Option<String> {
        self.loaded()
            .and_then(|link| link.last_clicked_at.map(|t| format_absolute(Some(t))))
    }

    pub fn created_relative(&self, now: DateTime<Utc>) -> Option<String> {
        self.loaded()
            .map(|link| format_relative(Some(link.created_at), now))
    }

    pub fn created_absolute(&self) -> Option<String> {
        self.loaded()
            .map(|link| format_absolute(Some(link.created_at)))
    }

    fn loaded(&self) -> Option<&Link> {
        match &self.state {
            StatsState::Loaded(link) => Some(link),
            _ => None,
        }
    }
}
