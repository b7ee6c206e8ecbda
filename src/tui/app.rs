//! Dashboard application state: bridges the flows to the screens.

use std::sync::{Arc, Mutex};

use crate::client::{HealthStatus, LinkRegistry};
use crate::config::DashConfig;
use crate::errors::RegistryError;
use crate::flows::{
    CreateLinkFlow, DeleteLinkFlow, LinkCollection, Notifier, Severity, StatsView,
};
use crate::utils::validator::Field;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentScreen {
    Dashboard,
    AddLink,
    DeleteConfirm,
    Stats,
    Health,
    Help,
    Exiting,
}

/// Notification sink for the TUI: toasts land in a buffer the status bar
/// drains after every operation.
pub struct ToastSink {
    toasts: Mutex<Vec<(Severity, String, String)>>,
}

impl ToastSink {
    pub fn new() -> Self {
        ToastSink {
            toasts: Mutex::new(Vec::new()),
        }
    }

    fn drain(&self) -> Vec<(Severity, String, String)> {
        match self.toasts.lock() {
            Ok(mut toasts) => toasts.drain(..).collect(),
            Err(_) => Vec::new(),
        }
    }
}

impl Default for ToastSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ToastSink {
    fn notify(&self, severity: Severity, title: &str, message: &str) {
        if let Ok(mut toasts) = self.toasts.lock() {
            toasts.push((severity, title.to_string(), message.to_string()));
        }
    }
}

pub struct App {
    pub config: DashConfig,
    pub collection: LinkCollection,
    pub create_flow: CreateLinkFlow,
    pub delete_flow: DeleteLinkFlow,
    pub stats_view: StatsView,
    pub health: Option<Result<HealthStatus, String>>,

    pub current_screen: CurrentScreen,
    pub active_field: Field,
    pub selected_index: usize,
    pub is_searching: bool,

    pub status_message: String,
    pub error_message: String,

    registry: Arc<dyn LinkRegistry>,
    toasts: Arc<ToastSink>,
}

impl App {
    pub fn new(registry: Arc<dyn LinkRegistry>, config: DashConfig) -> Self {
        App {
            collection: LinkCollection::new(registry.clone()),
            create_flow: CreateLinkFlow::new(registry.clone()),
            delete_flow: DeleteLinkFlow::new(registry.clone()),
            stats_view: StatsView::new(registry.clone()),
            health: None,
            current_screen: CurrentScreen::Dashboard,
            active_field: Field::TargetUrl,
            selected_index: 0,
            is_searching: false,
            status_message: String::new(),
            error_message: String::new(),
            registry,
            toasts: Arc::new(ToastSink::new()),
            config,
        }
    }

    pub fn notifier(&self) -> Arc<ToastSink> {
        self.toasts.clone()
    }

    /// Move buffered toasts into the status bar. Last toast wins; an error
    /// outranks a success from the same operation.
    pub fn drain_toasts(&mut self) {
        for (severity, _title, message) in self.toasts.drain() {
            match severity {
                Severity::Success => {
                    self.status_message = message;
                    self.error_message.clear();
                }
                Severity::Error => {
                    self.error_message = message;
                    self.status_message.clear();
                }
            }
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.error_message.clear();
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = message.into();
        self.status_message.clear();
    }

    pub async fn reload(&mut self) {
        self.collection.reload().await;
        if let Some(err) = self.collection.error() {
            let err = err.to_string();
            self.set_error(err);
        }
        self.clamp_selection();
    }

    // ---- selection ----

    pub fn visible_len(&self) -> usize {
        self.collection.visible().len()
    }

    pub fn clamp_selection(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
    }

    pub fn move_selection_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.visible_len() {
            self.selected_index += 1;
        }
    }

    pub fn selected_code(&self) -> Option<String> {
        self.collection
            .visible()
            .get(self.selected_index)
            .map(|link| link.code.clone())
    }

    // ---- search ----

    pub fn search_push(&mut self, c: char) {
        let mut text = self.collection.search_text().to_string();
        text.push(c);
        self.collection.set_search(text);
        self.clamp_selection();
    }

    pub fn search_pop(&mut self) {
        let mut text = self.collection.search_text().to_string();
        text.pop();
        self.collection.set_search(text);
        self.clamp_selection();
    }

    pub fn search_clear(&mut self) {
        self.collection.set_search("");
        self.is_searching = false;
        self.clamp_selection();
    }

    // ---- add link ----

    pub fn open_add(&mut self) {
        self.create_flow.open();
        self.active_field = Field::TargetUrl;
        self.current_screen = CurrentScreen::AddLink;
    }

    pub fn toggle_add_field(&mut self) {
        self.active_field = match self.active_field {
            Field::TargetUrl => Field::CustomCode,
            Field::CustomCode => Field::TargetUrl,
        };
    }

    pub async fn submit_add(&mut self) {
        let notifier = self.notifier();
        let outcome = self
            .create_flow
            .submit(&mut self.collection, notifier.as_ref())
            .await;
        self.drain_toasts();

        if matches!(outcome, crate::flows::SubmitOutcome::Created) {
            self.current_screen = CurrentScreen::Dashboard;
            self.clamp_selection();
        }
    }

    pub fn cancel_add(&mut self) {
        if self.create_flow.is_submitting() {
            return;
        }
        self.create_flow.cancel();
        self.current_screen = CurrentScreen::Dashboard;
    }

    // ---- delete ----

    pub fn request_delete(&mut self) {
        if let Some(code) = self.selected_code() {
            self.delete_flow.request(code);
            self.current_screen = CurrentScreen::DeleteConfirm;
        }
    }

    pub async fn confirm_delete(&mut self) {
        let notifier = self.notifier();
        self.delete_flow
            .confirm(&mut self.collection, notifier.as_ref())
            .await;
        self.drain_toasts();
        self.current_screen = CurrentScreen::Dashboard;
        self.clamp_selection();
    }

    pub fn decline_delete(&mut self) {
        if self.delete_flow.is_deleting() {
            return;
        }
        self.delete_flow.decline();
        self.current_screen = CurrentScreen::Dashboard;
    }

    // ---- stats / health ----

    pub async fn open_stats(&mut self) {
        if let Some(code) = self.selected_code() {
            self.stats_view.load(&code).await;
            self.current_screen = CurrentScreen::Stats;
        }
    }

    pub fn close_stats(&mut self) {
        self.stats_view.reset();
        self.current_screen = CurrentScreen::Dashboard;
    }

    pub async fn open_health(&mut self) {
        self.health = Some(
            self.registry
                .health()
                .await
                .map_err(|e: RegistryError| e.format_simple()),
        );
        self.current_screen = CurrentScreen::Health;
    }

    /// Show the short URL for the selected row in the status bar.
    pub fn show_short_url(&mut self) {
        if let Some(code) = self.selected_code() {
            let url = self.config.short_url(&code);
            self.set_status(format!("Short URL: {}", url));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_sink_drains_in_order() {
        let sink = ToastSink::new();
        sink.notify(Severity::Success, "Success", "first");
        sink.notify(Severity::Error, "Error", "second");

        let drained = sink.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].2, "first");
        assert_eq!(drained[1].2, "second");
        assert!(sink.drain().is_empty());
    }
}
