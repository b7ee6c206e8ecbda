//! Dashboard collection state: the list of links, its loading/error state
//! and the client-side search filter.

use std::sync::Arc;

use tracing::debug;

use crate::client::{LinkRegistry, LinkSummary};

/// Why the visible list is empty, for empty-state messaging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// The registry holds no links at all
    NoLinksYet,
    /// Links exist but none match the current search
    NoMatches,
}

/// Owns the in-memory link list for the dashboard.
///
/// `reload()` is the only writer; every view reads. Mutating flows call
/// `reload()` after their mutation completes rather than patching locally,
/// so displayed state never silently diverges from the registry.
pub struct LinkCollection {
    registry: Arc<dyn LinkRegistry>,
    links: Vec<LinkSummary>,
    loading: bool,
    error: Option<String>,
    search_text: String,
    loaded_once: bool,
}

impl LinkCollection {
    pub fn new(registry: Arc<dyn LinkRegistry>) -> Self {
        LinkCollection {
            registry,
            links: Vec::new(),
            loading: false,
            error: None,
            search_text: String::new(),
            loaded_once: false,
        }
    }

    /// Replace the list with a fresh copy from the registry.
    pub async fn reload(&mut self) {
        self.loading = true;
        self.error = None;

        match self.registry.list().await {
            Ok(links) => {
                debug!(count = links.len(), "link list reloaded");
                self.links = links;
                self.loaded_once = true;
            }
            Err(err) => {
                debug!(error = %err, "link list reload failed");
                self.error = Some(err.format_simple());
            }
        }

        self.loading = false;
    }

    /// Update the search text. Filtering is purely client-side; this never
    /// touches the network.
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// All links as returned by the registry, unfiltered and unsorted.
    pub fn all(&self) -> &[LinkSummary] {
        &self.links
    }

    /// Rows to render: the full list, or the case-insensitive substring
    /// match over code and target URL when a search is active.
    pub fn visible(&self) -> Vec<&LinkSummary> {
        let query = self.search_text.trim().to_lowercase();
        if query.is_empty() {
            return self.links.iter().collect();
        }
        self.links
            .iter()
            .filter(|link| {
                link.code.to_lowercase().contains(&query)
                    || link.target_url.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Present only when there is nothing to render; distinguishes "no
    /// links exist" from "nothing matches the search".
    pub fn empty_state(&self) -> Option<EmptyState> {
        if self.loading || self.error.is_some() || !self.loaded_once {
            return None;
        }
        if self.links.is_empty() {
            Some(EmptyState::NoLinksYet)
        } else if self.visible().is_empty() {
            Some(EmptyState::NoMatches)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{CreateLinkRequest, HealthStatus, Link};
    use crate::errors::RegistryError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Registry stub: serves a fixed list and counts calls.
    struct FixedRegistry {
        links: Vec<LinkSummary>,
        fail: bool,
        list_calls: AtomicUsize,
    }

    impl FixedRegistry {
        fn with_links(links: Vec<LinkSummary>) -> Self {
            FixedRegistry {
                links,
                fail: false,
                list_calls: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            FixedRegistry {
                links: Vec::new(),
                fail: true,
                list_calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl LinkRegistry for FixedRegistry {
        async fn create(&self, _request: CreateLinkRequest) -> Result<Link, RegistryError> {
            unimplemented!("not used by collection tests")
        }

        async fn list(&self) -> Result<Vec<LinkSummary>, RegistryError> {
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(RegistryError::network("connection refused"))
            } else {
                Ok(self.links.clone())
            }
        }

        async fn get_one(&self, _code: &str) -> Result<Link, RegistryError> {
            unimplemented!("not used by collection tests")
        }

        async fn delete(&self, _code: &str) -> Result<(), RegistryError> {
            unimplemented!("not used by collection tests")
        }

        async fn health(&self) -> Result<HealthStatus, RegistryError> {
            unimplemented!("not used by collection tests")
        }
    }

    fn summary(code: &str, target: &str) -> LinkSummary {
        LinkSummary {
            code: code.to_string(),
            target_url: target.to_string(),
            total_clicks: 0,
            last_clicked_at: None,
        }
    }

    fn sample_registry() -> Arc<FixedRegistry> {
        Arc::new(FixedRegistry::with_links(vec![
            summary("abc123", "https://example.com/docs"),
            summary("XYZ789", "https://rust-lang.org"),
            summary("qwerty1", "https://example.com/blog"),
        ]))
    }

    #[tokio::test]
    async fn test_reload_replaces_links_and_clears_error() {
        let registry = sample_registry();
        let mut collection = LinkCollection::new(registry.clone());
        collection.reload().await;

        assert_eq!(collection.all().len(), 3);
        assert!(!collection.is_loading());
        assert!(collection.error().is_none());
        // Order preserved as the registry returned it
        assert_eq!(collection.all()[0].code, "abc123");
    }

    #[tokio::test]
    async fn test_reload_failure_records_message() {
        let mut collection = LinkCollection::new(Arc::new(FixedRegistry::failing()));
        collection.reload().await;

        assert!(!collection.is_loading());
        assert_eq!(
            collection.error(),
            Some("Network Error: connection refused")
        );
        assert!(collection.empty_state().is_none());
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive_over_code_and_url() {
        let mut collection = LinkCollection::new(sample_registry());
        collection.reload().await;

        collection.set_search("xyz");
        let visible = collection.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].code, "XYZ789");

        collection.set_search("EXAMPLE.COM");
        assert_eq!(collection.visible().len(), 2);
    }

    #[tokio::test]
    async fn test_search_never_issues_a_network_call() {
        let registry = sample_registry();
        let mut collection = LinkCollection::new(registry.clone());
        collection.reload().await;
        assert_eq!(registry.list_calls.load(Ordering::SeqCst), 1);

        collection.set_search("abc");
        collection.visible();
        collection.set_search("");
        collection.visible();
        assert_eq!(registry.list_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_empty_states_are_distinguished() {
        let mut empty = LinkCollection::new(Arc::new(FixedRegistry::with_links(Vec::new())));
        empty.reload().await;
        assert_eq!(empty.empty_state(), Some(EmptyState::NoLinksYet));

        let mut filtered = LinkCollection::new(sample_registry());
        filtered.reload().await;
        filtered.set_search("no-such-link");
        assert_eq!(filtered.empty_state(), Some(EmptyState::NoMatches));

        filtered.set_search("abc");
        assert!(filtered.empty_state().is_none());
    }

    #[tokio::test]
    async fn test_no_empty_state_before_first_load() {
        let collection = LinkCollection::new(sample_registry());
        assert!(collection.empty_state().is_none());
    }
}
