//! Redirect resolution for a short code taken from the address.
//!
//! Navigation happens only after the registry has confirmed the code and
//! stated its destination. Reconstructing the target from the code on the
//! client would skip the lookup entirely, so the looked-up `targetUrl` is
//! the only destination ever used.

use std::sync::Arc;

use tracing::debug;

use crate::client::LinkRegistry;
use crate::flows::Navigator;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectOutcome {
    /// Navigated to the registry-stated target
    Redirected(String),
    /// Unknown code or any lookup failure; no navigation performed
    NotFound,
}

pub struct RedirectResolver {
    registry: Arc<dyn LinkRegistry>,
}

impl RedirectResolver {
    pub fn new(registry: Arc<dyn LinkRegistry>) -> Self {
        RedirectResolver { registry }
    }

    pub async fn resolve(&self, code: &str, navigator: &dyn Navigator) -> RedirectOutcome {
        match self.registry.get_one(code).await {
            Ok(link) => {
                debug!(code, target = %link.target_url, "redirecting");
                navigator.navigate(&link.target_url);
                RedirectOutcome::Redirected(link.target_url)
            }
            Err(err) => {
                debug!(code, error = %err, "redirect resolution failed");
                RedirectOutcome::NotFound
            }
        }
    }
}
