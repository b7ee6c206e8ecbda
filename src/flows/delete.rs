//! Two-step deletion flow.
//!
//! NoTarget -> PendingConfirmation -> Deleting -> NoTarget. The registry's
//! delete is reachable only through PendingConfirmation; declining makes no
//! request. Cancel is refused while the delete is in flight so a
//! no-longer-intended target cannot be swapped in mid-request.

use std::sync::Arc;

use tracing::debug;

use crate::client::LinkRegistry;
use crate::flows::collection::LinkCollection;
use crate::flows::{Notifier, Severity};

#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    NoTarget,
    PendingConfirmation { code: String },
    Deleting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Deleted; collection reloaded
    Deleted,
    /// Delete failed; error toast shown, flow back at NoTarget
    Failed,
    /// Confirm called without a pending target; nothing happened
    NotPending,
}

pub struct DeleteLinkFlow {
    registry: Arc<dyn LinkRegistry>,
    state: State,
}

impl DeleteLinkFlow {
    pub fn new(registry: Arc<dyn LinkRegistry>) -> Self {
        DeleteLinkFlow {
            registry,
            state: State::NoTarget,
        }
    }

    /// Ask for confirmation before deleting `code`. No request is made.
    pub fn request(&mut self, code: impl Into<String>) {
        if matches!(self.state, State::Deleting) {
            return;
        }
        self.state = State::PendingConfirmation { code: code.into() };
    }

    /// The code awaiting confirmation, so the surface can name it.
    pub fn pending_code(&self) -> Option<&str> {
        match &self.state {
            State::PendingConfirmation { code } => Some(code),
            _ => None,
        }
    }

    pub fn is_deleting(&self) -> bool {
        matches!(self.state, State::Deleting)
    }

    /// Decline the confirmation. Refused while a delete is in flight.
    pub fn decline(&mut self) {
        if matches!(self.state, State::Deleting) {
            return;
        }
        self.state = State::NoTarget;
    }

    /// Execute the pending delete. Success and failure both land back at
    /// NoTarget; deletion is never retried automatically.
    pub async fn confirm(
        &mut self,
        collection: &mut LinkCollection,
        notifier: &dyn Notifier,
    ) -> DeleteOutcome {
        let code = match std::mem::replace(&mut self.state, State::Deleting) {
            State::PendingConfirmation { code } => code,
            other => {
                self.state = other;
                return DeleteOutcome::NotPending;
            }
        };

        let result = self.registry.delete(&code).await;
        self.state = State::NoTarget;

        match result {
            Ok(()) => {
                debug!(code = %code, "link deleted");
                notifier.notify(Severity::Success, "Deleted", "Link deleted successfully");
                collection.reload().await;
                DeleteOutcome::Deleted
            }
            Err(err) => {
                notifier.notify(Severity::Error, "Error", err.message());
                DeleteOutcome::Failed
            }
        }
    }
}
