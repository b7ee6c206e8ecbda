//! Stateful user-visible flows: dashboard collection, link creation,
//! delete confirmation, redirect resolution and the stats view.
//!
//! Flows own no rendering. Anything that would be a global in a UI
//! framework — the toast system, the router — is injected as a capability
//! trait so every flow is testable in isolation.

pub mod collection;
pub mod create;
pub mod delete;
pub mod redirect;
pub mod stats;

pub use collection::{EmptyState, LinkCollection};
pub use create::{CreateLinkFlow, SubmitOutcome};
pub use delete::{DeleteLinkFlow, DeleteOutcome};
pub use redirect::{RedirectOutcome, RedirectResolver};
pub use stats::{StatsState, StatsView};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// Fire-and-forget notification sink (the toast system, a status line,
/// stdout — the flows do not care).
pub trait Notifier: Send + Sync {
    fn notify(&self, severity: Severity, title: &str, message: &str);
}

/// Opaque "take the user to this target" capability.
pub trait Navigator: Send + Sync {
    fn navigate(&self, target: &str);
}
