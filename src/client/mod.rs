//! Client layer for the link registry.
//!
//! `LinkRegistry` is the seam between the flows and the wire: it exposes the
//! registry operations with failures already classified into
//! [`RegistryError`] kinds, so nothing above this layer inspects HTTP status
//! codes. `HttpRegistry` is the reqwest-backed implementation.

mod http;
mod types;

pub use http::HttpRegistry;
pub use types::{CreateLinkRequest, HealthStatus, Link, LinkSummary};

use async_trait::async_trait;

use crate::errors::RegistryError;

/// Remote operations against the link registry.
#[async_trait]
pub trait LinkRegistry: Send + Sync {
    /// Create a link; `Conflict` when the requested code is taken.
    async fn create(&self, request: CreateLinkRequest) -> Result<Link, RegistryError>;

    /// All links, in the order the registry returns them.
    async fn list(&self) -> Result<Vec<LinkSummary>, RegistryError>;

    /// Full detail for one code; `NotFound` when unknown.
    async fn get_one(&self, code: &str) -> Result<Link, RegistryError>;

    /// Delete a link; `NotFound` when unknown.
    async fn delete(&self, code: &str) -> Result<(), RegistryError>;

    /// Registry health, pass-through display only.
    async fn health(&self) -> Result<HealthStatus, RegistryError>;
}
