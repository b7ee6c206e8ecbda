//! TinyDash - terminal client for a TinyLink short-link registry
//!
//! The registry itself is an external HTTP service; this crate is the
//! client side: creating links (with optional custom codes), listing and
//! searching them, per-link statistics, confirmed deletion, and resolving a
//! short code to its target.
//!
//! # Architecture
//! - `client`: registry HTTP client behind the `LinkRegistry` seam,
//!   failures pre-classified for the layers above
//! - `flows`: the stateful flows (collection, create, delete, redirect,
//!   stats) with injected notifier/navigator capabilities
//! - `utils`: pure validation and time formatting
//! - `cli` / `tui`: the two presentation surfaces
//! - `config` / `logging`: environment configuration and tracing setup

pub mod cli;
pub mod client;
pub mod config;
pub mod errors;
pub mod flows;
pub mod logging;
pub mod tui;
pub mod utils;
