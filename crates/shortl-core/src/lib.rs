//! Provider registry and dispatch core for shortl
//!
//! This crate is the whole of the shortening system: a registry mapping
//! provider names to URL-shortening transformations, and a dispatcher that
//! resolves a provider reference, invokes it, and returns the short URL.
//! Everything around it (the `shortl` CLI, the MCP server) is a thin
//! adapter over this API.
//!
//! # Architecture
//!
//! ```text
//!   [ shortl-cli ]      [ shortl-mcp ]
//!          \                 /
//!           v               v
//!          [ shortl-core (this crate) ]
//!            |- Shortener ── dispatch
//!            |- ProviderRegistry ── built-in + custom tables
//!            |- providers ── isgd / tinyurl / ulvis / zws (HTTP)
//!            |- ScriptProvider ── compiled via shortl-script
//!            +- ShortenerConfig
//! ```
//!
//! Built-in providers are registered once at construction and are immutable
//! afterwards; custom providers come and go at runtime, registered either as
//! trait objects or as source text compiled by the restricted interpreter in
//! `shortl-script`.
//!
//! # Example
//!
//! ```no_run
//! # async fn example() -> shortl_core::Result<()> {
//! use shortl_core::{Registration, Shortener};
//!
//! let shortener = Shortener::new()?;
//! let name = shortener.register_custom(
//!     Registration::Source("fn tag(url) { \"x-\" + url }".to_string()),
//!     None,
//! )?;
//! let short = shortener.shorten("https://www.example.com", name.as_str()).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod provider;
pub mod providers;
pub mod registry;
pub mod script;
pub mod shortener;

pub use config::ShortenerConfig;
pub use error::{Error, Result};
pub use provider::{FnProvider, Provider};
pub use registry::{ProviderKind, ProviderRegistry};
pub use script::ScriptProvider;
pub use shortener::{ProviderRef, Registration, Shortener, ShortenerBuilder};
