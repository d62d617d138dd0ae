//! Configuration loader and resolver for documentation sites.
//!
//! Validates a declarative `docsite.toml` descriptor - global metadata, a
//! locale registry with per-locale navigation trees and UI strings, and
//! theme settings - and freezes it into an immutable
//! [`SiteConfig`](config::SiteConfig) for an external renderer to consume.
//!
//! ```ignore
//! let config = SiteConfig::load_path(Path::new("docsite.toml"))?;
//! let zh = config.locale("zh")?;
//! let url = zh.render_edit_link("guide/installation.md")?;
//! ```

pub mod cli;
pub mod config;
pub mod logger;

pub use config::{ConfigError, LocaleNotFound, SiteConfig, TemplateError};
