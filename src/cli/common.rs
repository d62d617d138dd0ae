//! Shared helpers for CLI commands.

use crate::config::{find_config_file, SiteConfig};
use crate::log;
use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

/// Resolve the descriptor path: as given if it exists, otherwise by
/// searching upward from the current directory.
pub fn resolve_descriptor(config: &Path) -> Result<PathBuf> {
    match find_config_file(config) {
        Some(path) => Ok(path),
        None => bail!(
            "descriptor '{}' not found. Run 'docsite init' to create one.",
            config.display()
        ),
    }
}

/// Load a descriptor, printing the diagnostic and exiting on failure.
///
/// Load errors are user errors, not program errors, so they get the
/// formatted diagnostic instead of an error-chain dump.
pub fn load_descriptor(path: &Path) -> SiteConfig {
    match SiteConfig::load_path(path) {
        Ok(config) => config,
        Err(err) => {
            log!("error"; "{err}");
            if let Some(source) = std::error::Error::source(&err) {
                eprintln!("{source}");
            }
            std::process::exit(1);
        }
    }
}
