//! Check command implementation.

use super::common::load_descriptor;
use crate::{debug, log};
use anyhow::Result;
use std::path::Path;

/// Load and validate a descriptor, reporting a summary on success.
pub fn run_check(path: &Path) -> Result<()> {
    debug!("check"; "loading {}", path.display());
    let config = load_descriptor(path);

    let locale_count = config.locales().len();
    let link_count: usize = config
        .locales()
        .values()
        .map(|locale| {
            locale
                .theme_config
                .sidebar
                .iter()
                .map(|section| section.items.len())
                .sum::<usize>()
        })
        .sum();

    log!(
        "check";
        "descriptor ok: {} locale{}, {} sidebar link{}",
        locale_count,
        if locale_count == 1 { "" } else { "s" },
        link_count,
        if link_count == 1 { "" } else { "s" }
    );
    Ok(())
}
