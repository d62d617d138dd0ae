//! Init command implementation.

use crate::log;
use anyhow::{bail, Result};
use std::fs;
use std::path::Path;

/// Starter descriptor written by `docsite init`.
const STARTER: &str = r#"title = "My Docs"
description = "Documentation site"
base = "/"
lastUpdated = true
cleanUrls = true

[[head]]
tag = "link"
attrs = { rel = "icon", href = "/favicon.ico" }

[themeConfig]
logo = "/logo.png"

[[themeConfig.socialLinks]]
icon = "github"
link = "https://github.com/OWNER/REPO"

[themeConfig.search]
provider = "local"

[locales.root]
label = "English"
lang = "en-US"

[[locales.root.themeConfig.sidebar]]
text = "Guide"
items = [
    { text = "Installation", link = "/guide/installation" },
    { text = "Quick Start", link = "/guide/quick-start" },
]

[locales.root.themeConfig.editLink]
pattern = "https://github.com/OWNER/REPO/edit/main/docs/:path"
text = "Edit this page on GitHub"

[locales.root.themeConfig.footer]
message = "Released under the MIT License."
"#;

/// Write a starter descriptor into `dir` (default: current directory).
pub fn run_init(dir: Option<&Path>, config_name: &Path) -> Result<()> {
    let dir = match dir {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir()?,
    };
    fs::create_dir_all(&dir)?;

    let path = dir.join(config_name);
    if path.exists() {
        bail!("'{}' already exists", path.display());
    }

    fs::write(&path, STARTER)?;
    log!("init"; "wrote {}", path.display());
    Ok(())
}
