//! Sidebar navigation tree.
//!
//! # Example
//!
//! ```toml
//! [[locales.root.themeConfig.sidebar]]
//! text = "Guide"
//! items = [
//!     { text = "Installation", link = "/guide/installation" },
//!     { text = "Quick Start", link = "/guide/quick-start" },
//! ]
//! ```

use crate::config::types::{ConfigDiagnostic, ConfigError, FieldPath};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// One titled group of links in a locale's sidebar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavSection {
    /// Section heading.
    pub text: String,

    /// Links in display order.
    #[serde(default)]
    pub items: Vec<NavItem>,
}

/// A single sidebar link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    /// Link label.
    pub text: String,

    /// Target path, relative to the site base (e.g. `/guide/installation`).
    pub link: String,
}

// ============================================================================
// Nav Path Checker (Validation Helper)
// ============================================================================

/// Helper to validate sidebar links against a locale's mount path.
///
/// Tracks every link seen so far within one locale, so duplicates are
/// reported against the second occurrence.
pub(crate) struct NavPathChecker<'a> {
    locale_key: &'a str,
    root: &'a str,
    seen: FxHashSet<&'a str>,
}

impl<'a> NavPathChecker<'a> {
    pub(crate) fn new(locale_key: &'a str, root: &'a str) -> Self {
        Self {
            locale_key,
            root,
            seen: FxHashSet::default(),
        }
    }

    /// Validate a single link, failing on the first violated invariant.
    pub(crate) fn check(&mut self, item: &'a NavItem, field: &FieldPath) -> Result<(), ConfigError> {
        if item.link.is_empty() {
            return Err(self
                .diagnostic(field, format!("sidebar item `{}` has an empty link", item.text))
                .into_error());
        }

        if !item.link.starts_with('/') {
            return Err(self
                .diagnostic(field, format!("link `{}` is not site-absolute", item.link))
                .with_hint("sidebar links start at the locale root, e.g. \"/guide/installation\"")
                .into_error());
        }

        if !item.link.starts_with(self.root) {
            return Err(self
                .diagnostic(
                    field,
                    format!(
                        "link `{}` is outside the locale root `{}`",
                        item.link, self.root
                    ),
                )
                .with_hint(format!("prefix it with `{}`", self.root))
                .into_error());
        }

        if !self.seen.insert(item.link.as_str()) {
            return Err(self
                .diagnostic(field, format!("duplicate sidebar link `{}`", item.link))
                .into_error());
        }

        Ok(())
    }

    fn diagnostic(&self, field: &FieldPath, message: String) -> ConfigDiagnostic {
        ConfigDiagnostic::new(field.clone(), message).for_locale(self.locale_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(link: &str) -> NavItem {
        NavItem {
            text: "Test".into(),
            link: link.into(),
        }
    }

    #[test]
    fn test_checker_accepts_rooted_unique_links() {
        let a = item("/zh/guide/installation");
        let b = item("/zh/guide/commands");
        let field = FieldPath::new("locales.zh.themeConfig.sidebar");
        let mut checker = NavPathChecker::new("zh", "/zh/");

        assert!(checker.check(&a, &field).is_ok());
        assert!(checker.check(&b, &field).is_ok());
    }

    #[test]
    fn test_checker_rejects_duplicate() {
        let a = item("/guide/installation");
        let b = item("/guide/installation");
        let field = FieldPath::new("locales.root.themeConfig.sidebar");
        let mut checker = NavPathChecker::new("root", "/");

        assert!(checker.check(&a, &field).is_ok());
        let err = checker.check(&b, &field).unwrap_err();
        assert!(format!("{err}").contains("duplicate sidebar link"));
    }

    #[test]
    fn test_checker_rejects_link_outside_root() {
        let stray = item("/guide/installation");
        let field = FieldPath::new("locales.zh.themeConfig.sidebar");
        let mut checker = NavPathChecker::new("zh", "/zh/");

        let err = checker.check(&stray, &field).unwrap_err();
        assert!(format!("{err}").contains("outside the locale root"));
    }

    #[test]
    fn test_checker_rejects_relative_link() {
        let relative = item("guide/installation");
        let field = FieldPath::new("locales.root.themeConfig.sidebar");
        let mut checker = NavPathChecker::new("root", "/");

        let err = checker.check(&relative, &field).unwrap_err();
        assert!(format!("{err}").contains("not site-absolute"));
    }
}
