//! Site descriptor management for `docsite.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Descriptor section definitions
//! │   ├── head       # [[head]] tags
//! │   ├── locale     # [locales.*] and per-locale theme settings
//! │   ├── nav        # sidebar navigation tree
//! │   └── theme      # [themeConfig]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, LocaleNotFound, TemplateError
//! │   └── field      # FieldPath
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Lifecycle
//!
//! The descriptor is parsed and validated once ([`SiteConfig::from_str`] or
//! [`SiteConfig::load_path`]), then held as read-only state for the life of
//! the consuming process. Fields are private and reachable only through
//! accessors, so the mount point and locale registry cannot change after
//! initialization; the value is plain owned data and shares freely across
//! threads.

pub mod section;
pub mod types;
mod util;

// Re-export from section/
pub use section::{
    EditLinkConfig, FooterConfig, HeadTag, LocaleConfig, LocaleThemeConfig, NavItem, NavSection,
    SearchConfig, SearchProvider, SocialLink, ThemeConfig, UiStrings, EDIT_PATH_TOKEN,
};

// Re-export from types/
pub use types::{ConfigDiagnostic, ConfigError, FieldPath, LocaleNotFound, TemplateError};

pub use util::find_config_file;

use crate::log;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration for a documentation site.
///
/// Field names on the wire are the descriptor's camelCase names; see the
/// module docs for construction and lifecycle.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteConfig {
    /// Site title.
    title: String,

    /// Site description.
    description: String,

    /// Mount point for all locale roots; starts and ends with `/`.
    /// Immutable after initialization.
    base: String,

    /// Show per-page "last updated" timestamps.
    last_updated: bool,

    /// Generate extension-less page URLs.
    clean_urls: bool,

    /// Head tags injected into every page, in order.
    head: Vec<HeadTag>,

    /// Locale registry; exactly one entry is the default locale.
    locales: BTreeMap<String, LocaleConfig>,

    /// Global theme settings.
    theme_config: ThemeConfig,
}

impl SiteConfig {
    /// Parse and validate an in-memory descriptor.
    ///
    /// Pure function of the input: the same descriptor always yields the
    /// same configuration or the same first-invariant diagnostic.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a descriptor file.
    ///
    /// Unknown fields are collected during parsing and logged as warnings;
    /// they never fail the load.
    pub fn load_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {field}");
        }
    }

    // ========================================================================
    // accessors
    // ========================================================================

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Mount point for all locale roots (e.g. `/uvup/`).
    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn last_updated(&self) -> bool {
        self.last_updated
    }

    pub fn clean_urls(&self) -> bool {
        self.clean_urls
    }

    /// Head tags in render order.
    pub fn head(&self) -> &[HeadTag] {
        &self.head
    }

    /// The full locale registry, keyed by locale key, in deterministic order.
    pub fn locales(&self) -> &BTreeMap<String, LocaleConfig> {
        &self.locales
    }

    pub fn theme_config(&self) -> &ThemeConfig {
        &self.theme_config
    }

    /// Resolve a registered locale by key.
    pub fn locale(&self, key: &str) -> Result<&LocaleConfig, LocaleNotFound> {
        self.locales
            .get(key)
            .ok_or_else(|| LocaleNotFound(key.to_string()))
    }

    /// The locale mounted at the site base path (the one without a `link`
    /// override). `Some` for every validated configuration.
    pub fn default_locale(&self) -> Option<(&str, &LocaleConfig)> {
        self.locales
            .iter()
            .find(|(_, locale)| locale.is_default())
            .map(|(key, locale)| (key.as_str(), locale))
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate the descriptor against its invariants.
    ///
    /// Checks run in a fixed order and stop at the first violation, so a
    /// broken descriptor always gets a single-cause diagnostic.
    fn validate(&self) -> Result<(), ConfigError> {
        self.validate_base()?;
        self.validate_locale_registry()?;
        for (key, locale) in &self.locales {
            locale.validate_sidebar(key)?;
        }
        for (key, locale) in &self.locales {
            locale.validate_edit_link(key)?;
        }
        self.theme_config.validate_search()?;
        self.validate_head()?;
        self.theme_config.validate_social_links()?;
        Ok(())
    }

    fn validate_base(&self) -> Result<(), ConfigError> {
        let field = FieldPath::new("base");

        if self.base.is_empty() {
            return Err(ConfigDiagnostic::new(field, "`base` is required")
                .with_hint("set the site mount point, e.g. base = \"/uvup/\"")
                .into_error());
        }
        if !util::is_mount_path(&self.base) {
            return Err(ConfigDiagnostic::new(
                field,
                format!("mount point `{}` must start and end with `/`", self.base),
            )
            .with_hint("e.g. base = \"/uvup/\"")
            .into_error());
        }
        Ok(())
    }

    fn validate_locale_registry(&self) -> Result<(), ConfigError> {
        let field = FieldPath::new("locales");

        if self.locales.is_empty() {
            return Err(ConfigDiagnostic::new(field, "no locales are defined")
                .with_hint("declare a default locale, e.g. [locales.root]")
                .into_error());
        }

        let default_keys: Vec<&str> = self
            .locales
            .iter()
            .filter(|(_, locale)| locale.is_default())
            .map(|(key, _)| key.as_str())
            .collect();

        match default_keys.len() {
            1 => {}
            0 => {
                return Err(ConfigDiagnostic::new(
                    field,
                    "no default locale: every locale declares a `link` override",
                )
                .with_hint("leave `link` unset on exactly one locale")
                .into_error());
            }
            _ => {
                return Err(ConfigDiagnostic::new(
                    field,
                    format!(
                        "{} locales lack a `link` override ({}), only the default locale may",
                        default_keys.len(),
                        default_keys.join(", ")
                    ),
                )
                .into_error());
            }
        }

        // Non-default links: well-formed, unique, distinct from the base
        let mut seen: FxHashMap<&str, &str> = FxHashMap::default();
        for (key, locale) in &self.locales {
            let Some(link) = locale.link.as_deref() else {
                continue;
            };
            let field = FieldPath::new("locales").child(key).child("link");

            if link.is_empty() {
                return Err(ConfigDiagnostic::new(field, "`link` must not be empty")
                    .for_locale(key)
                    .with_hint("e.g. link = \"/zh/\"")
                    .into_error());
            }
            if !util::is_mount_path(link) {
                return Err(ConfigDiagnostic::new(
                    field,
                    format!("mount path `{link}` must start and end with `/`"),
                )
                .for_locale(key)
                .into_error());
            }
            if link == self.base {
                return Err(ConfigDiagnostic::new(
                    field,
                    format!("`{link}` matches the site base path"),
                )
                .for_locale(key)
                .with_hint("only the default locale mounts at the base; pick a distinct path")
                .into_error());
            }
            if let Some(other) = seen.insert(link, key) {
                return Err(ConfigDiagnostic::new(
                    field,
                    format!("`{link}` is already used by locale `{other}`"),
                )
                .for_locale(key)
                .into_error());
            }
        }
        Ok(())
    }

    fn validate_head(&self) -> Result<(), ConfigError> {
        for (idx, entry) in self.head.iter().enumerate() {
            if entry.tag.trim().is_empty() {
                return Err(ConfigDiagnostic::new(
                    FieldPath::new("head"),
                    format!("entry {idx} has an empty tag name"),
                )
                .into_error());
            }
        }
        Ok(())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Build a minimal valid descriptor with `extra` spliced in between the
/// top-level fields and the default locale tables.
#[cfg(test)]
pub(crate) fn test_descriptor(extra: &str) -> String {
    format!(
        r#"title = "uvup"
description = "Python Environment Manager"
base = "/uvup/"

{extra}

[locales.root]
label = "English"
lang = "en-US"

[locales.root.themeConfig.editLink]
pattern = "https://github.com/example/uvup/edit/main/docs/:path"
"#
    )
}

/// Parse and validate a descriptor built by [`test_descriptor`].
#[cfg(test)]
pub(crate) fn test_load(extra: &str) -> SiteConfig {
    SiteConfig::from_str(&test_descriptor(extra)).unwrap()
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn load_err(extra: &str) -> ConfigError {
        SiteConfig::from_str(&test_descriptor(extra)).unwrap_err()
    }

    fn diagnostic(err: ConfigError) -> ConfigDiagnostic {
        match err {
            ConfigError::Invalid(diag) => diag,
            other => panic!("expected validation diagnostic, got: {other}"),
        }
    }

    #[test]
    fn test_from_str_invalid_toml() {
        // Invalid TOML syntax - unclosed bracket
        let result = SiteConfig::from_str("[locales\ntitle = \"uvup\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_minimal_descriptor_loads() {
        let config = test_load("");

        assert_eq!(config.title(), "uvup");
        assert_eq!(config.description(), "Python Environment Manager");
        assert_eq!(config.base(), "/uvup/");
        assert!(!config.last_updated());
        assert!(!config.clean_urls());
        assert_eq!(config.locales().len(), 1);
    }

    #[test]
    fn test_top_level_flags() {
        let config = test_load("lastUpdated = true\ncleanUrls = true");
        assert!(config.last_updated());
        assert!(config.clean_urls());
    }

    #[test]
    fn test_missing_base() {
        let err = SiteConfig::from_str("title = \"uvup\"\n[locales.root]\nlabel = \"English\"")
            .unwrap_err();
        let diag = diagnostic(err);
        assert_eq!(diag.field.as_str(), "base");
        assert!(diag.message.contains("required"));
    }

    #[test]
    fn test_malformed_base() {
        for base in ["uvup/", "/uvup", "docs"] {
            let err = SiteConfig::from_str(&format!(
                "base = \"{base}\"\n[locales.root]\nlabel = \"English\""
            ))
            .unwrap_err();
            let diag = diagnostic(err);
            assert_eq!(diag.field.as_str(), "base");
            assert!(diag.message.contains("start and end with"));
        }
    }

    #[test]
    fn test_no_locales() {
        let err = SiteConfig::from_str("base = \"/uvup/\"").unwrap_err();
        let diag = diagnostic(err);
        assert_eq!(diag.field.as_str(), "locales");
    }

    #[test]
    fn test_missing_default_locale() {
        // Every locale declares a link override
        let err = SiteConfig::from_str(
            r#"base = "/uvup/"

[locales.en]
label = "English"
link = "/en/"

[locales.en.themeConfig.editLink]
pattern = "https://github.com/example/uvup/edit/main/docs/:path"
"#,
        )
        .unwrap_err();

        let diag = diagnostic(err);
        assert_eq!(diag.field.as_str(), "locales");
        assert!(diag.message.contains("no default locale"));
    }

    #[test]
    fn test_two_default_locales() {
        let err = load_err("[locales.en]\nlabel = \"English (en)\"\nlang = \"en\"");
        let diag = diagnostic(err);
        assert_eq!(diag.field.as_str(), "locales");
        assert!(diag.message.contains("only the default locale"));
    }

    #[test]
    fn test_locale_link_matches_base() {
        let err = load_err(
            r#"[locales.zh]
label = "简体中文"
lang = "zh-Hans"
link = "/uvup/"

[locales.zh.themeConfig.editLink]
pattern = "https://github.com/example/uvup/edit/main/docs/:path"
"#,
        );
        let diag = diagnostic(err);
        assert_eq!(diag.field.as_str(), "locales.zh.link");
        assert_eq!(diag.locale.as_deref(), Some("zh"));
        assert!(diag.message.contains("matches the site base path"));
    }

    #[test]
    fn test_duplicate_locale_links() {
        let err = load_err(
            r#"[locales.zh]
label = "简体中文"
lang = "zh-Hans"
link = "/zh/"

[locales.zh.themeConfig.editLink]
pattern = "https://github.com/example/uvup/edit/main/docs/:path"

[locales.tw]
label = "繁體中文"
lang = "zh-Hant"
link = "/zh/"

[locales.tw.themeConfig.editLink]
pattern = "https://github.com/example/uvup/edit/main/docs/:path"
"#,
        );
        let diag = diagnostic(err);
        assert!(diag.message.contains("already used by locale"));
    }

    #[test]
    fn test_duplicate_nav_path() {
        let err = load_err(
            r#"[[locales.root.themeConfig.sidebar]]
text = "Guide"
items = [
    { text = "Installation", link = "/guide/installation" },
    { text = "Install Again", link = "/guide/installation" },
]
"#,
        );
        let diag = diagnostic(err);
        assert_eq!(diag.field.as_str(), "locales.root.themeConfig.sidebar");
        assert_eq!(diag.locale.as_deref(), Some("root"));
        assert!(diag.message.contains("/guide/installation"));
    }

    #[test]
    fn test_nav_path_outside_locale_root() {
        let err = load_err(
            r#"[locales.zh]
label = "简体中文"
lang = "zh-Hans"
link = "/zh/"

[[locales.zh.themeConfig.sidebar]]
text = "指南"
items = [{ text = "安装", link = "/guide/installation" }]

[locales.zh.themeConfig.editLink]
pattern = "https://github.com/example/uvup/edit/main/docs/:path"
"#,
        );
        let diag = diagnostic(err);
        assert_eq!(diag.locale.as_deref(), Some("zh"));
        assert!(diag.message.contains("outside the locale root"));
    }

    #[test]
    fn test_edit_link_without_token() {
        let err = SiteConfig::from_str(
            r#"base = "/uvup/"

[locales.root]
label = "English"
lang = "en-US"

[locales.root.themeConfig.editLink]
pattern = "https://github.com/example/uvup/edit/main/docs/"
"#,
        )
        .unwrap_err();

        let diag = diagnostic(err);
        assert_eq!(
            diag.field.as_str(),
            "locales.root.themeConfig.editLink.pattern"
        );
        assert!(diag.message.contains(":path"));
    }

    #[test]
    fn test_edit_link_with_two_tokens() {
        let err = SiteConfig::from_str(
            r#"base = "/uvup/"

[locales.root]
label = "English"
lang = "en-US"

[locales.root.themeConfig.editLink]
pattern = "https://github.com/:path/edit/main/docs/:path"
"#,
        )
        .unwrap_err();

        let diag = diagnostic(err);
        assert!(diag.message.contains("2 times"));
    }

    #[test]
    fn test_unknown_search_provider() {
        let err = load_err("[themeConfig.search]\nprovider = \"elastic\"");
        let diag = diagnostic(err);
        assert_eq!(diag.field.as_str(), "themeConfig.search.provider");
        assert!(diag.message.contains("elastic"));
    }

    #[test]
    fn test_empty_head_tag_name() {
        let err = load_err("[[head]]\ntag = \"\"");
        let diag = diagnostic(err);
        assert_eq!(diag.field.as_str(), "head");
    }

    #[test]
    fn test_invalid_social_link_url() {
        let err = load_err("[[themeConfig.socialLinks]]\nicon = \"github\"\nlink = \"not a url\"");
        let diag = diagnostic(err);
        assert_eq!(diag.field.as_str(), "themeConfig.socialLinks");
    }

    #[test]
    fn test_locale_resolution() {
        let config = test_load(
            r#"[locales.zh]
label = "简体中文"
lang = "zh-Hans"
link = "/zh/"

[locales.zh.themeConfig.editLink]
pattern = "https://github.com/example/uvup/edit/main/docs/:path"
"#,
        );

        // Every registered key resolves
        for key in config.locales().keys() {
            assert!(config.locale(key).is_ok());
        }

        let zh = config.locale("zh").unwrap();
        assert_eq!(zh.link.as_deref(), Some("/zh/"));
        assert_eq!(zh.root_path(), "/zh/");

        let (key, root) = config.default_locale().unwrap();
        assert_eq!(key, "root");
        assert_eq!(root.label, "English");

        assert_eq!(config.locale("fr"), Err(LocaleNotFound("fr".into())));
    }

    #[test]
    fn test_load_is_idempotent() {
        let descriptor = test_descriptor(
            r#"lastUpdated = true

[[head]]
tag = "link"
attrs = { rel = "icon", href = "/uvup/favicon.ico" }
"#,
        );

        let first = SiteConfig::from_str(&descriptor).unwrap();
        let second = SiteConfig::from_str(&descriptor).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_nav_paths_round_trip() {
        let descriptor = test_descriptor(
            r#"[[locales.root.themeConfig.sidebar]]
text = "Guide"
items = [
    { text = "Installation", link = "/guide/installation" },
    { text = "Commands", link = "/guide/commands" },
]

[[locales.root.themeConfig.sidebar]]
text = "Reference"
items = [{ text = "Shell Integration", link = "/reference/shell-integration" }]
"#,
        );
        let config = SiteConfig::from_str(&descriptor).unwrap();

        // Every resolvable nav path appears verbatim in the input
        let (_, root) = config.default_locale().unwrap();
        let mut count = 0;
        for section in &root.theme_config.sidebar {
            for item in &section.items {
                assert!(descriptor.contains(&item.link));
                count += 1;
            }
        }
        assert_eq!(count, 3);
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = test_descriptor("[unknownSection]\nfield = \"value\"");
        let (config, ignored) = SiteConfig::parse_with_ignored(&content).unwrap();

        assert_eq!(config.title, "uvup");
        assert!(ignored.iter().any(|f| f.contains("unknownSection")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let (_, ignored) = SiteConfig::parse_with_ignored(&test_descriptor("")).unwrap();
        assert!(ignored.is_empty(), "unexpected unknown fields: {ignored:?}");
    }

    #[test]
    fn test_load_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docsite.toml");
        fs::write(&path, test_descriptor("")).unwrap();

        let config = SiteConfig::load_path(&path).unwrap();
        assert_eq!(config.base(), "/uvup/");

        let missing = dir.path().join("missing.toml");
        assert!(matches!(
            SiteConfig::load_path(&missing),
            Err(ConfigError::Io(..))
        ));
    }
}
