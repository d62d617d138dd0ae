//! Per-locale configuration: navigation tree, edit links, UI strings.
//!
//! Each entry under `[locales.*]` describes one language variant of the
//! site. Exactly one entry - the default locale - omits `link` and is
//! mounted directly at the site base path; every other entry declares its
//! own mount path.
//!
//! # Example
//!
//! ```toml
//! [locales.zh]
//! label = "简体中文"
//! lang = "zh-Hans"
//! link = "/zh/"
//!
//! [locales.zh.themeConfig.editLink]
//! pattern = "https://github.com/example/uvup/edit/main/docs/:path"
//! text = "在 GitHub 上编辑此页"
//!
//! [locales.zh.themeConfig.footer]
//! message = "基于 MIT 许可发布"
//! ```

use crate::config::section::nav::{NavPathChecker, NavSection};
use crate::config::types::{ConfigDiagnostic, ConfigError, FieldPath, TemplateError};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Placeholder substituted with the document path in edit link patterns.
pub const EDIT_PATH_TOKEN: &str = ":path";

// ============================================================================
// LocaleConfig
// ============================================================================

/// One language variant of the documentation site.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocaleConfig {
    /// Display name shown in the language menu.
    pub label: String,

    /// BCP-47 language tag (e.g. "en-US", "zh-Hans").
    pub lang: String,

    /// Root path override (e.g. "/zh/"). Absent only for the default locale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    /// Locale-scoped theme settings.
    pub theme_config: LocaleThemeConfig,
}

impl LocaleConfig {
    /// Mount path of this locale relative to the site base.
    ///
    /// The default locale sits at `/`; every other locale at its `link`.
    pub fn root_path(&self) -> &str {
        self.link.as_deref().unwrap_or("/")
    }

    /// Whether this is the default locale (no `link` override).
    pub fn is_default(&self) -> bool {
        self.link.is_none()
    }

    /// Build an "edit this page" URL for a document in this locale.
    ///
    /// Pure substitution of `document_path` at the `:path` token:
    /// `.../edit/main/docs/:path` + `guide/installation.md` becomes
    /// `.../edit/main/docs/guide/installation.md`. The token is guaranteed
    /// present after a validated load; the error arm only fires for
    /// hand-built locales.
    pub fn render_edit_link(&self, document_path: &str) -> Result<String, TemplateError> {
        let pattern = &self.theme_config.edit_link.pattern;
        if !pattern.contains(EDIT_PATH_TOKEN) {
            return Err(TemplateError::MissingToken(pattern.clone()));
        }
        Ok(pattern.replacen(EDIT_PATH_TOKEN, document_path, 1))
    }

    /// Walk the sidebar and verify every link is non-empty, rooted under
    /// this locale's mount path, and unique within the locale.
    pub(crate) fn validate_sidebar(&self, key: &str) -> Result<(), ConfigError> {
        let field = FieldPath::new("locales")
            .child(key)
            .child("themeConfig")
            .child("sidebar");
        let mut checker = NavPathChecker::new(key, self.root_path());

        for section in &self.theme_config.sidebar {
            for item in &section.items {
                checker.check(item, &field)?;
            }
        }
        Ok(())
    }

    /// Verify the edit link pattern carries the `:path` token exactly once.
    pub(crate) fn validate_edit_link(&self, key: &str) -> Result<(), ConfigError> {
        let field = FieldPath::new("locales")
            .child(key)
            .child("themeConfig")
            .child("editLink")
            .child("pattern");
        let pattern = &self.theme_config.edit_link.pattern;

        if pattern.is_empty() {
            return Err(ConfigDiagnostic::new(field, "every locale needs an edit link pattern")
                .for_locale(key)
                .with_hint(format!(
                    "e.g. pattern = \"https://github.com/example/uvup/edit/main/docs/{EDIT_PATH_TOKEN}\""
                ))
                .into_error());
        }

        match pattern.matches(EDIT_PATH_TOKEN).count() {
            1 => Ok(()),
            0 => Err(ConfigDiagnostic::new(
                field,
                format!("pattern `{pattern}` has no `{EDIT_PATH_TOKEN}` token"),
            )
            .for_locale(key)
            .with_hint(format!(
                "the document path is substituted at `{EDIT_PATH_TOKEN}`"
            ))
            .into_error()),
            n => Err(ConfigDiagnostic::new(
                field,
                format!("pattern contains the `{EDIT_PATH_TOKEN}` token {n} times, expected exactly one"),
            )
            .for_locale(key)
            .into_error()),
        }
    }
}

// ============================================================================
// Locale theme sections
// ============================================================================

/// Theme settings scoped to a single locale.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocaleThemeConfig {
    /// Sidebar sections in display order.
    pub sidebar: Vec<NavSection>,

    /// "Edit this page" link template.
    pub edit_link: EditLinkConfig,

    /// Footer strings.
    pub footer: FooterConfig,

    /// Localized UI labels.
    #[serde(flatten)]
    pub ui: UiStrings,
}

/// URL template for per-document edit links.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditLinkConfig {
    /// URL template with a `:path` placeholder.
    pub pattern: String,

    /// Link label (e.g. "Edit this page on GitHub").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Footer strings rendered on every page of the locale.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FooterConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
}

// ============================================================================
// UI strings
// ============================================================================

/// Localized UI labels. Every field is optional; the renderer falls back to
/// its built-in strings for absent keys. Keys with no declared schema are
/// kept in `extra` rather than rejected.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UiStrings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_footer: Option<DocFooterLabels>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub outline: Option<OutlineLabels>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<LastUpdatedLabel>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang_menu_label: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_to_top_label: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sidebar_menu_label: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark_mode_switch_label: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub light_mode_switch_title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark_mode_switch_title: Option<String>,

    /// Undeclared UI-string keys, kept as-is.
    #[serde(flatten)]
    pub extra: FxHashMap<String, toml::Value>,
}

/// Previous/next pagination labels.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DocFooterLabels {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

/// "On this page" outline label.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OutlineLabels {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// "Last updated" timestamp label.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LastUpdatedLabel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

// ============================================================================
// tests
// ============================================================================
