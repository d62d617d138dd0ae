//! Global theme settings: logo, social links, search provider.
//!
//! # Example
//!
//! ```toml
//! [themeConfig]
//! logo = "/logo.png"
//!
//! [[themeConfig.socialLinks]]
//! icon = "github"
//! link = "https://github.com/example/uvup"
//!
//! [themeConfig.search]
//! provider = "local"
//! ```

use crate::config::types::{ConfigDiagnostic, ConfigError, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// ThemeConfig
// ============================================================================

/// Theme settings shared by every locale.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeConfig {
    /// Site logo, relative to the site base (e.g. "/logo.png").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<PathBuf>,

    /// Icon/URL pairs rendered in the navbar, in order.
    pub social_links: Vec<SocialLink>,

    /// Search provider selection.
    pub search: SearchConfig,
}

impl ThemeConfig {
    /// Verify the search provider names a recognized value.
    pub(crate) fn validate_search(&self) -> Result<(), ConfigError> {
        let provider = &self.search.provider;
        if SearchProvider::from_name(provider).is_none() {
            return Err(ConfigDiagnostic::new(
                FieldPath::new("themeConfig")
                    .child("search")
                    .child("provider"),
                format!("unknown search provider `{provider}`"),
            )
            .with_hint(format!("one of: {}", SearchProvider::NAMES.join(", ")))
            .into_error());
        }
        Ok(())
    }

    /// Verify every social link target is a well-formed http(s) URL.
    pub(crate) fn validate_social_links(&self) -> Result<(), ConfigError> {
        let field = FieldPath::new("themeConfig").child("socialLinks");

        for social in &self.social_links {
            match url::Url::parse(&social.link) {
                Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
                Ok(parsed) => {
                    return Err(ConfigDiagnostic::new(
                        field,
                        format!(
                            "scheme `{}` not supported for `{}`, must be http or https",
                            parsed.scheme(),
                            social.icon
                        ),
                    )
                    .into_error());
                }
                Err(e) => {
                    return Err(ConfigDiagnostic::new(
                        field,
                        format!("invalid URL for `{}`: {e}", social.icon),
                    )
                    .with_hint("use format like https://github.com/example/uvup")
                    .into_error());
                }
            }
        }
        Ok(())
    }
}

/// One navbar social-platform entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Platform icon name (e.g. "github").
    pub icon: String,

    /// Target URL.
    pub link: String,
}

// ============================================================================
// Search
// ============================================================================

/// Search UI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Provider name; one of "local", "algolia", "none".
    pub provider: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            provider: "local".into(),
        }
    }
}

impl SearchConfig {
    /// Parsed provider. Total after a validated load; unknown strings on
    /// hand-built values fall back to the default.
    pub fn provider(&self) -> SearchProvider {
        SearchProvider::from_name(&self.provider).unwrap_or_default()
    }
}

/// Recognized search providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchProvider {
    /// Client-side index built at render time.
    #[default]
    Local,

    /// Hosted DocSearch-style external index.
    Algolia,

    /// No search UI.
    None,
}

impl SearchProvider {
    pub const NAMES: [&'static str; 3] = ["local", "algolia", "none"];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "local" => Some(Self::Local),
            "algolia" => Some(Self::Algolia),
            "none" => Some(Self::None),
            _ => None,
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_load;

    #[test]
    fn test_theme_defaults() {
        let config = test_load("");
        let theme = config.theme_config();

        assert!(theme.logo.is_none());
        assert!(theme.social_links.is_empty());
        assert_eq!(theme.search.provider(), SearchProvider::Local);
    }

    #[test]
    fn test_theme_parse() {
        let config = test_load(
            r#"[themeConfig]
logo = "/logo.png"

[[themeConfig.socialLinks]]
icon = "github"
link = "https://github.com/example/uvup"

[themeConfig.search]
provider = "algolia"
"#,
        );
        let theme = config.theme_config();

        assert_eq!(theme.logo, Some(PathBuf::from("/logo.png")));
        assert_eq!(theme.social_links.len(), 1);
        assert_eq!(theme.social_links[0].icon, "github");
        assert_eq!(theme.search.provider(), SearchProvider::Algolia);
    }

    #[test]
    fn test_provider_names_round_trip() {
        for name in SearchProvider::NAMES {
            assert!(SearchProvider::from_name(name).is_some());
        }
        assert!(SearchProvider::from_name("elastic").is_none());
    }
}
