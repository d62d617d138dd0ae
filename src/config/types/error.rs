//! Configuration error types.

use super::FieldPath;
use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// ConfigError
// ============================================================================

/// Descriptor loading errors. Fatal to the load operation - an invalid
/// descriptor is never partially constructed or silently repaired.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Descriptor parsing error")]
    Parse(#[from] toml::de::Error),

    // NOTE: No #[from] here - we don't want source() which causes duplicate output
    #[error("{0}")]
    Invalid(ConfigDiagnostic),
}

// ============================================================================
// ConfigDiagnostic
// ============================================================================

/// A single descriptor diagnostic.
///
/// Validation is fail-fast: a broken descriptor surfaces exactly one of
/// these, naming the first violated invariant and its location.
#[derive(Debug, Clone)]
pub struct ConfigDiagnostic {
    /// Descriptor field path (e.g. `locales.zh.themeConfig.sidebar`).
    pub field: FieldPath,
    /// Locale key, when one is implicated.
    pub locale: Option<String>,
    /// Error description.
    pub message: String,
    /// Fix hint (optional).
    pub hint: Option<String>,
}

impl ConfigDiagnostic {
    pub fn new(field: FieldPath, message: impl Into<String>) -> Self {
        Self {
            field,
            locale: None,
            message: message.into(),
            hint: None,
        }
    }

    pub fn for_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Wrap into the fatal load error.
    pub fn into_error(self) -> ConfigError {
        ConfigError::Invalid(self)
    }
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Field path in cyan brackets, locale key appended when present
        write!(
            f,
            "{}{}{}",
            "[".dimmed(),
            self.field.as_str().cyan(),
            "]".dimmed()
        )?;
        if let Some(locale) = &self.locale {
            write!(f, " {}", format_args!("(locale {locale})").dimmed())?;
        }
        writeln!(f)?;
        // Error message with red bullet
        write!(f, "{} {}", "→".red(), self.message)?;
        // Hint in yellow
        if let Some(hint) = &self.hint {
            write!(f, "\n  {} {}", "hint:".yellow(), hint)?;
        }
        Ok(())
    }
}

// ============================================================================
// Resolution errors
// ============================================================================

/// Requested locale key is not registered.
///
/// Recoverable: callers typically fall back to the default locale.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("locale `{0}` is not registered")]
pub struct LocaleNotFound(pub String);

/// Edit link rendering failure.
///
/// Unreachable for configs produced by a validated load; hitting it means a
/// hand-built locale bypassed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("edit link pattern `{0}` has no `:path` token")]
    MissingToken(String),
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("docsite.toml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("docsite.toml"));
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = ConfigDiagnostic::new(
            FieldPath::new("locales").child("zh").child("link"),
            "link matches the site base path",
        )
        .for_locale("zh")
        .with_hint("pick a distinct mount path, e.g. \"/zh/\"");

        let display = format!("{diag}");
        assert!(display.contains("locales.zh.link"));
        assert!(display.contains("locale zh"));
        assert!(display.contains("link matches the site base path"));
        assert!(display.contains("hint:"));
    }

    #[test]
    fn test_locale_not_found_display() {
        let err = LocaleNotFound("fr".into());
        assert_eq!(format!("{err}"), "locale `fr` is not registered");
    }
}
