//! Type-safe descriptor field path.

use owo_colors::OwoColorize;
use std::fmt;

/// A dot-joined descriptor field path (e.g. `locales.zh.themeConfig.sidebar`).
///
/// Paths embed locale keys, so they are built at validation time with
/// [`FieldPath::child`] rather than derived as constants.
///
/// # Example
///
/// ```ignore
/// let field = FieldPath::new("locales").child("zh").child("link");
/// assert_eq!(field.as_str(), "locales.zh.link");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath(String);

impl FieldPath {
    #[inline]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Append a child segment: `locales` + `zh` -> `locales.zh`.
    pub fn child(&self, segment: &str) -> Self {
        Self(format!("{}.{}", self.0, segment))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_joins_with_dots() {
        let field = FieldPath::new("locales").child("zh").child("themeConfig");
        assert_eq!(field.as_str(), "locales.zh.themeConfig");
    }
}
