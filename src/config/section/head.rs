//! Document head tag entries.
//!
//! # Example
//!
//! ```toml
//! [[head]]
//! tag = "link"
//! attrs = { rel = "icon", href = "/uvup/favicon.ico" }
//!
//! [[head]]
//! tag = "meta"
//! attrs = { name = "theme-color", content = "#3c8772" }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single metadata element injected into every rendered page's head.
///
/// Entries render in descriptor order; attribute keys are unique within one
/// tag by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadTag {
    /// Element name (`link`, `meta`, `script`, ...).
    pub tag: String,

    /// Attribute name/value pairs.
    #[serde(default)]
    pub attrs: BTreeMap<String, String>,
}

impl HeadTag {
    /// Look up an attribute value by name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }
}
