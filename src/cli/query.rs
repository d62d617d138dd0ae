//! Query command implementation.
//!
//! Prints resolved configuration values as JSON for consumption by build
//! scripts and editors.

use super::args::QueryArgs;
use super::common::load_descriptor;
use crate::config::SiteConfig;
use anyhow::{Context, Result};
use serde_json::Value as JsonValue;
use std::path::Path;

/// Execute query command
pub fn run_query(args: &QueryArgs, path: &Path) -> Result<()> {
    let config = load_descriptor(path);

    if let Some(document_path) = &args.edit_link {
        let url = render_edit_link(&config, args.locale.as_deref(), document_path)?;
        println!("{url}");
        return Ok(());
    }

    let value = match &args.locale {
        Some(key) => serde_json::to_value(config.locale(key)?)?,
        None => serde_json::to_value(&config)?,
    };
    let value = filter_fields(value, args.fields.as_deref());

    let out = if args.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    println!("{out}");
    Ok(())
}

/// Render an edit link against the named locale, or the default locale.
fn render_edit_link(
    config: &SiteConfig,
    locale_key: Option<&str>,
    document_path: &str,
) -> Result<String> {
    let locale = match locale_key {
        Some(key) => config.locale(key)?,
        None => {
            let (_, locale) = config
                .default_locale()
                .context("descriptor has no default locale")?;
            locale
        }
    };
    Ok(locale.render_edit_link(document_path)?)
}

/// Keep only the requested top-level fields of a JSON object.
fn filter_fields(value: JsonValue, fields: Option<&[String]>) -> JsonValue {
    let Some(fields) = fields else {
        return value;
    };
    let JsonValue::Object(map) = value else {
        return value;
    };

    JsonValue::Object(
        map.into_iter()
            .filter(|(key, _)| fields.iter().any(|f| f == key))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_filter_fields() {
        let value = json!({"title": "uvup", "base": "/uvup/", "cleanUrls": true});

        let filtered = filter_fields(value.clone(), Some(&["title".into(), "base".into()]));
        let obj = filtered.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert!(obj.contains_key("title"));
        assert!(!obj.contains_key("cleanUrls"));

        // No filter passes through untouched
        assert_eq!(filter_fields(value.clone(), None), value);
    }
}
