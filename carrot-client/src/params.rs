//! Request parameter lists
//!
//! Every operation assembles an ordered list of `(name, value)` pairs from
//! its typed inputs. Optional string-typed CLI flags use the empty string as
//! their "unset" sentinel, and `filtered` strips exactly those entries before
//! the list is serialized into query parameters or a request body. Numeric,
//! boolean, JSON, and file-upload values are never filtered, so `limit=0` and
//! `offset=0` survive to the wire.

use std::path::PathBuf;

use serde_json::Value;

/// A single parameter value
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// Plain text; an empty string means the parameter was not set
    Text(String),
    /// Integer value (limit, offset, position)
    Number(i64),
    /// Boolean flag
    Bool(bool),
    /// Parsed JSON payload read from a local file
    Json(Value),
    /// Local file content to be uploaded as a named multipart part
    File {
        /// Path to read at body-build time
        path: PathBuf,
        /// Fixed filename reported to the server
        filename: &'static str,
    },
}

impl ParamValue {
    /// Render the value the way it travels in a query string or form field.
    pub(crate) fn render(&self) -> String {
        match self {
            ParamValue::Text(text) => text.clone(),
            ParamValue::Number(n) => n.to_string(),
            ParamValue::Bool(b) => b.to_string(),
            ParamValue::Json(value) => value.to_string(),
            ParamValue::File { path, .. } => path.display().to_string(),
        }
    }
}

/// An ordered parameter list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    entries: Vec<(&'static str, ParamValue)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a text parameter. An empty value is kept here and dropped by
    /// `filtered`, matching the CLI's empty-string sentinel for unset flags.
    pub fn text(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.entries.push((name, ParamValue::Text(value.into())));
        self
    }

    /// Append an integer parameter. Zero is a meaningful value and survives
    /// filtering.
    pub fn number(mut self, name: &'static str, value: i64) -> Self {
        self.entries.push((name, ParamValue::Number(value)));
        self
    }

    /// Append an integer parameter only when one was supplied.
    pub fn opt_number(mut self, name: &'static str, value: Option<i64>) -> Self {
        if let Some(value) = value {
            self.entries.push((name, ParamValue::Number(value)));
        }
        self
    }

    /// Append a boolean flag. `false` survives filtering.
    pub fn flag(mut self, name: &'static str, value: bool) -> Self {
        self.entries.push((name, ParamValue::Bool(value)));
        self
    }

    /// Append a parsed JSON payload only when one was supplied.
    pub fn json(mut self, name: &'static str, value: Option<Value>) -> Self {
        if let Some(value) = value {
            self.entries.push((name, ParamValue::Json(value)));
        }
        self
    }

    /// Append a raw value.
    pub fn value(mut self, name: &'static str, value: ParamValue) -> Self {
        self.entries.push((name, value));
        self
    }

    /// Drop the entries whose value is the empty string, preserving order and
    /// every other entry.
    pub fn filtered(self) -> Self {
        Self {
            entries: self
                .entries
                .into_iter()
                .filter(|(_, value)| !matches!(value, ParamValue::Text(text) if text.is_empty()))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(&'static str, ParamValue)> {
        self.entries.iter()
    }

    pub(crate) fn into_entries(self) -> Vec<(&'static str, ParamValue)> {
        self.entries
    }

    /// Render the list as query-string pairs.
    pub(crate) fn into_query_pairs(self) -> Vec<(String, String)> {
        self.entries
            .into_iter()
            .map(|(name, value)| (name.to_string(), value.render()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filtered_drops_only_empty_text() {
        let params = Params::new()
            .text("name", "Sword of Protection")
            .text("description", "")
            .number("limit", 0)
            .number("offset", 0)
            .flag("delete_failed", false)
            .text("sort", "");

        let filtered = params.filtered();
        let names: Vec<&str> = filtered.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["name", "limit", "offset", "delete_failed"]);
    }

    #[test]
    fn test_filtered_preserves_order() {
        let params = Params::new()
            .text("b", "2")
            .text("skip", "")
            .text("a", "1")
            .filtered();
        let names: Vec<&str> = params.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_filtered_keeps_json_values() {
        let params = Params::new()
            .json("test_input", Some(serde_json::json!({})))
            .filtered();
        assert!(!params.is_empty());
    }

    #[test]
    fn test_query_pair_rendering() {
        let pairs = Params::new()
            .text("sort", "asc(name)")
            .number("limit", 20)
            .flag("delete_failed", true)
            .into_query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("sort".to_string(), "asc(name)".to_string()),
                ("limit".to_string(), "20".to_string()),
                ("delete_failed".to_string(), "true".to_string()),
            ]
        );
    }
}
