//! Front-matter extraction from YAML (`---`) or TOML (`+++`) blocks.

use anyhow::{Result, anyhow};
use serde_json::Value;

use super::FrontMatter;

/// Front-matter extractor for Markdown/MDX sources.
pub struct FrontMatterExtractor;

impl FrontMatterExtractor {
    /// Extract front-matter and return `(front_matter, body)`.
    ///
    /// Returns `Ok(None)` when the document has no front-matter block.
    /// Malformed TOML is an error; the YAML-like form is line based and
    /// skips lines it cannot read.
    pub fn extract<'a>(&self, content: &'a str) -> Result<Option<(FrontMatter, &'a str)>> {
        match Self::detect(content) {
            Some((block, body, is_toml)) => {
                let front = if is_toml {
                    Self::parse_toml(block)?
                } else {
                    Self::parse_yaml_like(block)
                };
                Ok(Some((front, body)))
            }
            None => Ok(None),
        }
    }

    /// Parse simple YAML-like front-matter (`key: value` per line).
    ///
    /// Only top-level keys are read; indented lines belong to a nested map
    /// or list and are skipped.
    fn parse_yaml_like(content: &str) -> FrontMatter {
        let mut front = FrontMatter::default();

        for line in content.lines() {
            if line.starts_with([' ', '\t']) {
                continue;
            }
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((key, value)) = line.split_once(':') {
                let key = key.trim();
                if key.is_empty() || key.contains(char::is_whitespace) {
                    continue;
                }
                front.set(key, parse_yaml_value(value.trim()));
            }
        }

        front
    }

    /// Parse TOML front-matter. Dates may be bare TOML datetimes.
    fn parse_toml(content: &str) -> Result<FrontMatter> {
        let table: toml::Table = toml::from_str(content)
            .map_err(|e| anyhow!("invalid TOML front-matter: {}", e.message()))?;

        let mut front = FrontMatter::default();
        for (key, value) in table {
            front.set(&key, toml_to_json(value));
        }
        Ok(front)
    }

    /// Detect and split out the front-matter block.
    /// Returns `(block, body, is_toml)` if found.
    fn detect(content: &str) -> Option<(&str, &str, bool)> {
        let trimmed = content.trim_start_matches('\u{feff}').trim_start();

        for (fence, is_toml) in [("---", false), ("+++", true)] {
            if let Some(after) = trimmed.strip_prefix(fence)
                && let Some(end) = after.find(&format!("\n{fence}"))
            {
                let block = after[..end].trim();
                let body = after[end + 1 + fence.len()..].trim_start_matches(['\r', '\n']);
                return Some((block, body, is_toml));
            }
        }

        None
    }
}

/// Parse a YAML-like scalar into JSON.
///
/// - Quoted: `"a: b"` / `'a'` -> string without quotes
/// - Booleans, `null`/`~`, integers, floats
/// - Inline lists: `[a, b]` -> `["a", "b"]`
/// - Everything else: string as written
///
/// Dates stay strings: `2021-03-05` is not a number.
fn parse_yaml_value(s: &str) -> Value {
    if s.is_empty() || s == "~" || s.eq_ignore_ascii_case("null") {
        return Value::Null;
    }

    for quote in ['"', '\''] {
        if s.len() >= 2 && s.starts_with(quote) && s.ends_with(quote) {
            return Value::String(s[1..s.len() - 1].to_string());
        }
    }

    if s.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if s.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }

    if let Ok(n) = s.parse::<i64>() {
        return Value::Number(n.into());
    }
    if let Ok(n) = s.parse::<f64>()
        && let Some(num) = serde_json::Number::from_f64(n)
    {
        return Value::Number(num);
    }

    if let Some(inner) = s.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
        let items = inner
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(|item| match parse_yaml_value(item) {
                Value::Null => Value::String(item.to_string()),
                v => v,
            })
            .collect();
        return Value::Array(items);
    }

    Value::String(s.to_string())
}

/// Convert a TOML value to JSON, rendering datetimes as their TOML text.
fn toml_to_json(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::Number(i.into()),
        toml::Value::Float(f) => serde_json::Number::from_f64(f).map_or(Value::Null, Value::Number),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(k, v)| (k, toml_to_json(v)))
                .collect(),
        ),
    }
}
