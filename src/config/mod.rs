pub mod location;

use crate::utils::error::{AppError, Result};
use serde_yaml::{Mapping, Value};
use std::path::Path;

pub use location::ConfigLocation;

/// Top level of a parsed configuration file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigMapping {
    entries: Mapping,
}

impl ConfigMapping {
    /// 從 YAML 字串解析配置
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Self::parse(content, Path::new("<inline>"))
    }

    fn parse(content: &str, origin: &Path) -> Result<Self> {
        let parse_error = |source| AppError::ParseError {
            path: origin.to_path_buf(),
            source,
        };

        // Duplicate keys are rejected here rather than last-one-wins.
        let mut document: Value = serde_yaml::from_str(content).map_err(parse_error)?;
        document.apply_merge().map_err(parse_error)?;

        if let Some(tag) = first_tag(&document) {
            return Err(AppError::UnsupportedTag {
                path: origin.to_path_buf(),
                tag,
            });
        }

        match document {
            Value::Mapping(entries) => Ok(Self { entries }),
            other => Err(AppError::NotAMapping {
                path: origin.to_path_buf(),
                found: kind_of(&other),
            }),
        }
    }

    /// Exact, case-sensitive lookup.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// The value under `key` rendered as text, or `default` when the key is absent.
    pub fn get_str_or(&self, key: &str, default: &str) -> String {
        self.get(key)
            .map(render_value)
            .unwrap_or_else(|| default.to_string())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// 從 YAML 檔案載入配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ConfigMapping> {
        let path = path.as_ref();
        tracing::debug!("Loading configuration from {}", path.display());

        // read_to_string drops the handle before parsing starts
        let content = std::fs::read_to_string(path).map_err(|source| {
            let path = path.to_path_buf();
            match source.kind() {
                std::io::ErrorKind::NotFound => AppError::FileNotFound { path },
                std::io::ErrorKind::InvalidData => AppError::InvalidEncoding { path, source },
                _ => AppError::Io { path, source },
            }
        })?;

        let mapping = ConfigMapping::parse(&content, path).inspect_err(|e| {
            tracing::warn!("Rejected configuration file: {}", e);
        })?;

        tracing::debug!("Loaded {} top-level keys", mapping.len());
        Ok(mapping)
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null document",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

/// Custom `!tag`s are not part of the plain YAML data model.
fn first_tag(value: &Value) -> Option<String> {
    match value {
        Value::Tagged(tagged) => Some(tagged.tag.to_string()),
        Value::Sequence(items) => items.iter().find_map(first_tag),
        Value::Mapping(entries) => entries
            .iter()
            .find_map(|(k, v)| first_tag(k).or_else(|| first_tag(v))),
        _ => None,
    }
}

/// Renders a YAML value on a single line. Strings are emitted as-is,
/// collections in flow style.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Sequence(items) => {
            let items: Vec<String> = items.iter().map(render_value).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Mapping(entries) => {
            let pairs: Vec<String> = entries
                .iter()
                .map(|(k, v)| format!("{}: {}", render_value(k), render_value(v)))
                .collect();
            format!("{{{}}}", pairs.join(", "))
        }
        Value::Tagged(tagged) => format!("{} {}", tagged.tag, render_value(&tagged.value)),
    }
}
