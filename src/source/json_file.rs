//! JSON settings file source.
//!
//! Reads a settings file and flattens it into colon-delimited key paths:
//! `{"Logging": {"LogLevel": {"Default": "Warning"}}}` becomes
//! `logging:loglevel:default = Warning`. Array elements use their index as
//! a path segment; `null` flattens to the empty string so the key still
//! exists and can shadow a lower layer.

use std::fs;
use std::io;
use std::path::Path;

use serde_json::Value;

use crate::error::{ConfigError, Result};
use crate::merge::{normalize_key, Layer};

/// Load and flatten a settings file.
///
/// A missing optional file yields an empty layer; a missing required file
/// is an error. Malformed JSON is an error regardless of optionality, as is
/// a top-level value that is not an object.
pub fn load(path: &Path, optional: bool) -> Result<Layer> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(source) if source.kind() == io::ErrorKind::NotFound => {
            if optional {
                tracing::debug!("optional settings file {} not found, skipping", path.display());
                return Ok(Layer::new());
            }
            return Err(ConfigError::MissingSettingsFile { path: path.to_path_buf() });
        }
        Err(source) => return Err(ConfigError::Io { path: path.to_path_buf(), source }),
    };

    let document: Value = serde_json::from_str(&content)
        .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;

    let members = match document {
        Value::Object(members) => members,
        other => {
            return Err(ConfigError::InvalidFormat {
                path: path.to_path_buf(),
                found: json_type(&other),
            })
        }
    };

    let mut layer = Layer::new();
    for (name, value) in &members {
        flatten(name, value, &mut layer);
    }
    Ok(layer)
}

fn flatten(path: &str, value: &Value, layer: &mut Layer) {
    match value {
        Value::Object(members) => {
            for (name, child) in members {
                flatten(&format!("{path}:{name}"), child, layer);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                flatten(&format!("{path}:{index}"), child, layer);
            }
        }
        Value::String(text) => {
            layer.insert(normalize_key(path), text.clone());
        }
        Value::Null => {
            layer.insert(normalize_key(path), String::new());
        }
        other => {
            layer.insert(normalize_key(path), other.to_string());
        }
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
