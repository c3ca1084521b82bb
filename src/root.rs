//! The merged configuration mapping.

use std::path::PathBuf;

use serde::de::DeserializeOwned;

use crate::bind;
use crate::error::Result;
use crate::merge::{normalize_key, Layer};

/// Immutable configuration mapping produced by a build.
///
/// Keys are colon-delimited paths (`logging:loglevel:default`) compared
/// case-insensitively; values are strings. Iteration order is the sorted
/// key order.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigurationRoot {
    data: Layer,
    watched: Vec<PathBuf>,
}

impl ConfigurationRoot {
    pub(crate) fn new(data: Layer, watched: Vec<PathBuf>) -> Self {
        Self { data, watched }
    }

    /// Look up a value by key path, case-insensitively.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.data.get(&normalize_key(key)).map(String::as_str)
    }

    /// All keys, in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.data.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// View of the keys underneath `prefix:`.
    ///
    /// The section always exists; one over an unknown prefix is simply
    /// empty.
    pub fn section(&self, prefix: &str) -> ConfigurationSection<'_> {
        ConfigurationSection { root: self, prefix: normalize_key(prefix) }
    }

    /// Deserialize the whole configuration into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Bind`](crate::ConfigError::Bind) when the
    /// values do not fit the target type.
    pub fn bind<T: DeserializeOwned>(&self) -> Result<T> {
        bind::bind(self.iter())
    }

    /// Files registered for reload-on-change.
    ///
    /// The build performs a single read; these are the paths a host should
    /// watch if it wants live reloads.
    pub fn watched_files(&self) -> &[PathBuf] {
        &self.watched
    }
}

/// Borrowed view over the keys underneath a prefix.
///
/// Keys are addressed relative to the prefix: for a root holding
/// `logging:loglevel:default`, `root.section("logging")` exposes
/// `loglevel:default`.
#[derive(Debug, Clone)]
pub struct ConfigurationSection<'a> {
    root: &'a ConfigurationRoot,
    prefix: String,
}

impl ConfigurationSection<'_> {
    /// Look up a value by key path relative to the section prefix.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.root.get(&format!("{}:{}", self.prefix, key))
    }

    /// Relative keys under this section, in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries().map(|(key, _)| key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries().next().is_none()
    }

    /// Deserialize this section into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Bind`](crate::ConfigError::Bind) when the
    /// values do not fit the target type.
    pub fn bind<T: DeserializeOwned>(&self) -> Result<T> {
        bind::bind(self.entries())
    }

    fn entries(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        let nested = format!("{}:", self.prefix);
        self.root.data.iter().filter_map(move |(key, value)| {
            if let Some(relative) = key.strip_prefix(&nested) {
                Some((relative, value.as_str()))
            } else if key == &self.prefix {
                // A value at the section path itself: the empty relative key.
                Some(("", value.as_str()))
            } else {
                None
            }
        })
    }
}
