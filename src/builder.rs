//! Ordered composition of configuration sources.

use std::path::PathBuf;

use crate::error::Result;
use crate::merge;
use crate::root::ConfigurationRoot;
use crate::source::ConfigurationSource;

/// Builds a [`ConfigurationRoot`] from sources applied in registration
/// order. Registration order is precedence order: the last registered
/// source wins on key collision.
#[derive(Debug, Default)]
pub struct ConfigurationBuilder {
    sources: Vec<ConfigurationSource>,
}

impl ConfigurationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a source behind every source registered so far.
    #[must_use]
    pub fn add_source(mut self, source: ConfigurationSource) -> Self {
        self.sources.push(source);
        self
    }

    /// Load every source and merge the layers.
    ///
    /// # Errors
    ///
    /// Fails on the first source that fails to load; sources registered
    /// after it are never read.
    pub fn build(self) -> Result<ConfigurationRoot> {
        let mut layers = Vec::with_capacity(self.sources.len());
        let mut watched: Vec<PathBuf> = Vec::new();

        for source in &self.sources {
            let layer = source.load()?;
            tracing::debug!("loaded {} entries from {}", layer.len(), source.describe());
            layers.push(layer);

            if let ConfigurationSource::JsonFile { path, watch: true, .. } = source {
                watched.push(path.clone());
            }
        }

        Ok(ConfigurationRoot::new(merge::merge_layers(layers), watched))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command_line(tokens: &[&str]) -> ConfigurationSource {
        ConfigurationSource::CommandLine(tokens.iter().map(ToString::to_string).collect())
    }

    #[test]
    fn later_source_overrides_earlier() {
        let root = ConfigurationBuilder::new()
            .add_source(command_line(&["--logging:level=Warning", "--app:name=base"]))
            .add_source(command_line(&["--Logging:Level=Debug"]))
            .build()
            .expect("build");

        assert_eq!(root.get("logging:level"), Some("Debug"));
        assert_eq!(root.get("app:name"), Some("base"));
    }

    #[test]
    fn empty_builder_yields_empty_root() {
        let root = ConfigurationBuilder::new().build().expect("build");
        assert!(root.is_empty());
        assert!(root.watched_files().is_empty());
    }

    #[test]
    fn watch_flag_records_the_path() {
        let tmp = tempfile::TempDir::new().expect("tmp");
        let path = tmp.path().join("appsettings.json");
        std::fs::write(&path, "{}").expect("write settings");

        let root = ConfigurationBuilder::new()
            .add_source(ConfigurationSource::JsonFile {
                path: path.clone(),
                optional: false,
                watch: true,
            })
            .build()
            .expect("build");

        assert_eq!(root.watched_files(), &[path]);
    }
}
