//! Configuration sources.
//!
//! Each source loads into a flat [`Layer`](crate::merge::Layer); the
//! builder merges the layers in registration order.

use std::path::PathBuf;

use crate::error::Result;
use crate::merge::Layer;

pub mod command_line;
pub mod json_file;

/// One origin of configuration key-value pairs.
#[derive(Debug, Clone)]
pub enum ConfigurationSource {
    /// The host process argument vector, parsed as `--key value` and
    /// `--key=value` tokens.
    CommandLine(Vec<String>),

    /// A JSON settings file, flattened into colon-delimited key paths.
    JsonFile {
        path: PathBuf,
        /// When false, a missing file fails the build.
        optional: bool,
        /// Marks the file for reload-on-change. The build performs a single
        /// read either way; flagged paths are reported through
        /// [`ConfigurationRoot::watched_files`](crate::ConfigurationRoot::watched_files)
        /// so a host can wire its own file watcher.
        watch: bool,
    },
}

impl ConfigurationSource {
    /// Load this source into a flat layer.
    pub fn load(&self) -> Result<Layer> {
        match self {
            Self::CommandLine(args) => Ok(command_line::parse(args)),
            Self::JsonFile { path, optional, .. } => json_file::load(path, *optional),
        }
    }

    /// Short human-readable name for log lines.
    pub fn describe(&self) -> String {
        match self {
            Self::CommandLine(args) => format!("command line ({} tokens)", args.len()),
            Self::JsonFile { path, .. } => path.display().to_string(),
        }
    }
}
