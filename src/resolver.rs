//! Top-level configuration assembly.
//!
//! Resolves the current environment, then layers the configuration sources
//! in a fixed registration order: command line, base settings file,
//! environment overlay file.

use std::env;
use std::path::Path;

use crate::builder::ConfigurationBuilder;
use crate::environment::{resolve_environment, EnvVarNames};
use crate::error::Result;
use crate::root::ConfigurationRoot;
use crate::source::ConfigurationSource;

/// Base settings file, required at build time.
pub const BASE_SETTINGS_FILE: &str = "appsettings.json";

/// File name of the environment overlay (`appsettings.Production.json`).
pub fn overlay_file_name(environment: &str) -> String {
    format!("appsettings.{environment}.json")
}

/// Build the configuration from ambient process state: the real argument
/// vector, the process environment, and the current directory.
///
/// # Errors
///
/// Fails when `appsettings.json` is missing or malformed, or when
/// `--environment` is the final argument. A missing overlay file is not an
/// error.
pub fn build() -> Result<ConfigurationRoot> {
    let args: Vec<String> = env::args().collect();
    build_from(&args, |name| env::var(name).ok(), Path::new("."), &EnvVarNames::default())
}

/// Pure form of [`build`]: every ambient input is a parameter.
///
/// Sources are registered in a fixed order, and the last registered source
/// wins on key collision:
///
/// 1. command-line arguments,
/// 2. `appsettings.json` (required, watched),
/// 3. `appsettings.<environment>.json` (optional, unwatched) — only when an
///    environment name resolved.
///
/// File values therefore override command-line values for the same key.
/// This reproduces the registration order the settings layout originally
/// shipped with and is kept for compatibility.
///
/// File paths resolve against `base_dir`.
///
/// # Errors
///
/// See [`build`].
pub fn build_from<F>(
    args: &[String],
    env: F,
    base_dir: &Path,
    vars: &EnvVarNames,
) -> Result<ConfigurationRoot>
where
    F: Fn(&str) -> Option<String>,
{
    let environment = resolve_environment(args, env, vars)?;

    let mut builder = ConfigurationBuilder::new()
        .add_source(ConfigurationSource::CommandLine(args.to_vec()))
        .add_source(ConfigurationSource::JsonFile {
            path: base_dir.join(BASE_SETTINGS_FILE),
            optional: false,
            watch: true,
        });

    if let Some(environment) = &environment {
        builder = builder.add_source(ConfigurationSource::JsonFile {
            path: base_dir.join(overlay_file_name(environment)),
            optional: true,
            watch: false,
        });
    }

    builder.build()
}
