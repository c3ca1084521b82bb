//! appsettings: layered application configuration
//!
//! Assembles an application's configuration from command-line arguments,
//! environment variables, and JSON settings files. A "current environment"
//! name (e.g. `Development`, `Production`) is resolved first, then an
//! environment-specific settings file is layered on top of the base
//! `appsettings.json`.
//!
//! The quick path reads ambient process state:
//!
//! ```no_run
//! let config = appsettings::build()?;
//! if let Some(host) = config.get("database:host") {
//!     println!("connecting to {host}");
//! }
//! # Ok::<(), appsettings::ConfigError>(())
//! ```
//!
//! Everything the quick path reads implicitly can also be passed in
//! explicitly through [`build_from`], which makes the whole pipeline
//! testable without touching process globals.

pub mod builder;
pub mod environment;
pub mod error;
pub mod merge;
pub mod resolver;
pub mod root;
pub mod source;

mod bind;

pub use builder::ConfigurationBuilder;
pub use environment::{resolve_environment, EnvVarNames};
pub use error::{ConfigError, Result};
pub use resolver::{build, build_from, BASE_SETTINGS_FILE};
pub use root::{ConfigurationRoot, ConfigurationSection};
pub use source::ConfigurationSource;
