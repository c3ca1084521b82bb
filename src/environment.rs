//! Environment name resolution.
//!
//! Determines the deployment environment (`Development`, `Staging`,
//! `Production`, ...) from the process argument vector and environment
//! variables. Both inputs are passed in explicitly so resolution stays a
//! pure function; [`crate::build`] wires in the real process state.

use crate::error::{ConfigError, Result};

/// Token scanned for in the argument vector.
pub const ENVIRONMENT_ARG: &str = "--environment";

/// Names of the environment variables consulted when the argument is absent.
///
/// The defaults follow the hosting convention the settings-file layout comes
/// from; override the fields to target a different pair.
#[derive(Debug, Clone)]
pub struct EnvVarNames {
    /// Checked first; wins when set to a non-whitespace value.
    pub primary: &'static str,
    /// Used verbatim when the primary is unset or blank.
    pub fallback: &'static str,
}

impl Default for EnvVarNames {
    fn default() -> Self {
        Self {
            primary: "ASPNETCORE_ENVIRONMENT",
            fallback: "DOTNET_ENVIRONMENT",
        }
    }
}

/// Resolve the effective environment name.
///
/// Precedence, first hit wins:
/// 1. the token following `--environment` in `args`, taken verbatim — an
///    empty string is honored as an empty environment name, and the
///    `--environment=Name` spelling is not recognized here (the scan looks
///    for the exact token);
/// 2. the primary variable, when set and not whitespace-only;
/// 3. the fallback variable, verbatim (`None` when unset).
///
/// # Errors
///
/// Returns [`ConfigError::MissingEnvironmentValue`] when `--environment` is
/// the final argument.
pub fn resolve_environment<F>(args: &[String], env: F, vars: &EnvVarNames) -> Result<Option<String>>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(index) = args.iter().position(|arg| arg == ENVIRONMENT_ARG) {
        let Some(value) = args.get(index + 1) else {
            return Err(ConfigError::MissingEnvironmentValue);
        };
        tracing::debug!("resolved environment {:?} from arguments", value);
        return Ok(Some(value.clone()));
    }

    let resolved = match env(vars.primary) {
        Some(value) if !value.trim().is_empty() => Some(value),
        _ => env(vars.fallback),
    };

    match &resolved {
        Some(value) => tracing::debug!("resolved environment {:?} from variables", value),
        None => tracing::debug!("no environment resolved"),
    }
    Ok(resolved)
}
