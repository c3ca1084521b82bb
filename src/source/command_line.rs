//! Command-line configuration source.
//!
//! Parses a raw argument vector into configuration entries. Only tokens
//! starting with `--` are recognized; everything else — the executable path
//! at argv[0] included — is skipped, so the full vector can be passed
//! through unfiltered.

use crate::merge::{normalize_key, Layer};

/// Parse `--key=value` and `--key value` tokens into a flat layer.
///
/// For the space-separated form the following token is consumed as the
/// value whatever it looks like. A trailing `--key` with no following token
/// is skipped, as is a bare `--`. Keys may contain colons for nested paths
/// (`--logging:level Debug`); later duplicates overwrite earlier entries.
pub fn parse(args: &[String]) -> Layer {
    let mut layer = Layer::new();
    let mut tokens = args.iter();
    while let Some(token) = tokens.next() {
        let Some(rest) = token.strip_prefix("--") else {
            continue;
        };
        let (key, value) = match rest.split_once('=') {
            Some((key, value)) => (key, value.to_string()),
            None => match tokens.next() {
                Some(next) => (rest, next.clone()),
                None => continue,
            },
        };
        if key.is_empty() {
            continue;
        }
        layer.insert(normalize_key(key), value);
    }
    layer
}
