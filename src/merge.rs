//! Ordered layering of flat configuration maps.
//!
//! Every source loads into a [`Layer`]; the builder combines the layers
//! left-to-right with later layers overwriting earlier ones on key
//! collision. Keys compare case-insensitively, with lowercase as the
//! canonical stored form.

use std::collections::BTreeMap;

/// A single flattened configuration layer: colon-delimited key paths to
/// string values.
pub type Layer = BTreeMap<String, String>;

/// Normalize a key for storage and lookup.
pub fn normalize_key(key: &str) -> String {
    key.to_lowercase()
}

/// Combine layers left-to-right; later layers win on key collision.
///
/// Keys are normalized on insert, so a collision is detected regardless of
/// the casing each layer used.
pub fn merge_layers<I>(layers: I) -> Layer
where
    I: IntoIterator<Item = Layer>,
{
    let mut merged = Layer::new();
    for layer in layers {
        for (key, value) in layer {
            merged.insert(normalize_key(&key), value);
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer(pairs: &[(&str, &str)]) -> Layer {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn later_layer_wins_on_collision() {
        let merged = merge_layers(vec![
            layer(&[("logging:level", "Warning"), ("app:name", "base")]),
            layer(&[("logging:level", "Debug")]),
        ]);
        assert_eq!(merged.get("logging:level").map(String::as_str), Some("Debug"));
        assert_eq!(merged.get("app:name").map(String::as_str), Some("base"));
    }

    #[test]
    fn collision_is_case_insensitive() {
        let merged = merge_layers(vec![
            layer(&[("Logging:Level", "Warning")]),
            layer(&[("logging:level", "Debug")]),
        ]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged.get("logging:level").map(String::as_str), Some("Debug"));
    }

    #[test]
    fn empty_input_yields_empty_map() {
        assert!(merge_layers(Vec::new()).is_empty());
    }
}
