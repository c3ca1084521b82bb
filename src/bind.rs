//! Typed binding: rebuilding nested values from flat key paths.
//!
//! The inverse of the JSON flattening: colon-delimited keys turn back into
//! nested objects, runs of contiguous numeric segments (`0`, `1`, ...) turn
//! into arrays, and leaf text that reads as a JSON number, boolean, or
//! `null` binds as that literal — anything else stays a string. The result
//! is handed to `serde_json` for deserialization into the caller's type.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ConfigError, Result};

/// Deserialize flat `(key path, value)` entries into `T`.
pub(crate) fn bind<'a, T, I>(entries: I) -> Result<T>
where
    T: DeserializeOwned,
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    serde_json::from_value(assemble(entries)).map_err(|source| ConfigError::Bind {
        target: std::any::type_name::<T>(),
        source,
    })
}

enum Node {
    Leaf(String),
    Branch(BTreeMap<String, Node>),
}

fn assemble<'a, I>(entries: I) -> Value
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut root = Node::Branch(BTreeMap::new());
    for (key, value) in entries {
        if key.is_empty() {
            // A leaf at the binding point itself (a section bound directly
            // to a scalar).
            root = Node::Leaf(value.to_string());
            continue;
        }
        insert(&mut root, key.split(':'), value);
    }
    resolve(root)
}

fn insert<'a, I>(node: &mut Node, mut segments: I, value: &str)
where
    I: Iterator<Item = &'a str>,
{
    let Some(segment) = segments.next() else {
        // End of the path. Children at the same path are more specific than
        // a value, so an existing branch keeps its members.
        if let Node::Branch(children) = node {
            if !children.is_empty() {
                return;
            }
        }
        *node = Node::Leaf(value.to_string());
        return;
    };

    if matches!(node, Node::Leaf(_)) {
        *node = Node::Branch(BTreeMap::new());
    }
    let Node::Branch(children) = node else { return };
    let child = children
        .entry(segment.to_string())
        .or_insert_with(|| Node::Branch(BTreeMap::new()));
    insert(child, segments, value);
}

fn resolve(node: Node) -> Value {
    match node {
        Node::Leaf(text) => leaf_value(&text),
        Node::Branch(children) => {
            let indices: Option<Vec<usize>> =
                children.keys().map(|key| key.parse::<usize>().ok()).collect();
            if let Some(mut indices) = indices.filter(|indices| !indices.is_empty()) {
                indices.sort_unstable();
                if indices.iter().enumerate().all(|(position, &index)| position == index) {
                    let mut items: Vec<(usize, Value)> = children
                        .into_iter()
                        .filter_map(|(key, child)| {
                            key.parse::<usize>().ok().map(|index| (index, resolve(child)))
                        })
                        .collect();
                    items.sort_by_key(|(index, _)| *index);
                    return Value::Array(items.into_iter().map(|(_, value)| value).collect());
                }
            }
            Value::Object(children.into_iter().map(|(key, child)| (key, resolve(child))).collect())
        }
    }
}

fn leaf_value(text: &str) -> Value {
    match serde_json::from_str::<Value>(text) {
        Ok(value @ (Value::Number(_) | Value::Bool(_) | Value::Null)) => value,
        _ => Value::String(text.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    fn entries<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Iterator<Item = (&'a str, &'a str)> {
        pairs.iter().copied()
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Server {
        host: String,
        port: u16,
        debug: bool,
        hosts: Vec<String>,
    }

    #[test]
    fn binds_nested_struct() {
        let pairs = [
            ("server:host", "localhost"),
            ("server:port", "8080"),
            ("server:debug", "true"),
            ("server:hosts:0", "a"),
            ("server:hosts:1", "b"),
        ];

        #[derive(Debug, Deserialize)]
        struct Outer {
            server: Server,
        }

        let outer: Outer = bind(entries(&pairs)).expect("bind");
        assert_eq!(
            outer.server,
            Server {
                host: "localhost".to_string(),
                port: 8080,
                debug: true,
                hosts: vec!["a".to_string(), "b".to_string()],
            }
        );
    }

    #[test]
    fn non_contiguous_indices_stay_an_object() {
        let tree = assemble(entries(&[("items:0", "a"), ("items:2", "b")]));
        assert_eq!(tree["items"]["0"], Value::String("a".to_string()));
        assert_eq!(tree["items"]["2"], Value::String("b".to_string()));
    }

    #[test]
    fn literal_leaves_parse_and_text_stays_text() {
        let tree = assemble(entries(&[
            ("n", "42"),
            ("f", "0.5"),
            ("b", "false"),
            ("nul", "null"),
            ("s", "hello"),
            ("empty", ""),
        ]));
        assert_eq!(tree["n"], Value::from(42));
        assert_eq!(tree["f"], Value::from(0.5));
        assert_eq!(tree["b"], Value::from(false));
        assert_eq!(tree["nul"], Value::Null);
        assert_eq!(tree["s"], Value::String("hello".to_string()));
        assert_eq!(tree["empty"], Value::String(String::new()));
    }

    #[test]
    fn children_win_over_a_value_at_the_same_path() {
        let tree = assemble(entries(&[("a", "scalar"), ("a:b", "nested")]));
        assert_eq!(tree["a"]["b"], Value::String("nested".to_string()));
    }

    #[test]
    fn empty_key_binds_a_bare_scalar() {
        let value: u16 = bind(entries(&[("", "8080")])).expect("bind");
        assert_eq!(value, 8080);
    }

    #[test]
    fn bind_error_names_the_target_type() {
        let err = bind::<u16, _>(entries(&[("", "not a number")])).unwrap_err();
        assert!(matches!(err, ConfigError::Bind { target, .. } if target.contains("u16")));
    }
}
