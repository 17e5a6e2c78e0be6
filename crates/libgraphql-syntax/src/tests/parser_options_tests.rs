//! Tests for `ParserOptions` defaults, builders, and serde support.

use serde::de::value::Error as ValueError;
use serde::de::value::MapDeserializer;
use serde::Deserialize;

use crate::ParserOptions;

#[test]
fn defaults() {
    let options = ParserOptions::default();
    assert!(options.ignore_comments);
    assert!(options.allow_extensions);
    assert_eq!(options.max_depth, ParserOptions::DEFAULT_MAX_DEPTH);
    assert_eq!(options.max_depth, 64);
}

#[test]
fn builders_override_single_fields() {
    let options = ParserOptions::default()
        .with_ignore_comments(false)
        .with_allow_extensions(false)
        .with_max_depth(16);
    assert_eq!(
        options,
        ParserOptions {
            ignore_comments: false,
            allow_extensions: false,
            max_depth: 16,
        },
    );

    let only_depth = ParserOptions::default().with_max_depth(3);
    assert!(only_depth.ignore_comments);
    assert!(only_depth.allow_extensions);
}

#[test]
fn bincode_roundtrip() {
    let options = ParserOptions::default()
        .with_ignore_comments(false)
        .with_max_depth(200);
    let config = bincode::config::standard();
    let bytes = bincode::serde::encode_to_vec(&options, config).unwrap();
    let (decoded, read): (ParserOptions, usize) =
        bincode::serde::decode_from_slice(&bytes, config).unwrap();
    assert_eq!(decoded, options);
    assert_eq!(read, bytes.len());
}

/// Fields missing from a config source fall back to their defaults.
#[test]
fn partial_config_uses_defaults() {
    let entries = vec![("max_depth", 8usize)];
    let deserializer = MapDeserializer::<_, ValueError>::new(entries.into_iter());
    let options = ParserOptions::deserialize(deserializer).unwrap();
    assert_eq!(options, ParserOptions::default().with_max_depth(8));
}

#[test]
fn partial_config_flags() {
    let entries = vec![("allow_extensions", false)];
    let deserializer = MapDeserializer::<_, ValueError>::new(entries.into_iter());
    let options = ParserOptions::deserialize(deserializer).unwrap();
    assert!(!options.allow_extensions);
    assert!(options.ignore_comments);
    assert_eq!(options.max_depth, ParserOptions::DEFAULT_MAX_DEPTH);
}

#[test]
fn empty_config_is_default() {
    let entries: Vec<(&str, bool)> = Vec::new();
    let deserializer = MapDeserializer::<_, ValueError>::new(entries.into_iter());
    let options = ParserOptions::deserialize(deserializer).unwrap();
    assert_eq!(options, ParserOptions::default());
}
