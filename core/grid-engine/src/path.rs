//! FILENAME: core/grid-engine/src/path.rs
//! PURPOSE: Resolves dotted field paths (e.g. "address.city") against records.
//! CONTEXT: Column descriptors, sort keys and group specs all address record
//! attributes by path. Resolution is total: a missing segment, or a segment
//! that walks into a scalar, yields `Value::Null` instead of an error.

use crate::value::{Record, Value};

static NULL: Value = Value::Null;

/// Resolves `path` against `record`.
///
/// Each `.`-separated segment looks up a key in a map. Numeric segments also
/// index into lists (`"medicalConditions.0"`). Returns `Value::Null` as soon
/// as a segment cannot be followed.
pub fn resolve<'a>(record: &'a Record, path: &str) -> &'a Value {
    let mut segments = path.split('.');

    let mut current = match segments.next().and_then(|first| record.get(first)) {
        Some(value) => value,
        None => return &NULL,
    };

    for segment in segments {
        current = match step(current, segment) {
            Some(value) => value,
            None => return &NULL,
        };
    }

    current
}

fn step<'a>(value: &'a Value, segment: &str) -> Option<&'a Value> {
    match value {
        Value::Map(map) => map.get(segment),
        Value::List(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }
}
