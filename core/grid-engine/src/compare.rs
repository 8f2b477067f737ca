//! FILENAME: core/grid-engine/src/compare.rs
//! PURPOSE: Orders records under a multi-key sort configuration.
//! CONTEXT: Each key is evaluated in priority order. The first key whose
//! values compare unequal decides the result; later keys are consulted only
//! when every earlier key is a tie. The sort itself is `slice::sort_by`,
//! which is stable, so fully tied records keep their input order.

use std::borrow::Borrow;
use std::cmp::Ordering;

use chrono::SecondsFormat;

use crate::collate::locale_compare;
use crate::path::resolve;
use crate::sort::{SortConfig, SortDirection};
use crate::value::{Record, Value};

/// Compares two values for one sort key.
///
/// Rules, in precedence order:
/// 1. Equal values tie.
/// 2. A single null sorts first ascending and last descending.
/// 3. Two dates compare by instant.
/// 4. Anything else compares by string representation with locale ordering.
pub fn compare_values(a: &Value, b: &Value, direction: SortDirection) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }

    let ascending = match (a, b) {
        (Value::Null, _) => Ordering::Less,
        (_, Value::Null) => Ordering::Greater,
        (Value::Date(da), Value::Date(db)) => da.cmp(db),
        _ => locale_compare(&sort_text(a), &sort_text(b)),
    };

    direction.apply(ascending)
}

/// String form used by rule 4. Dates keep full sub-second precision so
/// that text order agrees with instant order when dates meet strings.
fn sort_text(value: &Value) -> String {
    match value {
        Value::Date(d) => d.to_rfc3339_opts(SecondsFormat::Nanos, true),
        other => other.to_text(),
    }
}

/// Compares two records under `keys`; the first non-tied key wins.
pub fn compare_by_keys(a: &Record, b: &Record, keys: &SortConfig) -> Ordering {
    for key in keys {
        let ordering = compare_values(
            resolve(a, &key.field),
            resolve(b, &key.field),
            key.direction,
        );
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

/// Stably sorts `items` in place.
pub fn sort_by_keys<R: Borrow<Record>>(items: &mut [R], keys: &SortConfig) {
    if keys.is_empty() {
        return;
    }
    items.sort_by(|a, b| compare_by_keys(a.borrow(), b.borrow(), keys));
}

/// Returns references to `records` in sorted order, leaving the input alone.
pub fn sorted<'a, R: Borrow<Record>>(records: &'a [R], keys: &SortConfig) -> Vec<&'a Record> {
    let mut rows: Vec<&'a Record> = records.iter().map(Borrow::borrow).collect();
    sort_by_keys(&mut rows, keys);
    rows
}
