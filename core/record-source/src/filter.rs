//! FILENAME: core/record-source/src/filter.rs
// PURPOSE: Field equality filters over records.

use std::collections::BTreeMap;

use grid_engine::{resolve, Record, Value};

/// Field path -> expected value. A record passes when every entry holds.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterCriteria {
    entries: BTreeMap<String, Value>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: impl Into<String>, expected: impl Into<Value>) -> Self {
        self.entries.insert(field.into(), expected.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Null never matches; a list matches when it contains the expected
    /// value; everything else (dates included) compares by value.
    pub fn matches(&self, record: &Record) -> bool {
        self.entries.iter().all(|(field, expected)| {
            match resolve(record, field) {
                Value::Null => false,
                Value::List(items) => items.contains(expected),
                actual => actual == expected,
            }
        })
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for FilterCriteria {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        FilterCriteria {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn patient() -> Record {
        Record::new()
            .with("gender", "female")
            .with("age", 42)
            .with("medicalConditions", vec!["Asthma", "Migraine"])
            .with("lastVisit", Utc.with_ymd_and_hms(2023, 4, 1, 9, 30, 0).unwrap())
            .with("address", Record::new().with("state", "NY"))
            .with("dischargedAt", Value::Null)
    }

    #[test]
    fn test_empty_criteria_match_everything() {
        assert!(FilterCriteria::new().matches(&patient()));
    }

    #[test]
    fn test_all_entries_must_hold() {
        let criteria = FilterCriteria::new()
            .with("gender", "female")
            .with("address.state", "NY");
        assert!(criteria.matches(&patient()));

        let criteria = criteria.with("age", 41);
        assert!(!criteria.matches(&patient()));
    }

    #[test]
    fn test_list_contains() {
        let record = patient();
        assert!(FilterCriteria::new().with("medicalConditions", "Asthma").matches(&record));
        assert!(!FilterCriteria::new().with("medicalConditions", "Diabetes").matches(&record));
    }

    #[test]
    fn test_dates_by_instant() {
        let same = Utc.with_ymd_and_hms(2023, 4, 1, 9, 30, 0).unwrap();
        let other = Utc.with_ymd_and_hms(2023, 4, 1, 9, 31, 0).unwrap();
        assert!(FilterCriteria::new().with("lastVisit", same).matches(&patient()));
        assert!(!FilterCriteria::new().with("lastVisit", other).matches(&patient()));
    }

    #[test]
    fn test_null_never_matches() {
        let record = patient();
        assert!(!FilterCriteria::new().with("dischargedAt", Value::Null).matches(&record));
        assert!(!FilterCriteria::new().with("missing.path", "x").matches(&record));
    }

    #[test]
    fn test_from_iterator() {
        let criteria: FilterCriteria = [("gender", "female"), ("address.state", "NY")]
            .into_iter()
            .collect();
        assert!(criteria.matches(&patient()));
    }
}
