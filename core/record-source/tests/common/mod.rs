//! FILENAME: tests/common/mod.rs
//! Fixtures for record source integration tests.

#![allow(dead_code)]

use chrono::NaiveDate;
use grid_engine::Record;
use record_source::InMemoryRecordSource;

const FIRST_NAMES: [&str; 6] = ["John", "Jane", "Bob", "Alice", "Maria", "Wei"];
const LAST_NAMES: [&str; 5] = ["Smith", "Johnson", "Brown", "Garcia", "Lee"];
const GENDERS: [&str; 3] = ["male", "female", "other"];
const CITIES: [(&str, &str); 3] = [("Boston", "MA"), ("Chicago", "IL"), ("Seattle", "WA")];
const INSURERS: [&str; 3] = ["Aetna", "Cigna", "Kaiser"];
const CONDITIONS: [&str; 3] = ["Asthma", "Diabetes", "Hypertension"];

/// Fields searched by the patient directory.
pub const SEARCH_FIELDS: [&str; 6] = [
    "firstName",
    "lastName",
    "email",
    "insuranceProvider",
    "address.city",
    "address.state",
];

/// Deterministic patients; ids are `P0001`, `P0002`, ...
pub fn generate_patients(count: usize) -> Vec<Record> {
    (0..count)
        .map(|i| {
            let first = FIRST_NAMES[i % FIRST_NAMES.len()];
            let last = LAST_NAMES[(i * 2) % LAST_NAMES.len()];
            let (city, state) = CITIES[i % CITIES.len()];
            let visited =
                NaiveDate::from_ymd_opt(2024, 1 + (i % 12) as u32, 1 + (i % 27) as u32)
                    .expect("valid visit date");

            Record::new()
                .with("id", format!("P{:04}", i + 1))
                .with("firstName", first)
                .with("lastName", last)
                .with(
                    "email",
                    format!("{}.{}{}@example.com", first.to_lowercase(), last.to_lowercase(), i),
                )
                .with("gender", GENDERS[i % GENDERS.len()])
                .with("address", Record::new().with("city", city).with("state", state))
                .with("insuranceProvider", INSURERS[(i / 3) % INSURERS.len()])
                .with("medicalConditions", vec![CONDITIONS[i % CONDITIONS.len()]])
                .with("lastVisit", visited)
        })
        .collect()
}

pub fn patient_source(count: usize) -> InMemoryRecordSource {
    InMemoryRecordSource::new(generate_patients(count)).with_search_fields(SEARCH_FIELDS)
}
