//! FILENAME: tests/common/mod.rs
//! Test harness and fixtures for grid state integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use chrono::NaiveDate;
use grid_engine::{ColumnDescriptor, Record, Value};
use grid_state::{GridOptions, GridState};
use layout_store::{Layout, MemoryStore};

const FIRST_NAMES: [&str; 8] = ["John", "Jane", "Bob", "Alice", "Maria", "Wei", "Omar", "Sara"];
const LAST_NAMES: [&str; 7] = ["Smith", "Johnson", "Brown", "Garcia", "Lee", "Patel", "Novak"];
const GENDERS: [&str; 3] = ["male", "female", "other"];
const STATES: [&str; 4] = ["NY", "CA", "TX", "FL"];
const CITIES: [&str; 4] = ["New York", "Los Angeles", "Houston", "Miami"];
const INSURERS: [&str; 3] = ["Aetna", "Cigna", "Kaiser"];
const CONDITIONS: [&str; 4] = ["Asthma", "Diabetes", "Hypertension", "Migraine"];

/// Deterministic patient records. Every fifth patient has no last visit.
pub fn generate_patients(count: usize) -> Vec<Record> {
    (0..count)
        .map(|i| {
            let state = (i * 7 / 3) % STATES.len();
            let born = NaiveDate::from_ymd_opt(
                1950 + (i * 13 % 50) as i32,
                1 + (i % 12) as u32,
                1 + (i * 5 % 28) as u32,
            )
            .expect("valid birth date");
            let last_visit = (i % 5 != 0).then(|| {
                NaiveDate::from_ymd_opt(2023, 1 + (i * 7 % 12) as u32, 1 + (i % 28) as u32)
                    .expect("valid visit date")
            });
            let conditions: Vec<&str> = CONDITIONS
                .iter()
                .enumerate()
                .filter(|(c, _)| (i + c) % 3 == 0)
                .map(|(_, name)| *name)
                .collect();

            Record::new()
                .with("id", format!("P{:04}", i + 1))
                .with("firstName", FIRST_NAMES[i % FIRST_NAMES.len()])
                .with("lastName", LAST_NAMES[(i * 3) % LAST_NAMES.len()])
                .with("age", (18 + (i * 11) % 70) as i64)
                .with("gender", GENDERS[i % GENDERS.len()])
                .with("dateOfBirth", born)
                .with(
                    "address",
                    Record::new()
                        .with("city", CITIES[state])
                        .with("state", STATES[state]),
                )
                .with("insuranceProvider", INSURERS[(i / 2) % INSURERS.len()])
                .with("medicalConditions", conditions)
                .with("lastVisit", last_visit)
        })
        .collect()
}

pub fn patient_columns() -> Vec<ColumnDescriptor> {
    vec![
        ColumnDescriptor::new("id", "ID").groupable(false),
        ColumnDescriptor::new("firstName", "First Name"),
        ColumnDescriptor::new("lastName", "Last Name"),
        ColumnDescriptor::new("age", "Age"),
        ColumnDescriptor::new("gender", "Gender"),
        ColumnDescriptor::new("dateOfBirth", "Date of Birth").groupable(false),
        ColumnDescriptor::new("address.state", "State"),
        ColumnDescriptor::new("address.city", "City"),
        ColumnDescriptor::new("insuranceProvider", "Insurance"),
        ColumnDescriptor::new("medicalConditions", "Conditions").sortable(false),
        ColumnDescriptor::new("lastVisit", "Last Visit").groupable(false),
    ]
}

/// Test harness: a grid over a shared in-memory store, recording every
/// change notification.
pub struct TestHarness {
    pub store: MemoryStore,
    pub grid: GridState<MemoryStore>,
    pub changes: Rc<RefCell<Vec<Layout>>>,
}

impl TestHarness {
    pub fn new() -> Self {
        Self::with_store(MemoryStore::new())
    }

    /// A grid over `store`, as a second instance on the same page would be.
    pub fn with_store(store: MemoryStore) -> Self {
        let changes = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&changes);
        let grid = GridState::new(GridOptions::new(patient_columns()), store.clone())
            .expect("patient columns are unique")
            .with_on_change(move |layout| sink.borrow_mut().push(layout.clone()));
        TestHarness {
            store,
            grid,
            changes,
        }
    }

    pub fn change_count(&self) -> usize {
        self.changes.borrow().len()
    }

    pub fn last_change(&self) -> Option<Layout> {
        self.changes.borrow().last().cloned()
    }
}

pub fn text(record: &Record, path: &str) -> String {
    grid_engine::resolve(record, path).to_text()
}

pub fn value<'a>(record: &'a Record, path: &str) -> &'a Value {
    grid_engine::resolve(record, path)
}
