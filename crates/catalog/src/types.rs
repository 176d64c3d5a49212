//! Core domain types for the coaster catalog.
//!
//! - `CoasterRecord`: one row of the source table, with named fields
//! - `Catalog`: the write-once, insertion-ordered collection of records

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique key for a coaster: `name_park_state`
pub type CoasterKey = String;

// =============================================================================
// Coaster Record
// =============================================================================

/// A single roller coaster from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoasterRecord {
    pub name: String,
    pub state: String,
    /// Design style, e.g. "Sitdown", "Suspended", "Flying"
    pub design: String,
    pub inversion_count: u32,
    pub max_height_ft: f64,
    pub top_speed_mph: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    pub park: String,
}

impl CoasterRecord {
    /// Build the composite key for this record.
    ///
    /// Assumes no park repeats a coaster name and no state repeats a park
    /// name. Nothing enforces that; see [`Catalog::from_records`].
    pub fn key(&self) -> CoasterKey {
        format!("{}_{}_{}", self.name, self.park, self.state)
    }

    /// Whether the coaster turns riders upside down at least once
    pub fn has_inversions(&self) -> bool {
        self.inversion_count > 0
    }
}

// =============================================================================
// Catalog - The In-Memory Collection
// =============================================================================

/// Main data structure holding every coaster record.
///
/// Records are kept in insertion order so iteration is deterministic;
/// `by_key` maps each key to its position in `records`.
#[derive(Debug, Default)]
pub struct Catalog {
    pub(crate) records: Vec<CoasterRecord>,
    pub(crate) by_key: HashMap<CoasterKey, usize>,
}

impl Catalog {
    /// Creates a new, empty Catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a record by its composite key
    pub fn get(&self, key: &str) -> Option<&CoasterRecord> {
        self.by_key.get(key).map(|&idx| &self.records[idx])
    }

    /// All records in catalog order
    pub fn records(&self) -> &[CoasterRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Insert a record, overwriting any earlier record with the same key.
    ///
    /// The overwritten record keeps its original position. Returns `true`
    /// when an existing entry was replaced.
    pub(crate) fn insert_record(&mut self, record: CoasterRecord) -> bool {
        let key = record.key();
        match self.by_key.get(&key) {
            Some(&idx) => {
                self.records[idx] = record;
                true
            }
            None => {
                self.by_key.insert(key, self.records.len());
                self.records.push(record);
                false
            }
        }
    }
}
