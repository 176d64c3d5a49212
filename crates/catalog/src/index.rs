//! Catalog building and projection logic.
//!
//! Turns a parsed [`Table`] into a [`Catalog`]:
//! - Locate the required columns by header name
//! - Convert each row into a typed `CoasterRecord` (in parallel)
//! - Insert records in source order, keyed by `name_park_state`
//!
//! Also provides the read-only projections the front end needs to populate
//! its selection controls and summary listings.

use crate::error::{DataLoadError, Result};
use crate::parser::{self, Table};
use crate::types::*;
use rayon::prelude::*;
use std::collections::{BTreeSet, HashMap};
use std::path::Path;
use tracing::{info, warn};

/// Columns the catalog cannot be built without
pub const REQUIRED_COLUMNS: [&str; 10] = [
    "Coaster",
    "State",
    "City",
    "Park",
    "Max_Height",
    "Top_Speed",
    "Inversions",
    "Design",
    "Latitude",
    "Longitude",
];

/// Optional column with the numeric inversion count when `Inversions`
/// only holds a Y/N flag
pub const INVERSION_COUNT_COLUMN: &str = "Num_of_Inversions";

/// Resolved column positions for one table
struct Columns {
    name: usize,
    state: usize,
    city: usize,
    park: usize,
    height: usize,
    speed: usize,
    inversions: usize,
    design: usize,
    latitude: usize,
    longitude: usize,
    inversion_count: Option<usize>,
}

impl Columns {
    fn resolve(table: &Table) -> Result<Self> {
        let index = table.column_index();
        let find = |column: &str| {
            index
                .get(column)
                .copied()
                .ok_or_else(|| DataLoadError::MissingColumn {
                    column: column.to_string(),
                })
        };

        Ok(Self {
            name: find("Coaster")?,
            state: find("State")?,
            city: find("City")?,
            park: find("Park")?,
            height: find("Max_Height")?,
            speed: find("Top_Speed")?,
            inversions: find("Inversions")?,
            design: find("Design")?,
            latitude: find("Latitude")?,
            longitude: find("Longitude")?,
            inversion_count: index.get(INVERSION_COUNT_COLUMN).copied(),
        })
    }
}

impl Catalog {
    /// Load the catalog from a CSV file.
    ///
    /// This is the main entry point for loading data.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading coaster catalog from {:?}", path);
        let table = parser::read_table(path)?;
        Self::build(&table)
    }

    /// Build a catalog from an already parsed table.
    ///
    /// Fails if a required column is missing or any cell can't be converted.
    /// On failure nothing is returned; there is no partial catalog.
    pub fn build(table: &Table) -> Result<Self> {
        let columns = Columns::resolve(table)?;

        // Rows convert independently; collect keeps source order
        let records: Vec<CoasterRecord> = table
            .rows
            .par_iter()
            .zip(table.line_numbers.par_iter())
            .map(|(row, &line_no)| parse_record(row, &columns, &table.source_name, line_no))
            .collect::<Result<Vec<_>>>()?;

        let catalog = Self::from_records(records);
        info!(
            "Built catalog with {} coasters across {} states",
            catalog.len(),
            catalog.states().len()
        );
        Ok(catalog)
    }

    /// Build a catalog from records that are already typed.
    ///
    /// Records with a repeated key overwrite the earlier entry in place.
    pub fn from_records(records: impl IntoIterator<Item = CoasterRecord>) -> Self {
        let mut catalog = Self::new();
        for record in records {
            let key = record.key();
            if catalog.insert_record(record) {
                warn!("Duplicate coaster key {}, keeping the later row", key);
            }
        }
        catalog
    }

    /// Unique states present in the catalog, sorted
    pub fn states(&self) -> Vec<&str> {
        unique_sorted(self.records.iter().map(|r| r.state.as_str()))
    }

    /// Unique design styles present in the catalog, sorted
    pub fn designs(&self) -> Vec<&str> {
        unique_sorted(self.records.iter().map(|r| r.design.as_str()))
    }

    /// Coaster names in catalog order
    pub fn names(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.name.as_str()).collect()
    }

    /// The tallest coasters with a known height, tallest first
    pub fn tallest(&self, limit: usize) -> Vec<&CoasterRecord> {
        top_by(&self.records, limit, |r| r.max_height_ft)
    }

    /// The fastest coasters with a known speed, fastest first
    pub fn fastest(&self, limit: usize) -> Vec<&CoasterRecord> {
        top_by(&self.records, limit, |r| r.top_speed_mph)
    }

    /// Number of coasters per state, most coasters first
    pub fn state_counts(&self) -> Vec<(&str, usize)> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for record in &self.records {
            *counts.entry(record.state.as_str()).or_insert(0) += 1;
        }
        let mut counts: Vec<(&str, usize)> = counts.into_iter().collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        counts
    }

    /// Case-insensitive name search, exact matches before substring matches
    pub fn search(&self, query: &str) -> Vec<&CoasterRecord> {
        let query = query.to_lowercase();
        let mut matches: Vec<(u8, &CoasterRecord)> = self
            .records
            .iter()
            .filter_map(|record| {
                let name = record.name.to_lowercase();
                if name == query {
                    Some((0, record))
                } else if name.contains(&query) {
                    Some((1, record))
                } else {
                    None
                }
            })
            .collect();
        matches.sort_by_key(|(relevance, _)| *relevance);
        matches.into_iter().map(|(_, record)| record).collect()
    }
}

fn unique_sorted<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    values.collect::<BTreeSet<_>>().into_iter().collect()
}

/// Records with a positive `metric`, descending, at most `limit`
fn top_by(
    records: &[CoasterRecord],
    limit: usize,
    metric: impl Fn(&CoasterRecord) -> f64,
) -> Vec<&CoasterRecord> {
    let mut ranked: Vec<&CoasterRecord> = records.iter().filter(|&r| metric(r) > 0.0).collect();
    ranked.sort_by(|a, b| metric(*b).total_cmp(&metric(*a)));
    ranked.truncate(limit);
    ranked
}

/// Convert one table row into a record
fn parse_record(
    row: &[String],
    columns: &Columns,
    source_name: &str,
    line_no: usize,
) -> Result<CoasterRecord> {
    let text = |idx: usize| row[idx].trim().to_string();
    let number = |idx: usize, field: &str| parse_number(&row[idx], field, source_name, line_no);

    let max_height_ft = number(columns.height, "Max_Height")?;
    let top_speed_mph = number(columns.speed, "Top_Speed")?;
    for (field, value) in [("Max_Height", max_height_ft), ("Top_Speed", top_speed_mph)] {
        if value < 0.0 {
            return Err(DataLoadError::ParseError {
                source_name: source_name.to_string(),
                line: line_no,
                reason: format!("Negative {}: {}", field, value),
            });
        }
    }

    let count_cell = columns.inversion_count.map(|idx| row[idx].as_str());

    Ok(CoasterRecord {
        name: text(columns.name),
        state: text(columns.state),
        design: text(columns.design),
        inversion_count: parse_inversions(&row[columns.inversions], count_cell, source_name, line_no)?,
        max_height_ft,
        top_speed_mph,
        latitude: number(columns.latitude, "Latitude")?,
        longitude: number(columns.longitude, "Longitude")?,
        city: text(columns.city),
        park: text(columns.park),
    })
}

/// Parse a numeric cell. Blank cells mean "unknown" and read as 0.
fn parse_number(cell: &str, field: &str, source_name: &str, line_no: usize) -> Result<f64> {
    let cell = cell.trim();
    if cell.is_empty() {
        return Ok(0.0);
    }
    let value: f64 = cell.parse().map_err(|e| DataLoadError::ParseError {
        source_name: source_name.to_string(),
        line: line_no,
        reason: format!("Invalid {}: {:?} ({})", field, cell, e),
    })?;
    if !value.is_finite() {
        return Err(DataLoadError::ParseError {
            source_name: source_name.to_string(),
            line: line_no,
            reason: format!("Non-finite {}: {:?}", field, cell),
        });
    }
    Ok(value)
}

/// Parse the `Inversions` cell.
///
/// Accepts a count (`"3"`, `"3.0"`) or a `Y`/`N` flag. A `Y` flag takes its
/// count from the optional `Num_of_Inversions` cell, falling back to 1.
fn parse_inversions(
    cell: &str,
    count_cell: Option<&str>,
    source_name: &str,
    line_no: usize,
) -> Result<u32> {
    let cell = cell.trim();
    let invalid = || DataLoadError::ParseError {
        source_name: source_name.to_string(),
        line: line_no,
        reason: format!("Invalid Inversions: {:?}", cell),
    };

    match cell {
        "" | "N" | "n" => Ok(0),
        "Y" | "y" => {
            let count = match count_cell {
                Some(c) => parse_count(c).ok_or_else(invalid)?,
                None => 0,
            };
            Ok(count.max(1))
        }
        _ => parse_count(cell).ok_or_else(invalid),
    }
}

/// A non-negative whole number, possibly written with a trailing `.0`
fn parse_count(cell: &str) -> Option<u32> {
    let cell = cell.trim();
    if cell.is_empty() {
        return Some(0);
    }
    if let Ok(count) = cell.parse::<u32>() {
        return Some(count);
    }
    let value: f64 = cell.parse().ok()?;
    if value >= 0.0 && value.fract() == 0.0 && value <= u32::MAX as f64 {
        Some(value as u32)
    } else {
        None
    }
}
