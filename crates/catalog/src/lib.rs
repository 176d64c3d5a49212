//! # Catalog Crate
//!
//! This crate loads the roller coaster table and indexes it in memory.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (`CoasterRecord`, `Catalog`)
//! - **parser**: Split CSV text into a header row and data rows
//! - **index**: Build the catalog and its projections
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_file(Path::new("data/RollerCoasters-Geo.csv"))?;
//!
//! // Populate selection controls
//! let states = catalog.states();
//! let designs = catalog.designs();
//!
//! let apex = catalog.get("Apex_Thrill Park_Texas");
//! ```
//!
//! The catalog is write-once: after `build` returns there is no way to add,
//! change or remove a record, so it can be shared behind an `Arc` freely.

pub mod error;
pub mod types;
pub mod parser;
pub mod index;

pub use error::{DataLoadError, Result};
pub use index::REQUIRED_COLUMNS;
pub use parser::{parse_table, Table};
pub use types::{Catalog, CoasterKey, CoasterRecord};
