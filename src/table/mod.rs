//! Loading and representing tabular log exports.
//!
//! The engine makes no assumption about the column set of an export; the
//! whole table is materialized once per analysis and every metric works
//! from read-only views of it.
//!
//! - [`types`] - The in-memory [`Table`](types::Table) representation
//! - [`loader`] - CSV loading with transparent decompression

pub mod loader;
pub mod types;
