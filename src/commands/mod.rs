//! Command implementations for the `authlog` CLI.
//!
//! Each module implements one subcommand as thin glue over the library:
//! load the export, call into [`crate::analysis`], and present the
//! outcome.
//!
//! - [`analyze`] - Full analysis run with report output and chart files
//! - [`columns`] - Inspect an export's columns and role resolution

pub mod analyze;
pub mod columns;
