//! # Authlog Tools
//!
//! Command-line tools for analyzing tabular authentication-log exports
//! (Microsoft Sentinel / Windows event exports and similar), producing
//! security-relevant summary metrics and chart images.
//!
//! ## Overview
//!
//! Identity platforms export sign-in activity as CSV with whatever column
//! names the source pipeline produced. This crate loads one export,
//! infers which columns carry the source address, targeted identity, and
//! timestamp, and computes four aggregate metrics over them:
//!
//! - **Top source addresses** with a credential-spray score — the ratio
//!   of distinct identities to attempts, separating breadth-first spray
//!   campaigns from depth-first brute force
//! - **Attempts over time** bucketed per calendar minute
//! - **Event-code breakdown** over Windows `EventID` values
//! - **Top targeted identities**
//!
//! Each metric renders one PNG chart; the whole run yields a single
//! result record suitable for report display or JSON export.
//!
//! ## Architecture
//!
//! The crate is organized into several key modules:
//!
//! - [`table`] - Loading exports into an immutable in-memory table
//! - [`analysis`] - Schema resolution, cleaning, and the four metric
//!   computers
//! - [`chart`] - Pure PNG rendering plus the file sink for artifacts
//! - [`commands`] - CLI subcommand implementations
//! - [`utils`] - Shared helpers (formatting, progress, decompression,
//!   timestamp parsing)
//!
//! ## Example Usage
//!
//! ```bash
//! # Full analysis with charts under static/plots
//! authlog analyze signin_logs.csv
//!
//! # Compressed exports are handled transparently
//! authlog analyze signin_logs.csv.gz
//!
//! # Export the complete result record
//! authlog analyze signin_logs.csv --output analysis.json
//!
//! # Inspect schema resolution without running metrics
//! authlog columns signin_logs.csv
//! ```
//!
//! ## Behavior Notes
//!
//! - Column roles resolve by exact, case-sensitive candidate-list lookup;
//!   a metric whose column is missing is skipped silently.
//! - Values are cleaned per metric (trimmed; empty and `"nan"` dropped).
//! - Unparseable timestamps drop their row from the time series only.
//! - Analyses are single-shot and stateless; chart files are stamped
//!   with the unix time to avoid collisions between runs.

pub mod analysis;
pub mod chart;
pub mod commands;
pub mod table;
pub mod utils;
