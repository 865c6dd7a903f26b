//! Utility functions and helpers.
//!
//! This module provides common functionality used across the analysis
//! engine and commands:
//!
//! - [`format`] - Number formatting for report output
//! - [`progress`] - Progress tracking and display utilities
//! - [`reader`] - Smart file reader with automatic decompression
//! - [`time`] - Lenient timestamp parsing and minute bucketing
//!
//! # Examples
//!
//! ## Parsing export timestamps
//!
//! ```
//! use authlog_tools::utils::time::parse_flexible;
//!
//! let timestamp = parse_flexible("2024-01-01T00:00:10").unwrap();
//! assert_eq!(timestamp.timestamp(), 1_704_067_210);
//! ```
//!
//! ## Reading compressed exports
//!
//! ```no_run
//! use authlog_tools::utils::reader::open_file;
//! use std::io::{BufRead, BufReader};
//!
//! // Automatically decompresses .gz and .zst exports
//! let reader = open_file("signin_logs.csv.gz").unwrap();
//! let buf_reader = BufReader::new(reader);
//! ```

pub mod format;
pub mod progress;
pub mod reader;
pub mod time;
