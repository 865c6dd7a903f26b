//! CSV loading with transparent decompression and progress reporting.

use crate::table::types::Table;
use crate::utils::format::format_number;
use crate::utils::progress::ProgressBar;
use crate::utils::reader::{is_compressed, open_file};
use anyhow::{bail, Context, Result};
use std::path::Path;

/// Loads a delimited export into a [`Table`].
///
/// The header row is required; data rows may be ragged. A malformed or
/// unreadable input is a hard error — there is no partial-table fallback.
pub fn load_table(path: impl AsRef<Path>) -> Result<Table> {
    let path = path.as_ref();
    let display = path.display().to_string();

    // Byte-based progress only makes sense when on-disk offsets match
    // what the CSV reader sees.
    let plain_size = if is_compressed(path) {
        None
    } else {
        std::fs::metadata(path).ok().map(|m| m.len() as usize)
    };
    let progress = match plain_size {
        Some(size) => ProgressBar::new(size, "Loading"),
        None => ProgressBar::new_spinner("Loading"),
    };

    let reader = open_file(path)?;
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let columns: Vec<String> = csv_reader
        .headers()
        .with_context(|| format!("Failed to read header row from {display}"))?
        .iter()
        .map(str::to_string)
        .collect();
    if columns.is_empty() || columns.iter().all(String::is_empty) {
        bail!("{display} has no header row");
    }

    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut record = csv::StringRecord::new();
    loop {
        let more = csv_reader
            .read_record(&mut record)
            .with_context(|| format!("Malformed record in {display}"))?;
        if !more {
            break;
        }
        rows.push(record.iter().map(str::to_string).collect());

        if rows.len() % 10_000 == 0 {
            match plain_size {
                Some(size) => {
                    progress.update((csv_reader.position().byte() as usize).min(size));
                }
                None => progress.update(rows.len()),
            }
        }
    }

    progress.finish_with_message(&format!(
        "Loaded {} rows from {display}",
        format_number(rows.len())
    ));

    Ok(Table::new(columns, rows))
}
