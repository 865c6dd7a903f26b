//! Column inspection for an export.
//!
//! # Usage
//!
//! ```bash
//! authlog columns signin_logs.csv
//! ```
//!
//! Lists every column the export carries and which ones resolved to the
//! address, identity, and time roles. Useful for checking why a metric
//! was skipped before renaming columns upstream.

use crate::analysis::schema;
use crate::table::loader::load_table;
use anyhow::Result;

pub fn run(csv_file: &str) -> Result<()> {
    let table = load_table(csv_file)?;
    let roles = schema::resolve_roles(&table);

    println!("{}", "=".repeat(70));
    println!("Columns in {csv_file}");
    println!("{}", "=".repeat(70));

    for column in table.columns() {
        let role = if roles.address.as_deref() == Some(column.as_str()) {
            "  [address]"
        } else if roles.identity.as_deref() == Some(column.as_str()) {
            "  [identity]"
        } else if roles.time.as_deref() == Some(column.as_str()) {
            "  [time]"
        } else {
            ""
        };
        println!("{column}{role}");
    }

    println!("{}", "-".repeat(70));
    println!(
        "address: {}   identity: {}   time: {}",
        roles.address.as_deref().unwrap_or("(unresolved)"),
        roles.identity.as_deref().unwrap_or("(unresolved)"),
        roles.time.as_deref().unwrap_or("(unresolved)"),
    );

    Ok(())
}
