/// Integration tests for the analysis engine over real temp-file exports.
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use authlog_tools::analysis;
use authlog_tools::table::loader::load_table;

/// Helper to write a CSV export into a temp directory.
fn write_export(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    path
}

/// A plausible sign-in export exercising every metric.
fn sample_export() -> String {
    let mut out = String::from("TimeGenerated,IpAddress,Account,EventID\n");
    // 198.51.100.7: 4 attempts against one account (brute force shape)
    out.push_str("2024-01-01T00:00:05,198.51.100.7,administrator,4625\n");
    out.push_str("2024-01-01T00:00:12,198.51.100.7,administrator,4625\n");
    out.push_str("2024-01-01T00:00:30,198.51.100.7,administrator,4625\n");
    out.push_str("2024-01-01T00:00:55,198.51.100.7,administrator,4625\n");
    // 203.0.113.9: 3 attempts, 3 accounts (spray shape)
    out.push_str("2024-01-01T00:01:02,203.0.113.9,alice,4625\n");
    out.push_str("2024-01-01T00:01:20,203.0.113.9,bob,4625\n");
    out.push_str("2024-01-01T00:01:41,203.0.113.9,carol,4625\n");
    // one successful logon, plus rows with missing values
    out.push_str("2024-01-01T00:02:10,192.0.2.4,alice,4624\n");
    out.push_str("not-a-timestamp,nan,,4625\n");
    out.push_str("2024-01-01T00:02:30,,nan,\n");
    out
}

/// Chart references are nullable by contract; when present, the artifact
/// must exist at the referenced location under the plots dir's parent.
fn assert_chart_reference(reference: &Option<String>, stem: &str, parent: &Path) {
    if let Some(reference) = reference {
        assert!(reference.starts_with(&format!("plots/{stem}_")));
        assert!(reference.ends_with(".png"));
        assert!(parent.join(reference).exists());
    }
}

#[test]
fn full_pipeline_over_sample_export() {
    let dir = TempDir::new().unwrap();
    let export = write_export(&dir, "signin_logs.csv", &sample_export());
    let plots_dir = dir.path().join("static").join("plots");

    let result = analysis::analyze_file(&export, &plots_dir).unwrap();

    assert_eq!(result.total_events, 10);
    assert_eq!(result.address_column.as_deref(), Some("IpAddress"));
    assert_eq!(result.identity_column.as_deref(), Some("Account"));
    assert_eq!(result.time_column.as_deref(), Some("TimeGenerated"));
    assert_eq!(
        result.columns,
        ["TimeGenerated", "IpAddress", "Account", "EventID"]
    );

    // "nan" is a raw distinct value for unique counting; empties are not.
    assert_eq!(result.unique_addresses, Some(4));
    assert_eq!(result.unique_identities, Some(5));

    // Top addresses: descending attempts, spray separates the two shapes.
    assert_eq!(result.top_addresses.len(), 3);
    assert_eq!(result.top_addresses[0].address, "198.51.100.7");
    assert_eq!(result.top_addresses[0].attempts, 4);
    assert_eq!(result.top_addresses[0].unique_identities, 1);
    assert_eq!(result.top_addresses[0].spray_score, 0.25);
    assert_eq!(result.top_addresses[1].address, "203.0.113.9");
    assert_eq!(result.top_addresses[1].attempts, 3);
    assert_eq!(result.top_addresses[1].spray_score, 1.0);

    // Event codes: raw counts, descending.
    let codes = result.event_code_counts.as_ref().unwrap();
    assert_eq!(codes[0].code, "4625");
    assert_eq!(codes[0].count, 8);
    assert_eq!(codes[1].code, "4624");
    assert_eq!(codes[1].count, 1);

    // Identities: administrator leads, cleaned markers gone.
    assert_eq!(result.top_identities[0].identity, "administrator");
    assert_eq!(result.top_identities[0].attempts, 4);
    assert!(result
        .top_identities
        .iter()
        .all(|row| row.identity != "nan" && !row.identity.is_empty()));

    let parent = dir.path().join("static");
    assert_chart_reference(&result.address_chart, "top_ips", &parent);
    assert_chart_reference(&result.time_chart, "attempts_over_time", &parent);
    assert_chart_reference(&result.event_code_chart, "eventid_breakdown", &parent);
    assert_chart_reference(&result.identity_chart, "top_usernames", &parent);
}

#[test]
fn top_lists_respect_caps_and_ordering() {
    let dir = TempDir::new().unwrap();
    let mut contents = String::from("IpAddress,Account\n");
    for i in 0..30 {
        // address i appears (30 - i) times so counts strictly descend
        for _ in 0..(30 - i) {
            contents.push_str(&format!("10.0.{i}.1,user{i}\n"));
        }
    }
    let export = write_export(&dir, "many.csv", &contents);

    let result = analysis::analyze_file(&export, &dir.path().join("plots")).unwrap();

    assert_eq!(result.top_addresses.len(), 20);
    assert_eq!(result.top_identities.len(), 20);
    for window in result.top_addresses.windows(2) {
        assert!(window[0].attempts >= window[1].attempts);
    }
    for row in &result.top_addresses {
        assert!((0.0..=1.0).contains(&row.spray_score));
    }
}

#[test]
fn zero_row_export_skips_every_metric() {
    let dir = TempDir::new().unwrap();
    let export = write_export(&dir, "empty.csv", "TimeGenerated,IpAddress,Account,EventID\n");
    let plots_dir = dir.path().join("plots");

    let result = analysis::analyze_file(&export, &plots_dir).unwrap();

    assert_eq!(result.total_events, 0);
    // Roles still resolve against the header.
    assert_eq!(result.address_column.as_deref(), Some("IpAddress"));
    assert_eq!(result.unique_addresses, Some(0));

    assert!(result.top_addresses.is_empty());
    assert!(result.top_identities.is_empty());
    assert!(result.event_code_counts.is_none());
    assert!(result.address_chart.is_none());
    assert!(result.time_chart.is_none());
    assert!(result.event_code_chart.is_none());
    assert!(result.identity_chart.is_none());

    // No empty chart artifacts: nothing was written at all.
    assert!(!plots_dir.exists());
}

#[test]
fn lowercase_column_names_do_not_resolve() {
    let dir = TempDir::new().unwrap();
    let export = write_export(
        &dir,
        "lowercase.csv",
        "ipaddress,account\n10.0.0.1,alice\n10.0.0.2,bob\n",
    );

    let result = analysis::analyze_file(&export, &dir.path().join("plots")).unwrap();

    assert_eq!(result.total_events, 2);
    assert_eq!(result.address_column, None);
    assert_eq!(result.identity_column, None);
    assert_eq!(result.unique_addresses, None);
    assert!(result.top_addresses.is_empty());
    assert_eq!(result.columns, ["ipaddress", "account"]);
}

#[test]
fn total_events_counted_even_when_nothing_resolves() {
    let dir = TempDir::new().unwrap();
    let export = write_export(&dir, "opaque.csv", "foo,bar\n1,2\n3,4\n5,6\n");
    let plots_dir = dir.path().join("plots");

    let result = analysis::analyze_file(&export, &plots_dir).unwrap();

    assert_eq!(result.total_events, 3);
    assert!(result.top_addresses.is_empty());
    assert!(result.top_identities.is_empty());
    assert!(result.event_code_counts.is_none());
    assert!(!plots_dir.exists());
}

#[test]
fn analyze_table_uses_the_given_stamp() {
    let dir = TempDir::new().unwrap();
    let export = write_export(&dir, "stamped.csv", "EventID\n4625\n4624\n4625\n");
    let plots_dir = dir.path().join("plots");

    let table = load_table(&export).unwrap();
    let result = analysis::analyze_table(&table, &plots_dir, 1700000000);

    let codes = result.event_code_counts.unwrap();
    assert_eq!(codes.len(), 2);
    if let Some(reference) = result.event_code_chart {
        assert_eq!(reference, "plots/eventid_breakdown_1700000000.png");
        assert!(plots_dir.join("eventid_breakdown_1700000000.png").exists());
    }
}

#[test]
fn result_serializes_to_json() {
    let dir = TempDir::new().unwrap();
    let export = write_export(&dir, "signin_logs.csv", &sample_export());

    let result = analysis::analyze_file(&export, &dir.path().join("plots")).unwrap();
    let value = serde_json::to_value(&result).unwrap();

    assert_eq!(value["total_events"], 10);
    assert_eq!(value["address_column"], "IpAddress");
    assert_eq!(value["top_addresses"][0]["address"], "198.51.100.7");
    assert_eq!(value["top_addresses"][0]["spray_score"], 0.25);
    assert!(value["columns"].is_array());
}

#[test]
fn load_failure_is_propagated() {
    let missing = Path::new("/nonexistent/signin_logs.csv");
    assert!(analysis::analyze_file(missing, Path::new("plots")).is_err());
}
