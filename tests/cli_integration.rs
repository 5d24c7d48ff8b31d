use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// A command with an isolated config dir, no delays and plain output.
fn logitrack(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("logitrack").unwrap();
    cmd.env_remove("RUST_LOG")
        .arg("--config-dir")
        .arg(home.path())
        .arg("--delay-ms")
        .arg("0")
        .arg("--no-color");
    cmd
}

#[test]
fn search_lists_only_matching_shipments() {
    let home = TempDir::new().unwrap();
    logitrack(&home)
        .args(["shipments", "--search", "miami"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SH002"))
        .stdout(predicate::str::contains("SH001").not())
        .stdout(predicate::str::contains("1-1 of 1 items"));
}

#[test]
fn status_filter_lists_only_delivered_orders() {
    let home = TempDir::new().unwrap();
    logitrack(&home)
        .args(["orders", "--status", "Delivered"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ORD004"))
        .stdout(predicate::str::contains("ORD001").not());
}

#[test]
fn summary_tiles_ignore_filters() {
    let home = TempDir::new().unwrap();
    logitrack(&home)
        .args(["orders", "--status", "Delivered"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Value"))
        .stdout(predicate::str::contains("$702,000"));
}

#[test]
fn unknown_status_exits_non_zero() {
    let home = TempDir::new().unwrap();
    logitrack(&home)
        .args(["shipments", "--status", "Lost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown status"));
}

#[test]
fn no_matches_prints_a_notice() {
    let home = TempDir::new().unwrap();
    logitrack(&home)
        .args(["shipments", "--search", "nowhere"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 items"))
        .stdout(predicate::str::contains("No shipments match the current filters."));
}

#[test]
fn sorted_second_page() {
    let home = TempDir::new().unwrap();
    logitrack(&home)
        .args([
            "orders",
            "--sort",
            "id",
            "--desc",
            "--page",
            "2",
            "--page-size",
            "2",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("ORD003"))
        .stdout(predicate::str::contains("ORD002"))
        .stdout(predicate::str::contains("ORD005").not())
        .stdout(predicate::str::contains("3-4 of 5 items"));
}

#[test]
fn order_detail_shows_progress() {
    let home = TempDir::new().unwrap();
    logitrack(&home)
        .args(["order", "ORD004"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Order ORD004"))
        .stdout(predicate::str::contains("Global Retail Co"))
        .stdout(predicate::str::contains("Progress"));
}

#[test]
fn unknown_order_fails() {
    let home = TempDir::new().unwrap();
    logitrack(&home)
        .args(["order", "ORD999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Record not found: ORD999"));
}

#[test]
fn shipment_detail() {
    let home = TempDir::new().unwrap();
    logitrack(&home)
        .args(["shipment", "SH005"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Shipment SH005"))
        .stdout(predicate::str::contains("Delayed"))
        .stdout(predicate::str::contains("30%"));
}

#[test]
fn bare_invocation_shows_the_dashboard() {
    let home = TempDir::new().unwrap();
    logitrack(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("Dashboard Overview"))
        .stdout(predicate::str::contains("1,247"))
        .stdout(predicate::str::contains("Fleet Status"))
        .stdout(predicate::str::contains("Recent Orders"));
}

#[test]
fn dashboard_deadline_leaves_panels_loading() {
    let home = TempDir::new().unwrap();
    Command::cargo_bin("logitrack")
        .unwrap()
        .args(["--config-dir"])
        .arg(home.path())
        .args(["--no-color", "--delay-ms", "5000", "dashboard", "--deadline-ms", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Loading…"))
        .stdout(predicate::str::contains("1,247").not());
}

#[test]
fn analytics_echoes_range() {
    let home = TempDir::new().unwrap();
    logitrack(&home)
        .args(["analytics", "--range", "1year"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Revenue (1 Year)"))
        .stdout(predicate::str::contains("Top Routes"));
}

#[test]
fn unknown_range_fails() {
    let home = TempDir::new().unwrap();
    logitrack(&home)
        .args(["analytics", "--range", "2years"])
        .assert()
        .failure();
}

#[test]
fn settings_shows_team() {
    let home = TempDir::new().unwrap();
    logitrack(&home)
        .args(["settings", "--status", "Inactive"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Notifications"))
        .stdout(predicate::str::contains("Team Members"))
        .stdout(predicate::str::contains("1-1 of 1 items"));
}

#[test]
fn routes_and_open() {
    let home = TempDir::new().unwrap();
    logitrack(&home)
        .arg("routes")
        .assert()
        .success()
        .stdout(predicate::str::contains("/shipments"))
        .stdout(predicate::str::contains("Shipments Management"));

    logitrack(&home)
        .args(["open", "/orders"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Orders Management"));

    logitrack(&home)
        .args(["open", "/nowhere"])
        .assert()
        .failure();
}

#[test]
fn config_set_then_get() {
    let home = TempDir::new().unwrap();
    logitrack(&home)
        .args(["config", "page-size", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("page-size set to 2"));

    logitrack(&home)
        .args(["config", "page-size"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2"));

    logitrack(&home)
        .arg("shipments")
        .assert()
        .success()
        .stdout(predicate::str::contains("1-2 of 5 items"));
}

#[test]
fn missing_data_file_fails() {
    let home = TempDir::new().unwrap();
    let data = TempDir::new().unwrap();
    logitrack(&home)
        .arg("--data-dir")
        .arg(data.path())
        .arg("shipments")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load shipments"));
}

#[test]
fn reads_records_from_data_dir() {
    let home = TempDir::new().unwrap();
    let data = TempDir::new().unwrap();
    fs::write(
        data.path().join("shipments.json"),
        r#"[{
            "id": "SH900", "origin": "Reno, NV", "destination": "Omaha, NE",
            "status": "Pending", "driver": "Ana Diaz", "vehicle": "TRK-900",
            "cargo": "Paper", "weight": "1.0 tons",
            "estimatedDelivery": "2024-07-01", "progress": 0
        }]"#,
    )
    .unwrap();

    logitrack(&home)
        .arg("--data-dir")
        .arg(data.path())
        .arg("shipments")
        .assert()
        .success()
        .stdout(predicate::str::contains("SH900"))
        .stdout(predicate::str::contains("SH001").not());
}

#[test]
fn invalid_data_file_fails_validation() {
    let home = TempDir::new().unwrap();
    let data = TempDir::new().unwrap();
    fs::write(data.path().join("orders.json"), "[{\"id\": 1}]").unwrap();

    logitrack(&home)
        .arg("--data-dir")
        .arg(data.path())
        .arg("orders")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid orders data"));
}
