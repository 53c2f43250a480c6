use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn budgie(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("budgie").unwrap();
    cmd.env("BUDGIE_DATA_DIR", data_dir.path())
        .env_remove("BUDGIE_LOG");
    cmd
}

#[test]
fn test_expense_monthly() {
    let dir = TempDir::new().unwrap();
    budgie(&dir)
        .args(["expense", "120", "-f", "monthly", "--name", "Phone"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Per paycheck: $55.38"))
        .stdout(predicate::str::contains("Phone: $120.00"));
}

#[test]
fn test_expense_per_paycheck_and_rounding() {
    let dir = TempDir::new().unwrap();
    budgie(&dir)
        .args(["expense", "100", "-f", "per-paycheck"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Per paycheck: $100.00"));

    budgie(&dir)
        .args(["expense", "120", "-f", "monthly", "-r", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Per paycheck: $60.00"));
}

#[test]
fn test_expense_unknown_frequency_allocates_nothing() {
    let dir = TempDir::new().unwrap();
    budgie(&dir)
        .args(["expense", "120", "-f", "fortnightly-ish"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Per paycheck: $0.00"))
        .stdout(predicate::str::contains("Unknown frequency"));
}

#[test]
fn test_expense_paused() {
    let dir = TempDir::new().unwrap();
    budgie(&dir)
        .args(["expense", "120", "--state", "paused"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Per paycheck: $0.00"));
}

#[test]
fn test_goal_rounded() {
    let dir = TempDir::new().unwrap();
    budgie(&dir)
        .args(["goal", "2000", "100", "-r", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Per paycheck: $50.00"));
}

#[test]
fn test_invalid_amount_fails() {
    let dir = TempDir::new().unwrap();
    budgie(&dir)
        .args(["expense", "twelve"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));

    budgie(&dir)
        .args(["expense", "12", "--state", "someday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown state"));
}

#[test]
fn test_paychecks_lists_26_dates() {
    let dir = TempDir::new().unwrap();
    let output = budgie(&dir)
        .args(["paychecks", "--start", "2025-01-03", "--today", "2025-02-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  1. 2025-02-14 (Fri)"))
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(output).unwrap();
    let numbered = text.lines().filter(|l| l.contains(". 20")).count();
    assert_eq!(numbered, 26);
}

#[test]
fn test_paychecks_without_schedule_fails() {
    let dir = TempDir::new().unwrap();
    budgie(&dir)
        .arg("paychecks")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No pay schedule"));
}

#[test]
fn test_config_schedule_used_by_paychecks() {
    let dir = TempDir::new().unwrap();
    budgie(&dir)
        .args(["config", "--pay-start", "2025-01-03", "--rounding", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings saved"));

    assert!(dir.path().join("config.json").exists());

    budgie(&dir)
        .args(["paychecks", "--today", "2025-01-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  1. 2025-01-03 (Fri)"))
        .stdout(predicate::str::contains(" 26. 2025-12-19 (Fri)"));

    budgie(&dir)
        .args(["expense", "120"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Per paycheck: $56.00"));
}

#[test]
fn test_init_then_plan() {
    let dir = TempDir::new().unwrap();
    budgie(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote starter plan"));

    assert!(dir.path().join("plan.json").exists());

    budgie(&dir)
        .args(["plan", "--today", "2025-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Paycheck Allocation Plan"))
        .stdout(predicate::str::contains("Rent"))
        .stdout(predicate::str::contains("Emergency fund"));

    budgie(&dir)
        .args(["plan", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Name,Kind,Cadence,Status"))
        .stdout(predicate::str::contains(
            "Rent,expense,monthly,in progress,1200.00,0.00,1200.00,553.85,",
        ));

    let output = budgie(&dir)
        .args(["plan", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["lines"].as_array().unwrap().len(), 7);

    // A second init leaves the existing plan alone
    budgie(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn test_plan_from_yaml_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mine.yaml");
    fs::write(
        &path,
        "expenses:\n  - name: Phone\n    amount: 12000\n    frequency: monthly\ngoals: []\nrounding: 500\n",
    )
    .unwrap();

    budgie(&dir)
        .args(["plan", path.to_str().unwrap(), "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Phone,expense,monthly,in progress,120.00,0.00,120.00,60.00,",
        ));
}

#[test]
fn test_plan_file_alias_frequency_allocates_nothing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("aliases.json");
    fs::write(
        &path,
        r#"{"expenses":[{"name":"Odd","amount":10000,"frequency":"yearly"}],
            "pay_schedule":{"start_date":"2025-01-03","frequency":"biweekly"}}"#,
    )
    .unwrap();

    budgie(&dir)
        .args(["plan", path.to_str().unwrap(), "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Odd,expense,yearly,in progress,100.00,0.00,100.00,0.00,",
        ));

    // Only the exact "bi-weekly" value steps 14 days
    budgie(&dir)
        .args(["plan", path.to_str().unwrap(), "--today", "2025-01-04"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Next paycheck: 2025-02-02"));
}

#[test]
fn test_plan_rejects_negative_weeks_per_year() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(
        &path,
        r#"{"expenses":[{"name":"Rent","amount":100000,"frequency":"monthly"}],
            "frequency_options":[{"value":"monthly","label":"Monthly","weeks_per_year":-12.0}]}"#,
    )
    .unwrap();

    budgie(&dir)
        .args(["plan", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("weeks per year"));
}

#[test]
fn test_expense_at_money_limit() {
    let dir = TempDir::new().unwrap();
    budgie(&dir)
        .args(["expense", "3000000000000000", "-f", "weekly"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Per paycheck: $"));
}

#[test]
fn test_plan_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    budgie(&dir)
        .arg("plan")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Plan file not found"));
}

#[test]
fn test_frequencies() {
    let dir = TempDir::new().unwrap();
    budgie(&dir)
        .arg("frequencies")
        .assert()
        .success()
        .stdout(predicate::str::contains("bi-weekly"))
        .stdout(predicate::str::contains("17.33"));
}
