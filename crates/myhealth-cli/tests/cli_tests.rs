//! End-to-end tests for the `myhealth` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Runs the binary against a config path inside `dir` that does not exist yet.
fn myhealth(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("myhealth").unwrap();
    cmd.env_remove("RUST_LOG")
        .arg("--config")
        .arg(dir.path().join("config.toml"));
    cmd
}

const BOND_ARGS: &[&str] = &[
    "bond",
    "-n",
    "1000",
    "-p",
    "950",
    "-m",
    "01.01.2026",
    "--ncd",
    "10",
    "--coupon",
    "40",
    "--coupon-count",
    "2",
    "-s",
    "100000",
    "-e",
    "2025-01-01",
];

#[test]
fn bond_minimal_prints_ytm() {
    let dir = TempDir::new().unwrap();
    myhealth(&dir)
        .args(["-f", "minimal"])
        .args(BOND_ARGS)
        .assert()
        .success()
        .stdout("12.50\n");
}

#[test]
fn bond_json_lists_rows_in_order() {
    let dir = TempDir::new().unwrap();
    let output = myhealth(&dir)
        .args(["-f", "json", "-l", "en"])
        .args(BOND_ARGS)
        .output()
        .unwrap();
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let keys: Vec<_> = rows
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["key"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        keys,
        [
            "bond_total_bought_count",
            "bond_total_bought_sum",
            "bond_days_to_maturity",
            "bond_ytm",
            "bond_total_sum",
            "bond_diff_sum",
        ]
    );
    assert_eq!(rows[1]["value"], "99840.00");
    assert_eq!(rows[5]["value"], "12480.00");
}

#[test]
fn bond_maturity_on_evaluation_date_fails() {
    let dir = TempDir::new().unwrap();
    myhealth(&dir)
        .args(["bond", "-n", "1000", "-p", "950", "-m", "2025-01-01", "-s", "1000"])
        .args(["-e", "2025-01-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("2025-01-01"));
}

#[test]
fn bond_rejects_bad_date() {
    let dir = TempDir::new().unwrap();
    myhealth(&dir)
        .args(["bond", "-n", "1000", "-p", "950", "-m", "31.02.2026", "-s", "1000"])
        .assert()
        .failure();
}

#[test]
fn calories_minimal_prints_bmr() {
    let dir = TempDir::new().unwrap();
    myhealth(&dir)
        .args(["-f", "minimal", "calories", "-g", "m", "-w", "80", "--height", "180", "-a", "30"])
        .assert()
        .success()
        .stdout("1780.00\n");
}

#[test]
fn calories_table_uses_russian_labels_by_default() {
    let dir = TempDir::new().unwrap();
    myhealth(&dir)
        .args(["calories", "-g", "f", "-w", "60", "--height", "165", "-a", "25"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1345.25"))
        .stdout(predicate::str::contains("Супер активность"));
}

#[test]
fn calories_rejects_zero_weight() {
    let dir = TempDir::new().unwrap();
    myhealth(&dir)
        .args(["calories", "-g", "m", "-w", "0", "--height", "180", "-a", "30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("weight"));
}

#[test]
fn exec_calorie_calc() {
    let dir = TempDir::new().unwrap();
    myhealth(&dir)
        .args(["exec", "c,c,m,80,180,30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1780.00"))
        .stdout(predicate::str::contains("3382.00"));
}

#[test]
fn exec_bond_with_date() {
    let dir = TempDir::new().unwrap();
    myhealth(&dir)
        .args(["-l", "en", "exec", "--date", "2025-01-01"])
        .arg("bond,c,1000,950,01.01.2026,10,40,2,100000")
        .assert()
        .success()
        .stdout(predicate::str::contains(": 12.50"));
}

#[test]
fn exec_invalid_command_fails() {
    let dir = TempDir::new().unwrap();
    myhealth(&dir)
        .args(["exec", "c,c,x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Неправильная команда"));
}

#[test]
fn labels_english_listing() {
    let dir = TempDir::new().unwrap();
    myhealth(&dir)
        .args(["-l", "en", "-f", "csv", "labels", "--check"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("key,value\n"))
        .stdout(predicate::str::contains("bond_ytm,"));
}

#[test]
fn config_init_then_path_and_show() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    myhealth(&dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(path.display().to_string()));

    myhealth(&dir).args(["config", "init"]).assert().success();
    assert!(path.is_file());

    myhealth(&dir)
        .args(["-f", "minimal", "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("locale = \"ru\""));

    myhealth(&dir).args(["-q", "config", "check"]).assert().success();
}

#[test]
fn config_file_drives_labels() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("labels.toml"),
        "base = \"en\"\n\n[labels]\ncalorie_bmr = \"Basal burn\"\n",
    )
    .unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "labels_file = \"labels.toml\"\noutput_format = \"csv\"\n",
    )
    .unwrap();

    myhealth(&dir)
        .args(["calories", "-g", "m", "-w", "80", "--height", "180", "-a", "30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("calorie_bmr,Basal burn,1780.00"));
}

#[test]
fn exec_calorie_help_in_english() {
    let dir = TempDir::new().unwrap();
    myhealth(&dir)
        .args(["-l", "en", "exec", "c,h"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Weight, kg [Decimal>0]"));
}
