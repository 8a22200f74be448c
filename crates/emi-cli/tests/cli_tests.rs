use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_check_not_eligible() -> Result<(), Box<dyn std::error::Error>> {
    let output = Command::new(cargo_bin!("emi"))
        .args([
            "check",
            "--salary",
            "10000",
            "--loan-amount",
            "100000",
            "--tenure-months",
            "12",
            "--loan-type",
            "personal",
        ])
        .output()?;
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    let result = &value["result"];
    assert_eq!(result["eligible"], false);
    assert_eq!(result["emi"], "8884.88");
    assert_eq!(result["totalPayment"], "106618.55");
    assert_eq!(result["amortizationSchedule"].as_array().map(|a| a.len()), Some(12));
    Ok(())
}

#[test]
fn test_emi_minimal_output() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("emi"));
    cmd.args([
        "emi",
        "--principal",
        "100000",
        "--rate",
        "12",
        "--tenure-months",
        "12",
        "--output",
        "minimal",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::diff("8884.88\n"));
    Ok(())
}

#[test]
fn test_schedule_csv_has_one_row_per_month() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("emi"));
    cmd.args([
        "schedule",
        "--principal",
        "100000",
        "--loan-type",
        "personal",
        "--tenure-months",
        "12",
        "--output",
        "csv",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("month,principal,interest,balance"))
        .stdout(predicate::str::contains("1,7884.88,1000.00,92115.12"))
        .stdout(predicate::str::contains("12,8796.91,87.97,0.00"));
    Ok(())
}

#[test]
fn test_compare_flags_home_tenure_cap() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("emi"));
    cmd.args([
        "compare",
        "--salary",
        "50000",
        "--loan-amount",
        "100000",
        "--tenure-months",
        "72",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Not eligible (max tenure: 60 months)"));
    Ok(())
}

#[test]
fn test_negative_amount_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("emi"));
    cmd.args([
        "check",
        "--salary",
        "10000",
        "--loan-amount",
        "-100",
        "--tenure-months",
        "12",
    ]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input"));
    Ok(())
}

#[test]
fn test_unknown_loan_type_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("emi"));
    cmd.args([
        "check",
        "--salary",
        "10000",
        "--loan-amount",
        "1000",
        "--tenure-months",
        "12",
        "--loan-type",
        "student",
    ]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid loan type 'student'"));
    Ok(())
}

#[test]
fn test_products_lists_catalog() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("emi"));
    cmd.arg("products");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Personal Loan"))
        .stdout(predicate::str::contains("Home Loan"))
        .stdout(predicate::str::contains("Auto Loan"));
    Ok(())
}
