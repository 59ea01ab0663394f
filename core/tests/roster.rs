//! Roster file ingestion tests.

use orgscan_core::{error::AnalysisError, roster};
use std::path::PathBuf;

fn temp_roster(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("orgscan-{name}-{}.csv", std::process::id()));
    std::fs::write(&path, content).expect("write temp roster");
    path
}

#[test]
fn reads_roster_file() {
    let path = temp_roster(
        "ok",
        "Id,firstName,lastName,salary,managerId\n\
         123,Joe,Doe,60000\n\
         124,Martsin,Adamovich,45000,123\n",
    );
    let employees = roster::read_employees(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(employees.len(), 2);
    assert_eq!(employees[0].id, 123);
    assert_eq!(employees[0].first_name, "Joe");
    assert_eq!(employees[0].last_name, "Doe");
    assert_eq!(employees[0].salary.to_string(), "60000");
    assert_eq!(employees[0].manager_id, None);
    assert_eq!(employees[1].first_name, "Martsin");
    assert_eq!(employees[1].manager_id, Some(123));
}

#[test]
fn header_only_file_is_empty() {
    let path = temp_roster("header", "id,firstName,lastName,salary,managerId\n");
    let employees = roster::read_employees(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert!(employees.is_empty());
}

#[test]
fn missing_file_is_an_error() {
    let err = roster::read_employees("nonexistentfile.csv").unwrap_err();
    assert!(matches!(err, AnalysisError::Read { .. }), "got {err:?}");
}
