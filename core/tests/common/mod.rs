//! Shared roster fixtures for the integration tests.

#![allow(dead_code)]

use orgscan_core::{employee::Employee, types::EmployeeId};
use rust_decimal::Decimal;
use std::str::FromStr;

pub fn employee(
    id:         EmployeeId,
    first_name: &str,
    last_name:  &str,
    salary:     &str,
    manager_id: Option<EmployeeId>,
) -> Employee {
    let salary = Decimal::from_str(salary).expect("fixture salary");
    Employee::new(id, first_name, last_name, salary, manager_id)
}

/// Five-person organisation, max depth 3:
///
///   123 Joe (70000)
///   ├── 124 Martin (45000)
///   │   └── 300 Alice (50000)
///   │       └── 305 Brett (34000)
///   └── 125 Bob (47000)
pub fn sample_org() -> Vec<Employee> {
    vec![
        employee(123, "Joe", "Doe", "70000", None),
        employee(124, "Martin", "Chekov", "45000", Some(123)),
        employee(125, "Bob", "Ronstad", "47000", Some(123)),
        employee(300, "Alice", "Hasacat", "50000", Some(124)),
        employee(305, "Brett", "Hardleaf", "34000", Some(300)),
    ]
}

/// A straight reporting line of `len` employees; id 1 is the root.
pub fn chain(len: i64) -> Vec<Employee> {
    (1..=len)
        .map(|id| {
            let manager = if id == 1 { None } else { Some(id - 1) };
            employee(id, "E", &format!("Level{id}"), "1000", manager)
        })
        .collect()
}

pub fn by_id(employees: &[Employee], id: EmployeeId) -> &Employee {
    employees
        .iter()
        .find(|e| e.id == id)
        .unwrap_or_else(|| panic!("no employee {id} in fixture"))
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
