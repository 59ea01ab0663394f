//! Employee record: one person in the organisation snapshot.

use crate::types::{EmployeeId, Money};
use serde::Serialize;
use std::fmt;

/// A single roster entry.
///
/// Equality and hashing cover every field, so two records with the same
/// `id` but different salaries are distinct values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Employee {
    pub id:         EmployeeId,
    pub first_name: String,
    pub last_name:  String,
    pub salary:     Money,
    pub manager_id: Option<EmployeeId>,
}

impl Employee {
    pub fn new(
        id:         EmployeeId,
        first_name: impl Into<String>,
        last_name:  impl Into<String>,
        salary:     Money,
        manager_id: Option<EmployeeId>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name:  last_name.into(),
            salary,
            manager_id,
        }
    }

    /// True when the employee has no manager reference.
    pub fn is_root(&self) -> bool {
        self.manager_id.is_none()
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} (id {})", self.first_name, self.last_name, self.id)
    }
}
