//! Hierarchy index: who reports to whom.
//!
//! Built once per analysis run from the flat roster and read-only after
//! that. Two lookups are kept side by side:
//!   - manager id → direct reports, in roster order
//!   - employee id → employee record, for walking reporting lines upward
//!
//! Nothing here validates that a referenced manager exists. A dangling
//! `manager_id` still produces a bucket keyed by that id.

use crate::{employee::Employee, types::EmployeeId};
use std::collections::{hash_map::Entry, HashMap};

pub struct HierarchyIndex<'a> {
    by_id:   HashMap<EmployeeId, &'a Employee>,
    reports: HashMap<EmployeeId, Vec<&'a Employee>>,
}

impl<'a> HierarchyIndex<'a> {
    pub fn build(employees: &'a [Employee]) -> Self {
        let mut by_id = HashMap::with_capacity(employees.len());
        let mut reports: HashMap<EmployeeId, Vec<&'a Employee>> = HashMap::new();

        for employee in employees {
            match by_id.entry(employee.id) {
                Entry::Vacant(slot) => {
                    slot.insert(employee);
                }
                Entry::Occupied(_) => {
                    log::warn!(
                        "hierarchy: duplicate employee id {}; first record is used for manager lookup",
                        employee.id
                    );
                }
            }
            if let Some(manager_id) = employee.manager_id {
                reports.entry(manager_id).or_default().push(employee);
            }
        }

        log::debug!(
            "hierarchy: indexed {} employees under {} managers",
            by_id.len(),
            reports.len()
        );

        Self { by_id, reports }
    }

    /// Look up an employee by id. Duplicate ids resolve to the first record.
    pub fn employee(&self, id: EmployeeId) -> Option<&'a Employee> {
        self.by_id.get(&id).copied()
    }

    /// The employee's manager record, if the reference resolves.
    pub fn manager_of(&self, employee: &Employee) -> Option<&'a Employee> {
        employee.manager_id.and_then(|id| self.employee(id))
    }

    /// Direct reports of `manager_id` in roster order. Empty when none.
    pub fn direct_reports(&self, manager_id: EmployeeId) -> &[&'a Employee] {
        self.reports
            .get(&manager_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The full manager → direct reports grouping.
    pub fn subordinates(&self) -> &HashMap<EmployeeId, Vec<&'a Employee>> {
        &self.reports
    }

    /// Ids that have at least one direct report. No ordering guarantee.
    pub fn managers(&self) -> impl Iterator<Item = EmployeeId> + '_ {
        self.reports.keys().copied()
    }

    pub fn manager_count(&self) -> usize {
        self.reports.len()
    }

    pub fn employee_count(&self) -> usize {
        self.by_id.len()
    }
}
