//! Depth resolver: length of each employee's reporting line.
//!
//! depth(root) = 0
//! depth(e)    = 1 + depth(manager(e))
//!
//! A manager reference that does not resolve to any roster entry counts as
//! a root one level up, so such an employee has depth 1.
//!
//! Reporting lines are walked iteratively and every node on the walked path
//! is memoised on the way back down, so a roster is resolved in linear time
//! and very deep chains cannot exhaust the stack. A walk that revisits a
//! node already on its own path is a cycle and fails with
//! `AnalysisError::CyclicHierarchy`.

use crate::{
    employee::Employee,
    error::{AnalysisError, AnalysisResult},
    hierarchy::HierarchyIndex,
    types::{Depth, EmployeeId},
};
use std::collections::{HashMap, HashSet};

/// Resolves depths against one hierarchy index. The memo lives as long as
/// the resolver; use one resolver per analysis run.
pub struct DepthResolver<'i, 'a> {
    index: &'i HierarchyIndex<'a>,
    memo:  HashMap<EmployeeId, Depth>,
}

impl<'i, 'a> DepthResolver<'i, 'a> {
    pub fn new(index: &'i HierarchyIndex<'a>) -> Self {
        Self {
            index,
            memo: HashMap::new(),
        }
    }

    /// Depth of a single roster record. `None` resolves to 0.
    ///
    /// The record itself need not be the canonical entry for its id; only
    /// its `manager_id` is followed.
    pub fn depth(&mut self, employee: Option<&Employee>) -> AnalysisResult<Depth> {
        let Some(employee) = employee else {
            return Ok(0);
        };
        match employee.manager_id {
            None => Ok(0),
            Some(manager_id) if manager_id == employee.id => {
                Err(AnalysisError::CyclicHierarchy { chain: vec![employee.id] })
            }
            Some(manager_id) => Ok(self.depth_of_id(manager_id)? + 1),
        }
    }

    /// Depth of the employee indexed under `id`. Unknown ids resolve to 0.
    pub fn depth_of_id(&mut self, id: EmployeeId) -> AnalysisResult<Depth> {
        let mut path: Vec<EmployeeId> = Vec::new();
        let mut on_path: HashSet<EmployeeId> = HashSet::new();
        let mut cursor = id;

        let base = loop {
            if let Some(&known) = self.memo.get(&cursor) {
                break known;
            }
            let Some(employee) = self.index.employee(cursor) else {
                if !path.is_empty() {
                    log::debug!(
                        "depth: employee {} references unknown manager {cursor}",
                        path[path.len() - 1]
                    );
                }
                break 0;
            };
            let Some(manager_id) = employee.manager_id else {
                self.memo.insert(cursor, 0);
                break 0;
            };
            if !on_path.insert(cursor) {
                let start = path.iter().position(|&p| p == cursor).unwrap_or(0);
                return Err(AnalysisError::CyclicHierarchy {
                    chain: path[start..].to_vec(),
                });
            }
            path.push(cursor);
            cursor = manager_id;
        };

        let mut depth = base;
        for &node in path.iter().rev() {
            depth += 1;
            self.memo.insert(node, depth);
        }
        Ok(depth)
    }

    /// Number of ids with a cached depth.
    pub fn memoized(&self) -> usize {
        self.memo.len()
    }
}
