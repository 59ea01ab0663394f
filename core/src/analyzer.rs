//! Analysis facade: runs both diagnostics over one hierarchy index.
//!
//! RULES:
//!   - Pure: no I/O, no state carried between runs.
//!   - Each run gets a fresh depth memo.
//!   - Findings come back in roster order, so two runs over the same
//!     snapshot produce identical reports.

use crate::{
    compensation::{CompensationAuditor, SalaryFinding},
    config::AnalyzerConfig,
    depth::DepthResolver,
    employee::Employee,
    error::AnalysisResult,
    hierarchy::HierarchyIndex,
    types::Depth,
};
use serde::Serialize;

/// An employee whose reporting line exceeds the configured threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportingLineFinding {
    pub employee: Employee,
    pub depth:    Depth,
    /// `depth - threshold`, always at least 1.
    pub excess:   Depth,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    pub long_reporting_lines: Vec<ReportingLineFinding>,
    pub salary_discrepancies: Vec<SalaryFinding>,
}

impl AnalysisReport {
    pub fn is_empty(&self) -> bool {
        self.long_reporting_lines.is_empty() && self.salary_discrepancies.is_empty()
    }
}

pub struct OrgAnalyzer {
    config:  AnalyzerConfig,
    auditor: CompensationAuditor,
}

impl OrgAnalyzer {
    pub fn new(config: AnalyzerConfig) -> AnalysisResult<Self> {
        config.validate()?;
        let auditor = CompensationAuditor::from_config(&config);
        Ok(Self { config, auditor })
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Employees whose depth is greater than the threshold, with the excess.
    pub fn long_reporting_lines(
        &self,
        employees: &[Employee],
        index:     &HierarchyIndex<'_>,
    ) -> AnalysisResult<Vec<ReportingLineFinding>> {
        let threshold = self.config.hierarchy_depth_threshold;
        let mut resolver = DepthResolver::new(index);
        let mut findings = Vec::new();

        for employee in employees {
            let depth = resolver.depth(Some(employee))?;
            if depth > threshold {
                findings.push(ReportingLineFinding {
                    employee: employee.clone(),
                    depth,
                    excess: depth - threshold,
                });
            }
        }

        log::debug!(
            "analyzer: {} of {} employees exceed depth {threshold} ({} depths memoised)",
            findings.len(),
            employees.len(),
            resolver.memoized()
        );
        Ok(findings)
    }

    pub fn salary_discrepancies(
        &self,
        employees: &[Employee],
        index:     &HierarchyIndex<'_>,
    ) -> AnalysisResult<Vec<SalaryFinding>> {
        self.auditor.audit(employees, index)
    }

    /// Run both analyses.
    pub fn analyze(
        &self,
        employees: &[Employee],
        index:     &HierarchyIndex<'_>,
    ) -> AnalysisResult<AnalysisReport> {
        let report = AnalysisReport {
            long_reporting_lines: self.long_reporting_lines(employees, index)?,
            salary_discrepancies: self.salary_discrepancies(employees, index)?,
        };
        log::info!(
            "analyzer: {} employees, {} long reporting lines, {} salary discrepancies",
            employees.len(),
            report.long_reporting_lines.len(),
            report.salary_discrepancies.len()
        );
        Ok(report)
    }
}
