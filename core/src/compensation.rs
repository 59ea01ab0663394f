//! Compensation auditor: manager pay against their direct reports.
//!
//! For every manager with at least one direct report:
//!   average = sum(report salaries) / count, rounded half-up at the scale
//!             of the summed salaries
//!   band    = [average × low ratio, average × high ratio]
//!
//! A salary below the band is BELOW by (lower − salary); above the band is
//! ABOVE by (salary − upper). Both bounds are inclusive, so a salary on a
//! bound produces no finding.

use crate::{
    config::AnalyzerConfig,
    employee::Employee,
    error::{AnalysisError, AnalysisResult},
    hierarchy::HierarchyIndex,
    types::{EmployeeId, Money},
};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscrepancyType {
    Below,
    Above,
}

impl DiscrepancyType {
    /// Comparative used when rendering a finding ("earns less than...").
    pub fn comparative(&self) -> &'static str {
        match self {
            Self::Below => "less",
            Self::Above => "more",
        }
    }
}

impl fmt::Display for DiscrepancyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Below => f.write_str("BELOW"),
            Self::Above => f.write_str("ABOVE"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalaryDiscrepancy {
    #[serde(rename = "type")]
    pub kind:   DiscrepancyType,
    /// Distance to the crossed bound. Never negative.
    pub amount: Money,
}

/// Acceptable salary range for one manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SalaryBand {
    pub lower: Money,
    pub upper: Money,
}

impl SalaryBand {
    pub fn contains(&self, salary: Money) -> bool {
        self.lower <= salary && salary <= self.upper
    }

    pub fn classify(&self, salary: Money) -> Option<SalaryDiscrepancy> {
        if self.contains(salary) {
            None
        } else if salary < self.lower {
            Some(SalaryDiscrepancy {
                kind:   DiscrepancyType::Below,
                amount: self.lower - salary,
            })
        } else {
            Some(SalaryDiscrepancy {
                kind:   DiscrepancyType::Above,
                amount: salary - self.upper,
            })
        }
    }
}

/// One flagged manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalaryFinding {
    pub manager:        Employee,
    pub report_count:   usize,
    pub report_average: Money,
    pub band:           SalaryBand,
    pub discrepancy:    SalaryDiscrepancy,
}

pub struct CompensationAuditor {
    low_ratio:  Decimal,
    high_ratio: Decimal,
}

impl CompensationAuditor {
    pub fn new(low_ratio: Decimal, high_ratio: Decimal) -> Self {
        Self { low_ratio, high_ratio }
    }

    pub fn from_config(config: &AnalyzerConfig) -> Self {
        Self::new(config.low_salary_ratio, config.high_salary_ratio)
    }

    /// Mean salary of `manager`'s `reports`, or `None` for an empty slice.
    ///
    /// Sum first, divide once, then round half-up to the scale of the sum,
    /// so the result does not depend on report order. Fails with
    /// `SalaryOverflow` when the sum leaves the decimal range.
    pub fn average_salary(
        manager: EmployeeId,
        reports: &[&Employee],
    ) -> AnalysisResult<Option<Money>> {
        if reports.is_empty() {
            return Ok(None);
        }
        let overflow = || AnalysisError::SalaryOverflow { manager };
        let sum = reports
            .iter()
            .try_fold(Decimal::ZERO, |acc, e| acc.checked_add(e.salary))
            .ok_or_else(overflow)?;
        let scale = sum.scale();
        let mut average = sum
            .checked_div(Decimal::from(reports.len()))
            .ok_or_else(overflow)?
            .round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
        average.rescale(scale);
        Ok(Some(average))
    }

    pub fn band_for(&self, manager: EmployeeId, average: Money) -> AnalysisResult<SalaryBand> {
        let scaled = |ratio: Decimal| {
            average
                .checked_mul(ratio)
                .ok_or(AnalysisError::SalaryOverflow { manager })
        };
        Ok(SalaryBand {
            lower: scaled(self.low_ratio)?,
            upper: scaled(self.high_ratio)?,
        })
    }

    /// Classify one manager against their direct reports.
    pub fn assess(
        &self,
        manager: &Employee,
        reports: &[&Employee],
    ) -> AnalysisResult<Option<SalaryFinding>> {
        let Some(average) = Self::average_salary(manager.id, reports)? else {
            return Ok(None);
        };
        let band = self.band_for(manager.id, average)?;
        Ok(band.classify(manager.salary).map(|discrepancy| SalaryFinding {
            manager: manager.clone(),
            report_count: reports.len(),
            report_average: average,
            band,
            discrepancy,
        }))
    }

    /// Audit every roster entry that manages someone, in roster order.
    pub fn audit(
        &self,
        employees: &[Employee],
        index:     &HierarchyIndex<'_>,
    ) -> AnalysisResult<Vec<SalaryFinding>> {
        let mut findings = Vec::new();
        for manager in employees {
            if let Some(finding) = self.assess(manager, index.direct_reports(manager.id))? {
                findings.push(finding);
            }
        }

        log::debug!(
            "compensation: {} of {} managers outside band [{}, {}] x average",
            findings.len(),
            index.manager_count(),
            self.low_ratio,
            self.high_ratio
        );
        Ok(findings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(id: i64, salary: &str) -> Employee {
        Employee::new(id, "R", "Report", salary.parse().unwrap(), Some(1))
    }

    #[test]
    fn average_rounds_half_up_at_input_scale() {
        let a = report(2, "1000.01");
        let b = report(3, "1000.00");
        let avg = CompensationAuditor::average_salary(1, &[&a, &b]).unwrap().unwrap();
        assert_eq!(avg.to_string(), "1000.01");
    }

    #[test]
    fn average_keeps_scale_of_exact_result() {
        let a = report(2, "10.00");
        let b = report(3, "30.00");
        let avg = CompensationAuditor::average_salary(1, &[&a, &b]).unwrap().unwrap();
        assert_eq!(avg.to_string(), "20.00");
    }

    #[test]
    fn average_of_nothing_is_none() {
        assert!(CompensationAuditor::average_salary(1, &[]).unwrap().is_none());
    }

    #[test]
    fn band_bounds_are_inclusive() {
        let band = SalaryBand {
            lower: "60000".parse().unwrap(),
            upper: "75000".parse().unwrap(),
        };
        assert!(band.classify("60000".parse().unwrap()).is_none());
        assert!(band.classify("75000".parse().unwrap()).is_none());
        assert!(band.contains("60000".parse().unwrap()));
        assert!(!band.contains("59999.99".parse().unwrap()));
    }
}
