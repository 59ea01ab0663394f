//! Rendering of analysis findings. Text is one line per finding; JSON is
//! the serialized `AnalysisReport`.

use crate::{
    analyzer::{AnalysisReport, ReportingLineFinding},
    compensation::SalaryFinding,
    error::AnalysisResult,
};
use std::io::Write;

pub fn reporting_line_message(finding: &ReportingLineFinding) -> String {
    format!(
        "Employee {} has a reporting line that is too long by {}",
        finding.employee, finding.excess
    )
}

pub fn salary_message(finding: &SalaryFinding) -> String {
    format!(
        "Manager {} earns {} than they should by {}",
        finding.manager,
        finding.discrepancy.kind.comparative(),
        finding.discrepancy.amount
    )
}

/// Reporting-line findings first, then salary findings.
pub fn write_text<W: Write>(report: &AnalysisReport, out: &mut W) -> AnalysisResult<()> {
    for finding in &report.long_reporting_lines {
        writeln!(out, "{}", reporting_line_message(finding))?;
    }
    for finding in &report.salary_discrepancies {
        writeln!(out, "{}", salary_message(finding))?;
    }
    Ok(())
}

pub fn write_json<W: Write>(report: &AnalysisReport, out: &mut W) -> AnalysisResult<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}
