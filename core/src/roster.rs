//! Roster ingestion: comma-separated employee records.
//!
//! Layout: `id,firstName,lastName,salary[,managerId]` with one header line.
//! An absent or empty managerId marks a root employee.

use crate::{
    employee::Employee,
    error::{AnalysisError, AnalysisResult},
    types::{EmployeeId, Money},
};
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    str::FromStr,
};

pub fn read_employees(path: impl AsRef<Path>) -> AnalysisResult<Vec<Employee>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| AnalysisError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let employees = parse_employees(BufReader::new(file))?;
    log::info!("roster: read {} employees from {}", employees.len(), path.display());
    Ok(employees)
}

pub fn parse_employees<R: BufRead>(reader: R) -> AnalysisResult<Vec<Employee>> {
    let mut employees = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if index == 0 || line.trim().is_empty() {
            continue;
        }
        employees.push(parse_record(&line, index + 1)?);
    }
    Ok(employees)
}

fn parse_record(line: &str, line_no: usize) -> AnalysisResult<Employee> {
    let malformed = |reason: String| AnalysisError::MalformedRecord { line: line_no, reason };

    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() < 4 || fields.len() > 5 {
        return Err(malformed(format!("expected 4 or 5 fields, found {}", fields.len())));
    }

    let id = parse_id(fields[0]).map_err(|e| malformed(format!("id {:?}: {e}", fields[0])))?;
    let salary = Money::from_str(fields[3])
        .map_err(|e| malformed(format!("salary {:?}: {e}", fields[3])))?;
    if salary.is_sign_negative() && !salary.is_zero() {
        return Err(malformed(format!("salary {salary} is negative")));
    }
    let manager_id = match fields.get(4) {
        None | Some(&"") => None,
        Some(raw) => Some(parse_id(raw).map_err(|e| malformed(format!("managerId {raw:?}: {e}")))?),
    };

    Ok(Employee::new(id, fields[1], fields[2], salary, manager_id))
}

fn parse_id(raw: &str) -> Result<EmployeeId, std::num::ParseIntError> {
    raw.parse::<EmployeeId>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const HEADER: &str = "id,firstName,lastName,salary,managerId\n";

    fn parse(body: &str) -> AnalysisResult<Vec<Employee>> {
        parse_employees(Cursor::new(format!("{HEADER}{body}")))
    }

    #[test]
    fn root_has_no_manager_column() {
        let employees = parse("123,Joe,Doe,60000\n124,Martin,Chekov,45000,123\n").unwrap();
        assert_eq!(employees.len(), 2);
        assert_eq!(employees[0].manager_id, None);
        assert_eq!(employees[0].salary, Money::from(60000));
        assert_eq!(employees[1].manager_id, Some(123));
        assert_eq!(employees[1].first_name, "Martin");
    }

    #[test]
    fn empty_manager_column_means_root() {
        let employees = parse("123,Joe,Doe,60000,\n").unwrap();
        assert!(employees[0].is_root());
    }

    #[test]
    fn header_only_is_empty() {
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn blank_lines_are_skipped() {
        let employees = parse("\n123,Joe,Doe,60000\n   \n").unwrap();
        assert_eq!(employees.len(), 1);
    }

    #[test]
    fn fields_are_trimmed() {
        let employees = parse(" 7 , Ann , Lee , 1000.50 , 3 \n").unwrap();
        assert_eq!(employees[0].id, 7);
        assert_eq!(employees[0].last_name, "Lee");
        assert_eq!(employees[0].salary.to_string(), "1000.50");
        assert_eq!(employees[0].manager_id, Some(3));
    }

    #[test]
    fn non_numeric_salary_reports_line_number() {
        let err = parse("123,Joe,Doe,60000\n124,Martin,Chekov,lots,123\n").unwrap_err();
        match err {
            AnalysisError::MalformedRecord { line, reason } => {
                assert_eq!(line, 3);
                assert!(reason.contains("salary"), "unexpected reason: {reason}");
            }
            other => panic!("expected MalformedRecord, got {other:?}"),
        }
    }

    #[test]
    fn rejects_negative_salary_and_short_rows() {
        assert!(matches!(
            parse("1,A,B,-5\n"),
            Err(AnalysisError::MalformedRecord { line: 2, .. })
        ));
        assert!(matches!(
            parse("1,A,B\n"),
            Err(AnalysisError::MalformedRecord { line: 2, .. })
        ));
    }

    #[test]
    fn non_numeric_manager_is_malformed() {
        assert!(matches!(
            parse("1,A,B,100,boss\n"),
            Err(AnalysisError::MalformedRecord { .. })
        ));
    }
}
