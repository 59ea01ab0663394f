use crate::types::EmployeeId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Missing configuration property '{key}'")]
    MissingProperty { key: String },

    #[error("Invalid value {value:?} for '{key}': {reason}")]
    InvalidProperty {
        key:    String,
        value:  String,
        reason: String,
    },

    #[error("Invalid salary band: low ratio {low} exceeds high ratio {high}")]
    InvertedSalaryBand { low: String, high: String },

    #[error("Malformed roster record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("Cyclic reporting line through employees {chain:?}")]
    CyclicHierarchy { chain: Vec<EmployeeId> },

    #[error("Salary arithmetic overflowed while auditing manager {manager}")]
    SalaryOverflow { manager: EmployeeId },
}

pub type AnalysisResult<T> = Result<T, AnalysisError>;
