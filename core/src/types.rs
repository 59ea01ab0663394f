//! Shared primitive types used across the analysis.

use rust_decimal::Decimal;

/// Stable identifier of an employee record, unique within a roster.
pub type EmployeeId = i64;

/// Number of management links between an employee and a root.
pub type Depth = u32;

/// Monetary amount. Always exact decimal, never float.
pub type Money = Decimal;
