//! orgscan-core: organisational hierarchy diagnostics.
//!
//! Pipeline:
//!   roster → HierarchyIndex → { DepthResolver, CompensationAuditor }
//!          → AnalysisReport → report rendering
//!
//! Everything between ingestion and rendering is a pure, single-threaded
//! computation over an immutable snapshot.

pub mod analyzer;
pub mod compensation;
pub mod config;
pub mod depth;
pub mod employee;
pub mod error;
pub mod hierarchy;
pub mod report;
pub mod roster;
pub mod types;
