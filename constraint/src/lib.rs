//! Codegraph Constraint
//!
//! Validate a parsed graph against its schema.
//!
//! Responsibilities:
//! - Check every node type against the schema
//! - Check every edge type against the schema
//! - Check that every edge endpoint is a declared node
//! - Collect every violation; nothing short-circuits

mod checker;
mod report;
mod violation;

pub use checker::SchemaChecker;
pub use report::{validate, Summary, ValidationReport};
pub use violation::{Violation, ViolationKind, Violations};
