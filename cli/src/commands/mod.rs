//! Command implementations.

pub mod scaffold;
pub mod triage;
pub mod validate;
