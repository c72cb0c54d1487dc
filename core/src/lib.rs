//! Codegraph Core Types
//!
//! This crate provides the foundational types used throughout the codegraph tools:
//! - Identity types (NodeId)
//! - Entity structures (Edge)
//! - Report message constants shared by the command surface
//! - Common error types

mod entity;
mod error;
mod id;
pub mod messages;

pub use entity::*;
pub use error::*;
pub use id::*;
