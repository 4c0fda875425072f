//! Scenario message records.

pub mod folder;
pub mod message;
