//! Core data structures and error types.

pub mod data_value;
pub mod error;
