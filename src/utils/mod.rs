//! Utility functions shared across layers.
//!
//! - [`code_generator`] - Short code generation
//! - [`url_validator`] - Long URL precondition checks
//! - [`db_error`] - `sqlx` error classification
//! - [`deadline`] - Bounded waits for store and cache calls

pub mod code_generator;
pub mod db_error;
pub mod deadline;
pub mod url_validator;
