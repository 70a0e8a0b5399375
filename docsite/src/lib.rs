//! Expose docsite's internal API for the binary, xtask and integration tests.
pub mod cli;
pub mod error;
pub mod site;
