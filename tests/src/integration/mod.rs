//! Cross-crate integration tests.

pub mod persistence;
pub mod properties;
pub mod scenarios;
