//! Test utilities for fieldsales services.
//!
//! Provides the contract fixture loader and multipart invoice form builders.
//! Import in `#[cfg(test)]` blocks and `tests/` only, never in production code.

pub mod fixture;
pub mod form;
