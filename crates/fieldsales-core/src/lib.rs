//! Shared plumbing for fieldsales services: configuration loading, tracing
//! setup, health probes and common HTTP middleware.

pub mod config;
pub mod health;
pub mod middleware;
pub mod tracing;
