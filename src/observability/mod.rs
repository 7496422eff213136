//! Observability module
//!
//! Structured logging for queue sessions.

pub mod telemetry;
