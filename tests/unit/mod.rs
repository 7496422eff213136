//! Unit tests for ringq modules
//!
//! These tests exercise the public API without spawning the binary.

mod test_config;
mod test_ring_buffer;
mod test_session;
