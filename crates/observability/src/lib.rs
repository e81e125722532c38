//! `faregate-observability` — shared tracing/logging setup.
//!
//! The policy crates only emit `tracing` events; installing a subscriber is
//! the job of whatever hosts them (a server binary, an integration test).

pub mod tracing;

/// Initialize process-wide logging.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}
