//! Tracing/logging setup shared by native SalaryCast processes.
//!
//! The wasm front end does not use this crate; it installs a panic hook and
//! relies on the browser console.

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filters, layers).
pub mod tracing;
