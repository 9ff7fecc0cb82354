//! Tests for the breachscan tracing/observability system.

use std::sync::Mutex;

use breachscan_core::tracing::setup::init_tracing;

/// Global mutex to serialize tracing tests (env var manipulation).
static TRACING_MUTEX: Mutex<()> = Mutex::new(());

/// BREACHSCAN_LOG=debug is accepted.
#[test]
fn test_breachscan_log_debug() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    // init_tracing reads BREACHSCAN_LOG. Output goes to stderr, which we
    // cannot capture here; we verify the setup path does not panic.
    std::env::set_var("BREACHSCAN_LOG", "debug");
    init_tracing();
    std::env::remove_var("BREACHSCAN_LOG");
}

/// Per-subsystem log level filtering syntax is accepted.
#[test]
fn test_per_subsystem_filtering() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("BREACHSCAN_LOG", "ingest=debug,classify=warn,study=info");
    init_tracing();
    std::env::remove_var("BREACHSCAN_LOG");
}

/// init_tracing() called twice does not panic (idempotent).
#[test]
fn test_init_tracing_idempotent() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing();
    init_tracing();
    init_tracing();
}

/// Invalid BREACHSCAN_LOG value falls back to the default level.
#[test]
fn test_invalid_breachscan_log_fallback() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("BREACHSCAN_LOG", "this_is_garbage_not_a_valid_filter");
    init_tracing();
    std::env::remove_var("BREACHSCAN_LOG");
}
