//! Tests for tracing initialization.

use std::sync::Mutex;

use leveler_core::tracing::{init_tracing, init_tracing_with_filter};

/// Serializes tests that touch `LEVELER_LOG`.
static TRACING_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn init_tracing_is_idempotent() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing();
    init_tracing();
    init_tracing_with_filter("leveler=debug");
}

#[test]
fn invalid_filter_falls_back_to_default() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("LEVELER_LOG", "this_is=not=a=valid=filter");
    init_tracing();
    std::env::remove_var("LEVELER_LOG");
    init_tracing_with_filter("[[[");
}
