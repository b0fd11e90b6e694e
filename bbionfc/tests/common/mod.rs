// Shared helpers for integration tests. Each aggregator pulls this in with
// `#[path = "../common/mod.rs"]`, so not every helper is used everywhere.
#![allow(dead_code)]

pub use fixtures::*;

/// Route `log` output through env_logger; set RUST_LOG=trace to see frames.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
