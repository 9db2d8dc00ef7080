// Shared helpers for integration tests. Each aggregator pulls this in with
// `#[path = "../common/mod.rs"] mod common;` so not every item is used by
// every test crate.
#![allow(dead_code)]

pub mod fixtures;

#[allow(unused_imports)]
pub mod helpers {
    pub use pn532scan::test_support::*;
}

/// Route `log` output through the test harness; `RUST_LOG=debug` shows the
/// raw frames.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
