//! Common test utilities and helpers

#![allow(dead_code)] // Test utilities may not all be used in every test file

pub mod builders;
pub mod mock_helpers;

use std::time::{Duration, Instant};
use trellis_view::Workbench;

/// Upper bound for waiting on the engine worker
pub fn test_timeout() -> Duration {
    Duration::from_secs(5)
}

/// Assert two floats are approximately equal
pub fn assert_float_eq(a: f64, b: f64, epsilon: f64) {
    assert!(
        (a - b).abs() < epsilon,
        "Expected {} to be approximately equal to {} (epsilon: {})",
        a,
        b,
        epsilon
    );
}

/// Pump worker messages until the pending submission completes
pub fn wait_until_idle(workbench: &mut Workbench) {
    let deadline = Instant::now() + test_timeout();
    while workbench.is_pending() {
        workbench.process_engine_messages();
        assert!(Instant::now() < deadline, "engine worker did not reply in time");
        std::thread::sleep(Duration::from_millis(5));
    }
}
