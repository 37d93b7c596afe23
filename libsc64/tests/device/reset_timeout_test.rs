use std::time::{Duration, Instant};

use libsc64::Error;
use libsc64::device::Device;
use libsc64::error::HandshakePhase;
use libsc64::test_support::SharedMock;
use serial_test::serial;

// Wall-clock assertions; run one at a time so they do not skew each other.

#[test]
#[serial]
fn default_reset_times_out_after_about_one_second() {
    let shared = SharedMock::new();
    shared.borrow_mut().set_control_line_stuck(false);

    let start = Instant::now();
    let result = Device::new_with_transport(shared.boxed()).reset();
    let elapsed = start.elapsed();

    match result {
        Err(Error::HandshakeTimeout {
            phase: HandshakePhase::Assert,
            timeout_ms: 1000,
        }) => {}
        Err(other) => panic!("expected assert timeout, got: {:?}", other),
        Ok(_) => panic!("expected assert timeout, got a ready device"),
    }
    assert!(elapsed >= Duration::from_millis(1000), "{:?}", elapsed);
    assert!(elapsed < Duration::from_secs(3), "{:?}", elapsed);
}

#[test]
#[serial]
fn deassert_phase_has_its_own_bound() {
    let shared = SharedMock::new();
    shared.borrow_mut().set_control_line_stuck(true);

    let start = Instant::now();
    let result = Device::new_with_transport(shared.boxed()).reset();
    assert!(matches!(
        result,
        Err(Error::HandshakeTimeout {
            phase: HandshakePhase::Deassert,
            ..
        })
    ));
    assert!(start.elapsed() >= Duration::from_millis(1000));
}
