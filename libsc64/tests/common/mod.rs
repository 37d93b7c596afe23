// Shared helpers for integration tests.
#![allow(dead_code)]

pub mod fixtures;

use libsc64::device::{Device, Ready};
use libsc64::test_support::SharedMock;

/// Install env_logger once so `RUST_LOG=libsc64=trace` shows frame dumps.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Reset a device over a fresh shared mock, then queue `replies`.
pub fn shared_ready_device(replies: Vec<Vec<u8>>) -> (SharedMock, Device<Ready>) {
    init_logging();
    let shared = SharedMock::new();
    let device = Device::new_with_transport(shared.boxed())
        .reset()
        .expect("reset handshake");
    for reply in replies {
        shared.borrow_mut().push_reply(reply);
    }
    (shared, device)
}
