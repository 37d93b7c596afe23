#[path = "../common/mod.rs"]
mod common;

use libsc64::device::{Device, DeviceBuilder};
use libsc64::test_support::SharedMock;
use libsc64::transport::Transport;

#[test]
fn reset_transitions_to_ready() {
    let shared = SharedMock::new();
    let device = DeviceBuilder::new()
        .with_transport(shared.boxed())
        .with_supported_version(2, 20)
        .build()
        .unwrap();

    // Nothing goes on the wire before the handshake
    assert!(shared.borrow().sent.is_empty());

    let ready = device.reset().unwrap();
    assert_eq!(ready.discarded_packets(), 0);
    assert_eq!(shared.borrow().control_writes, vec![true, false]);
    assert!(shared.borrow().sent.is_empty());
}

#[test]
fn failed_handshake_consumes_device() {
    let shared = SharedMock::new();
    shared.borrow_mut().set_control_line_stuck(false);
    let device = DeviceBuilder::new()
        .with_transport(shared.boxed())
        .with_handshake_timeout_ms(20)
        .build()
        .unwrap();
    assert!(device.reset().is_err());
}

#[test]
fn into_transport_releases_link() {
    let (shared, device) = common::shared_ready_device(vec![]);
    let mut transport = device.into_transport();
    transport.send(b"x").unwrap();
    assert_eq!(shared.borrow().sent, vec![b"x".to_vec()]);
    let _ = Device::new_with_transport(transport);
}
