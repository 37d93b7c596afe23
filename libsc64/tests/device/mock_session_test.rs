#[path = "../common/mod.rs"]
mod common;

use common::fixtures;
use libsc64::types::{ConfigId, SdCardResult};

#[test]
fn full_session_against_mock() {
    let (shared, mut dev) = common::shared_ready_device(vec![
        fixtures::state_reset_frame(),
        fixtures::identifier_frame(),
        fixtures::version_frame(2, 20, 1),
        fixtures::config_value_frame(1),
        fixtures::sd_status_frame(),
    ]);

    dev.state_reset().unwrap();
    assert!(dev.check_device().unwrap());
    assert!(dev.check_firmware_version().unwrap());
    assert_eq!(dev.config_get(ConfigId::ButtonMode).unwrap(), 1);

    let sd = dev.get_sd_card_status().unwrap();
    assert_eq!(sd.result, SdCardResult::Ok);
    assert!(sd.status.byte_swap);

    let opcodes: Vec<u8> = shared.borrow().sent.iter().map(|f| f[3]).collect();
    assert_eq!(opcodes, b"RvVci".to_vec());
    assert_eq!(shared.borrow().flushes, 1 + 5);
}

#[test]
fn unsolicited_packet_is_dropped_and_counted() {
    let mut reply = fixtures::unsolicited_packet();
    reply.extend(fixtures::identifier_frame());
    let (_shared, mut dev) = common::shared_ready_device(vec![reply]);

    assert!(dev.check_device().unwrap());
    assert_eq!(dev.discarded_packets(), 1);
}

#[test]
fn packet_can_be_awaited_explicitly() {
    let (shared, mut dev) = common::shared_ready_device(vec![]);
    shared
        .borrow_mut()
        .push_bytes(&fixtures::unsolicited_packet());
    let packet = dev.receive_packet().unwrap();
    assert_eq!(packet.id, b'U');
    assert_eq!(packet.data, hex::decode("deadbeef").unwrap());
}
