#[path = "../common/mod.rs"]
mod common;

use libsc64::Error;
use libsc64::error::ReadStage;
use libsc64::protocol::{Frame, FrameTag};
use libsc64::transport::MockTransport;

#[test]
fn sd_status_fixture_decodes_from_wire() {
    let bytes = common::fixtures::sd_status_frame();
    let (frame, used) = Frame::decode(&bytes).expect("frame decode");
    assert_eq!(used, bytes.len());
    assert_eq!(frame.tag, FrameTag::Completion);
    assert_eq!(frame.id, b'i');
    assert_eq!(frame.payload, common::fixtures::sd_status_payload());
}

#[test]
fn back_to_back_frames_read_in_order() {
    let mut mock = MockTransport::new();
    mock.push_bytes(&common::fixtures::unsolicited_packet());
    mock.push_bytes(&common::fixtures::identifier_frame());

    let first = Frame::read_from(&mut mock, 1000).unwrap();
    let second = Frame::read_from(&mut mock, 1000).unwrap();
    assert_eq!(first.tag, FrameTag::Packet);
    assert_eq!(second.tag, FrameTag::Completion);
    assert_eq!(second.payload, b"SCv2");
    assert_eq!(mock.pending_input(), 0);
}

#[test]
fn truncated_buffer_is_never_returned_partially() {
    let bytes = common::fixtures::identifier_frame();
    match Frame::decode(&bytes[..bytes.len() - 1]) {
        Err(Error::TransportRead {
            stage: ReadStage::Payload,
            expected: 4,
            actual: 3,
        }) => {}
        other => panic!("expected payload read failure, got: {:?}", other),
    }
}

#[test]
fn outgoing_tag_is_not_a_valid_incoming_tag() {
    let mut mock = MockTransport::new();
    mock.push_bytes(b"CMDv\0\0\0\0");
    assert!(matches!(
        Frame::read_from(&mut mock, 1000),
        Err(Error::UnknownFrameTag { tag }) if &tag == b"CMD"
    ));
}
