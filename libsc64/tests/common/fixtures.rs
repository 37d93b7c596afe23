// Commonly used device replies

use libsc64::protocol::FrameTag;
use libsc64::test_support::{completion, frame_bytes};

pub fn identifier_frame() -> Vec<u8> {
    completion(b'v', b"SCv2")
}

pub fn version_payload(major: u16, minor: u16, revision: u32) -> Vec<u8> {
    let mut payload = Vec::with_capacity(8);
    payload.extend_from_slice(&major.to_be_bytes());
    payload.extend_from_slice(&minor.to_be_bytes());
    payload.extend_from_slice(&revision.to_be_bytes());
    payload
}

pub fn version_frame(major: u16, minor: u16, revision: u32) -> Vec<u8> {
    completion(b'V', &version_payload(major, minor, revision))
}

pub fn state_reset_frame() -> Vec<u8> {
    completion(b'R', &[])
}

pub fn config_value_frame(value: u32) -> Vec<u8> {
    completion(b'c', &value.to_be_bytes())
}

/// result = OK, status = inserted | initialized | 50 MHz | byte swap
pub fn sd_status_payload() -> Vec<u8> {
    hex::decode("000000000000001b").unwrap()
}

pub fn sd_status_frame() -> Vec<u8> {
    completion(b'i', &sd_status_payload())
}

pub fn unsolicited_packet() -> Vec<u8> {
    frame_bytes(FrameTag::Packet, b'U', &hex::decode("deadbeef").unwrap())
}
