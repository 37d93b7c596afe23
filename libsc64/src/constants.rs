// libsc64/src/constants.rs
//! Wire-level constants of the SC64 serial protocol

/// Tag prefixed to every host->device command frame
pub const CMD_TAG: [u8; 3] = *b"CMD";

/// Tag of a successful synchronous response
pub const CMP_TAG: [u8; 3] = *b"CMP";

/// Tag of an unsolicited asynchronous packet
pub const PKT_TAG: [u8; 3] = *b"PKT";

/// Tag of a failed synchronous response
pub const ERR_TAG: [u8; 3] = *b"ERR";

/// Incoming header: tag(3) + id(1)
pub const FRAME_HEADER_LEN: usize = 4;

/// Incoming length prefix (big-endian u32)
pub const FRAME_LENGTH_LEN: usize = 4;

/// Outgoing command frame without data: tag(3) + id(1) + arg0(4) + arg1(4)
pub const COMMAND_FRAME_LEN: usize = 12;

/// Identifier reported by a genuine SC64
pub const SC64_IDENTIFIER: [u8; 4] = *b"SCv2";

/// Firmware major version this library speaks
pub const SUPPORTED_MAJOR_VERSION: u16 = 2;

/// Lowest firmware minor version accepted within the supported major
pub const SUPPORTED_MINOR_VERSION: u16 = 20;

/// Fixed serial line rate
pub const BAUD_RATE: u32 = 115_200;

/// Bound on each control-line phase of the reset handshake (ms)
pub const HANDSHAKE_TIMEOUT_MS: u64 = 1000;

/// Pause between control-line polls (us)
pub const HANDSHAKE_POLL_INTERVAL_US: u64 = 100;

/// Largest single transport read when pulling a payload
pub const PAYLOAD_READ_CHUNK: usize = 64 * 1024;
