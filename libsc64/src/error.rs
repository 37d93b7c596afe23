// libsc64/src/error.rs

use thiserror::Error;

/// Stage of an incoming frame read
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ReadStage {
    /// tag + id
    #[display(fmt = "header")]
    Header,
    /// 4-byte length prefix
    #[display(fmt = "length")]
    Length,
    /// payload bytes
    #[display(fmt = "payload")]
    Payload,
}

/// Phase of the control-line reset handshake
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum HandshakePhase {
    /// waiting for the line to read back asserted
    #[display(fmt = "assert")]
    Assert,
    /// waiting for the line to read back deasserted
    #[display(fmt = "deassert")]
    Deassert,
}

/// Payload length a response was held to
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PayloadLen {
    #[display(fmt = "{}", _0)]
    Exactly(usize),
    #[display(fmt = "at least {}", _0)]
    AtLeast(usize),
}

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("device not found")]
    DeviceNotFound,

    #[error("{stage} read failed: expected {expected} bytes, got {actual}")]
    TransportRead {
        stage: ReadStage,
        expected: usize,
        actual: usize,
    },

    #[error("unknown frame tag: {tag:02x?}")]
    UnknownFrameTag { tag: [u8; 3] },

    #[error("invalid command response: expected id {expected:#04x}, got {actual:#04x}")]
    Correlation { expected: u8, actual: u8 },

    #[error("device reported an error for command {command:#04x}")]
    Device { command: u8 },

    #[error("malformed payload: expected {expected} bytes, got {actual}")]
    MalformedPayload { expected: PayloadLen, actual: usize },

    #[error("unknown sd card result code: {0}")]
    UnknownResultCode(u32),

    #[error("reset timeout: control line did not {phase} within {timeout_ms} ms")]
    HandshakeTimeout {
        phase: HandshakePhase,
        timeout_ms: u64,
    },

    #[error("unexpected response frame (id {id:#04x}) while awaiting a packet")]
    UnexpectedResponse { id: u8 },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    // serialport は `serial` feature 有効時のみ依存する
    #[cfg(feature = "serial")]
    #[error("serial port error: {0}")]
    Serial(#[from] serialport::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_read_display_names_stage() {
        let err = Error::TransportRead {
            stage: ReadStage::Header,
            expected: 4,
            actual: 1,
        };
        let s = format!("{}", err);
        assert!(s.starts_with("header read failed"));

        let err = Error::TransportRead {
            stage: ReadStage::Payload,
            expected: 8,
            actual: 3,
        };
        assert!(format!("{}", err).starts_with("payload read failed"));
    }

    #[test]
    fn correlation_display() {
        let err = Error::Correlation {
            expected: b'v',
            actual: b'V',
        };
        let s = format!("{}", err);
        assert!(s.contains("expected id 0x76"));
        assert!(s.contains("got 0x56"));
    }

    #[test]
    fn handshake_timeout_display() {
        let err = Error::HandshakeTimeout {
            phase: HandshakePhase::Assert,
            timeout_ms: 1000,
        };
        let s = format!("{}", err);
        assert!(s.contains("reset timeout"));
        assert!(s.contains("assert within 1000 ms"));
    }

    #[test]
    fn malformed_payload_display() {
        let exact = Error::MalformedPayload {
            expected: PayloadLen::Exactly(4),
            actual: 5,
        };
        assert_eq!(
            exact.to_string(),
            "malformed payload: expected 4 bytes, got 5"
        );

        let short = Error::MalformedPayload {
            expected: PayloadLen::AtLeast(8),
            actual: 4,
        };
        assert_eq!(
            short.to_string(),
            "malformed payload: expected at least 8 bytes, got 4"
        );
    }

    #[test]
    fn unknown_tag_and_result_display() {
        let t = Error::UnknownFrameTag { tag: *b"XYZ" };
        assert!(format!("{}", t).contains("58"));

        let r = Error::UnknownResultCode(99);
        assert!(format!("{}", r).contains("99"));
    }
}
