// libsc64/src/protocol/classify.rs

//! Classification of decoded frames against what the caller is waiting for.

use crate::protocol::frame::{Frame, FrameTag};

/// What the caller is blocked on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expectation {
    Response,
    Packet,
}

/// Completed synchronous exchange (`CMP` or `ERR`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub id: u8,
    pub data: Vec<u8>,
    pub error: bool,
}

/// Unsolicited device notification (`PKT`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsyncPacket {
    pub id: u8,
    pub data: Vec<u8>,
}

/// Outcome of classifying one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classified {
    Response(Response),
    Packet(AsyncPacket),
    /// A packet arrived while a response was awaited. Its payload is gone.
    Discarded { id: u8, len: usize },
}

/// Map a frame to a typed result. `CMP`/`ERR` always yield a `Response`;
/// `PKT` only becomes an `AsyncPacket` when one was awaited.
pub fn classify(frame: Frame, expect: Expectation) -> Classified {
    let Frame { tag, id, payload } = frame;
    match tag {
        FrameTag::Packet => match expect {
            Expectation::Packet => Classified::Packet(AsyncPacket { id, data: payload }),
            Expectation::Response => Classified::Discarded {
                id,
                len: payload.len(),
            },
        },
        FrameTag::Completion => Classified::Response(Response {
            id,
            data: payload,
            error: false,
        }),
        FrameTag::Error => Classified::Response(Response {
            id,
            data: payload,
            error: true,
        }),
    }
}
