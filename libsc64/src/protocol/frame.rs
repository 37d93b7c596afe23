// libsc64/src/protocol/frame.rs

use log::trace;

use crate::constants::{
    CMD_TAG, CMP_TAG, COMMAND_FRAME_LEN, ERR_TAG, FRAME_HEADER_LEN, FRAME_LENGTH_LEN, PKT_TAG,
    PAYLOAD_READ_CHUNK,
};
use crate::error::ReadStage;
use crate::transport::Transport;
use crate::utils::HexDump;
use crate::{Error, Result};

/// Category of an incoming frame, selected by its 3-byte tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameTag {
    /// `CMP`: successful synchronous response
    Completion,
    /// `PKT`: asynchronous packet
    Packet,
    /// `ERR`: failed synchronous response
    Error,
}

impl FrameTag {
    pub fn as_bytes(&self) -> &'static [u8; 3] {
        match self {
            Self::Completion => &CMP_TAG,
            Self::Packet => &PKT_TAG,
            Self::Error => &ERR_TAG,
        }
    }

    /// Match a 3-byte tag against the recognized incoming tags.
    pub fn from_bytes(tag: &[u8]) -> Option<Self> {
        [Self::Completion, Self::Packet, Self::Error]
            .into_iter()
            .find(|t| t.as_bytes().as_slice() == tag)
    }
}

/// SC64 wire frames.
///
/// Outgoing: `"CMD" | opcode(1) | arg0(4, BE) | arg1(4, BE) | data(n)` with no
/// length prefix; the device knows the data size for each command.
///
/// Incoming: `tag(3) | id(1) | length(4, BE) | payload(length)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub tag: FrameTag,
    pub id: u8,
    pub payload: Vec<u8>,
}

/// Arguments other than exactly two words are replaced by `[0, 0]`.
pub fn normalize_args(args: &[u32]) -> [u32; 2] {
    match args {
        [a, b] => [*a, *b],
        _ => [0, 0],
    }
}

/// Serialize a command into its outgoing frame.
pub fn encode_command_frame(opcode: u8, args: &[u32], data: &[u8]) -> Vec<u8> {
    let [arg0, arg1] = normalize_args(args);
    let mut out = Vec::with_capacity(COMMAND_FRAME_LEN + data.len());
    out.extend_from_slice(&CMD_TAG);
    out.push(opcode);
    out.extend_from_slice(&arg0.to_be_bytes());
    out.extend_from_slice(&arg1.to_be_bytes());
    out.extend_from_slice(data);
    out
}

impl Frame {
    pub fn new(tag: FrameTag, id: u8, payload: Vec<u8>) -> Self {
        Self { tag, id, payload }
    }

    /// Encode in the incoming (device->host) wire format.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(FRAME_HEADER_LEN + FRAME_LENGTH_LEN + self.payload.len());
        out.extend_from_slice(self.tag.as_bytes());
        out.push(self.id);
        out.extend_from_slice(&(self.payload.len() as u32).to_be_bytes());
        out.extend_from_slice(&self.payload);
        out
    }

    /// Decode one incoming frame from the front of `buf`. Returns the frame
    /// and the number of bytes it occupied.
    pub fn decode(buf: &[u8]) -> Result<(Self, usize)> {
        let header = take(buf, 0, FRAME_HEADER_LEN, ReadStage::Header)?;
        let tag = parse_tag(header)?;
        let id = header[3];
        let len_bytes = take(buf, FRAME_HEADER_LEN, FRAME_LENGTH_LEN, ReadStage::Length)?;
        let len = be_len(len_bytes);
        let start = FRAME_HEADER_LEN + FRAME_LENGTH_LEN;
        let payload = take(buf, start, len, ReadStage::Payload)?;
        Ok((Self::new(tag, id, payload.to_vec()), start + len))
    }

    /// Read exactly one frame from the transport.
    ///
    /// Any short read is fatal. An unrecognized tag fails with
    /// `UnknownFrameTag` after the 4 header bytes were consumed; the stream
    /// is not resynchronized.
    pub fn read_from<T: Transport + ?Sized>(transport: &mut T, timeout_ms: u64) -> Result<Self> {
        let mut header = [0u8; FRAME_HEADER_LEN];
        read_exact(transport, &mut header, ReadStage::Header, timeout_ms)?;
        let tag = parse_tag(&header)?;
        let id = header[3];

        let mut len_bytes = [0u8; FRAME_LENGTH_LEN];
        read_exact(transport, &mut len_bytes, ReadStage::Length, timeout_ms)?;
        let len = be_len(&len_bytes);
        trace!("<- {:?} id={:#04x} len={}", tag, id, len);

        // Grow the buffer as bytes arrive rather than trusting `len` up front.
        let mut payload = Vec::with_capacity(len.min(PAYLOAD_READ_CHUNK));
        while payload.len() < len {
            let chunk = (len - payload.len()).min(PAYLOAD_READ_CHUNK);
            let start = payload.len();
            payload.resize(start + chunk, 0);
            let got = transport.receive(&mut payload[start..], timeout_ms)?;
            if got < chunk {
                return Err(Error::TransportRead {
                    stage: ReadStage::Payload,
                    expected: len,
                    actual: start + got,
                });
            }
        }
        trace!("<- payload {}", HexDump(&payload));

        Ok(Self::new(tag, id, payload))
    }
}

fn parse_tag(header: &[u8]) -> Result<FrameTag> {
    FrameTag::from_bytes(&header[..3]).ok_or(Error::UnknownFrameTag {
        tag: [header[0], header[1], header[2]],
    })
}

fn be_len(bytes: &[u8]) -> usize {
    u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) as usize
}

fn take(buf: &[u8], start: usize, len: usize, stage: ReadStage) -> Result<&[u8]> {
    let available = buf.len().saturating_sub(start);
    if available < len {
        return Err(Error::TransportRead {
            stage,
            expected: len,
            actual: available,
        });
    }
    Ok(&buf[start..start + len])
}

fn read_exact<T: Transport + ?Sized>(
    transport: &mut T,
    buf: &mut [u8],
    stage: ReadStage,
    timeout_ms: u64,
) -> Result<()> {
    let got = transport.receive(buf, timeout_ms)?;
    if got < buf.len() {
        return Err(Error::TransportRead {
            stage,
            expected: buf.len(),
            actual: got,
        });
    }
    Ok(())
}
