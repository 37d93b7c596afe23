// libsc64/src/prelude.rs

//! Commonly used items in one import.

pub use crate::device::{Device, DeviceBuilder, DeviceConfig, Ready, Unsynchronized};
pub use crate::protocol::{AsyncPacket, Classified, Command, CommandId, Frame, FrameTag, Response};
pub use crate::transport::{MockTransport, Transport};
pub use crate::{
    ConfigId, Error, FirmwareVersion, Identifier, Result, SdCardOp, SdCardOpReply, SdCardResult,
    SdCardStatus, SupportedVersion,
};

// Re-export small utilities for convenience
pub use crate::utils::{Deadline, HexDump, ms};
