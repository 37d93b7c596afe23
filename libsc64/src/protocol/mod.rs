// libsc64/src/protocol/mod.rs

pub mod classify;
pub mod command;
pub mod frame;
pub mod parser;

pub use classify::{AsyncPacket, Classified, Expectation, Response, classify};
pub use command::{Command, CommandId};
pub use frame::{Frame, FrameTag, encode_command_frame, normalize_args};
