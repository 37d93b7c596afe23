// libsc64/src/protocol/command.rs

use crate::protocol::frame::encode_command_frame;
use crate::types::{ConfigId, SdCardOp};

/// Command opcode. The discriminant is the byte sent after the `CMD` tag and
/// echoed back as the response id.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandId {
    IdentifierGet = b'v',
    SdCardOp = b'i',
    StateReset = b'R',
    VersionGet = b'V',
    ConfigGet = b'c',
    ConfigSet = b'C',
    SettingGet = b'a',
    SettingSet = b'A',
}

impl CommandId {
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// High-level Command enum. Each variant knows its opcode and how its
/// arguments map onto the two argument words of the wire frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    IdentifierGet,
    VersionGet,
    StateReset,
    ConfigGet { id: ConfigId },
    ConfigSet { id: ConfigId, value: u32 },
    SettingGet { index: u32 },
    SettingSet { index: u32, value: u32 },
    SdCardOperation { op: SdCardOp },
    /// Escape hatch for opcodes the typed variants do not cover.
    Raw {
        id: CommandId,
        args: [u32; 2],
        data: Vec<u8>,
    },
}

impl Command {
    pub fn id(&self) -> CommandId {
        match self {
            Self::IdentifierGet => CommandId::IdentifierGet,
            Self::VersionGet => CommandId::VersionGet,
            Self::StateReset => CommandId::StateReset,
            Self::ConfigGet { .. } => CommandId::ConfigGet,
            Self::ConfigSet { .. } => CommandId::ConfigSet,
            Self::SettingGet { .. } => CommandId::SettingGet,
            Self::SettingSet { .. } => CommandId::SettingSet,
            Self::SdCardOperation { .. } => CommandId::SdCardOp,
            Self::Raw { id, .. } => *id,
        }
    }

    /// Opcode byte; a correlated response carries the same id.
    pub fn command_code(&self) -> u8 {
        self.id().as_u8()
    }

    pub fn args(&self) -> [u32; 2] {
        match self {
            Self::IdentifierGet | Self::VersionGet | Self::StateReset => [0, 0],
            Self::ConfigGet { id } => [id.as_u32(), 0],
            Self::ConfigSet { id, value } => [id.as_u32(), *value],
            Self::SettingGet { index } => [*index, 0],
            Self::SettingSet { index, value } => [*index, *value],
            Self::SdCardOperation { op } => [op.as_u32(), 0],
            Self::Raw { args, .. } => *args,
        }
    }

    pub fn data(&self) -> &[u8] {
        match self {
            Self::Raw { data, .. } => data,
            _ => &[],
        }
    }

    /// Encode into the outgoing `CMD` frame.
    pub fn encode(&self) -> Vec<u8> {
        encode_command_frame(self.command_code(), &self.args(), self.data())
    }
}
