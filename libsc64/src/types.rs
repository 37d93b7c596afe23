// libsc64/src/types.rs

use crate::constants::{SC64_IDENTIFIER, SUPPORTED_MAJOR_VERSION, SUPPORTED_MINOR_VERSION};
use crate::error::PayloadLen;
use crate::Error;
use std::convert::TryFrom;

/// Identifier returned by `IDENTIFIER_GET` - Newtype Pattern (4 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Identifier([u8; 4]);

impl Identifier {
    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    /// True when the device answered with the SC64 identity string `SCv2`.
    pub fn is_sc64(&self) -> bool {
        self.0 == SC64_IDENTIFIER
    }
}

impl TryFrom<&[u8]> for Identifier {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; 4] = bytes.try_into().map_err(|_| Error::MalformedPayload {
            expected: PayloadLen::Exactly(4),
            actual: bytes.len(),
        })?;
        Ok(Self(arr))
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for &b in &self.0 {
            if b.is_ascii_graphic() {
                write!(f, "{}", b as char)?;
            } else {
                write!(f, "\\x{:02x}", b)?;
            }
        }
        Ok(())
    }
}

/// Firmware version reported by `VERSION_GET`
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[display(fmt = "{}.{}.{}", major, minor, revision)]
pub struct FirmwareVersion {
    pub major: u16,
    pub minor: u16,
    pub revision: u32,
}

/// Firmware baseline accepted by a `Device`.
///
/// A firmware is accepted when its major equals `major` and its minor is at
/// least `minor`. A newer major is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[display(fmt = "{}.{}+", major, minor)]
pub struct SupportedVersion {
    pub major: u16,
    pub minor: u16,
}

impl SupportedVersion {
    pub const fn new(major: u16, minor: u16) -> Self {
        Self { major, minor }
    }

    pub fn accepts(&self, version: &FirmwareVersion) -> bool {
        version.major == self.major && version.minor >= self.minor
    }
}

impl Default for SupportedVersion {
    fn default() -> Self {
        Self::new(SUPPORTED_MAJOR_VERSION, SUPPORTED_MINOR_VERSION)
    }
}

/// Device configuration slot. The discriminant is the wire value.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConfigId {
    BootloaderSwitch = 0,
    RomWriteEnable = 1,
    RomShadowEnable = 2,
    DdMode = 3,
    IsViewer = 4,
    BootMode = 5,
    SaveType = 6,
    CicSeed = 7,
    TvType = 8,
    DdSdEnable = 9,
    DdDriveType = 10,
    DdDiskState = 11,
    ButtonState = 12,
    ButtonMode = 13,
    RomExtendedEnable = 14,
}

impl ConfigId {
    /// All slots in wire order.
    pub const ALL: [ConfigId; 15] = [
        Self::BootloaderSwitch,
        Self::RomWriteEnable,
        Self::RomShadowEnable,
        Self::DdMode,
        Self::IsViewer,
        Self::BootMode,
        Self::SaveType,
        Self::CicSeed,
        Self::TvType,
        Self::DdSdEnable,
        Self::DdDriveType,
        Self::DdDiskState,
        Self::ButtonState,
        Self::ButtonMode,
        Self::RomExtendedEnable,
    ];

    pub fn as_u32(self) -> u32 {
        self as u32
    }
}

impl TryFrom<u32> for ConfigId {
    type Error = u32;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::ALL.get(value as usize).copied().ok_or(value)
    }
}

/// SD card sub-command. The discriminant is the wire value.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SdCardOp {
    Deinit = 0,
    Init = 1,
    GetStatus = 2,
    GetInfo = 3,
    ByteSwapOn = 4,
    ByteSwapOff = 5,
}

impl SdCardOp {
    pub fn as_u32(self) -> u32 {
        self as u32
    }
}

/// Result code of an SD card operation, decoded from its ordinal.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SdCardResult {
    Ok = 0,
    NoCardInSlot,
    NotInitialized,
    InvalidArgument,
    InvalidAddress,
    InvalidOperation,
    Cmd2Io,
    Cmd3Io,
    Cmd6CheckIo,
    Cmd6CheckCrc,
    Cmd6CheckTimeout,
    Cmd6CheckResponse,
    Cmd6SwitchIo,
    Cmd6SwitchCrc,
    Cmd6SwitchTimeout,
    Cmd6SwitchResponse,
    Cmd7Io,
    Cmd8Io,
    Cmd9Io,
    Cmd10Io,
    Cmd18Io,
    Cmd18Crc,
    Cmd18Timeout,
    Cmd25Io,
    Cmd25Crc,
    Cmd25Timeout,
    Acmd6Io,
    Acmd41Io,
    Acmd41Ocr,
    Acmd41Timeout,
    Locked,
}

impl SdCardResult {
    /// Every code in ordinal order.
    pub const ALL: [SdCardResult; 31] = [
        Self::Ok,
        Self::NoCardInSlot,
        Self::NotInitialized,
        Self::InvalidArgument,
        Self::InvalidAddress,
        Self::InvalidOperation,
        Self::Cmd2Io,
        Self::Cmd3Io,
        Self::Cmd6CheckIo,
        Self::Cmd6CheckCrc,
        Self::Cmd6CheckTimeout,
        Self::Cmd6CheckResponse,
        Self::Cmd6SwitchIo,
        Self::Cmd6SwitchCrc,
        Self::Cmd6SwitchTimeout,
        Self::Cmd6SwitchResponse,
        Self::Cmd7Io,
        Self::Cmd8Io,
        Self::Cmd9Io,
        Self::Cmd10Io,
        Self::Cmd18Io,
        Self::Cmd18Crc,
        Self::Cmd18Timeout,
        Self::Cmd25Io,
        Self::Cmd25Crc,
        Self::Cmd25Timeout,
        Self::Acmd6Io,
        Self::Acmd41Io,
        Self::Acmd41Ocr,
        Self::Acmd41Timeout,
        Self::Locked,
    ];

    pub fn is_ok(&self) -> bool {
        *self == Self::Ok
    }
}

impl TryFrom<u32> for SdCardResult {
    type Error = Error;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .get(code as usize)
            .copied()
            .ok_or(Error::UnknownResultCode(code))
    }
}

/// SD subsystem flags (bits 0..=4 of the status word)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SdCardStatus {
    pub card_inserted: bool,
    pub card_initialized: bool,
    pub card_type_block: bool,
    pub clock_mode_50mhz: bool,
    pub byte_swap: bool,
}

impl SdCardStatus {
    const CARD_INSERTED: u32 = 1 << 0;
    const CARD_INITIALIZED: u32 = 1 << 1;
    const CARD_TYPE_BLOCK: u32 = 1 << 2;
    const CLOCK_MODE_50MHZ: u32 = 1 << 3;
    const BYTE_SWAP: u32 = 1 << 4;

    /// Decode the status word. Bits above 4 are ignored.
    pub fn from_bits(bits: u32) -> Self {
        Self {
            card_inserted: bits & Self::CARD_INSERTED != 0,
            card_initialized: bits & Self::CARD_INITIALIZED != 0,
            card_type_block: bits & Self::CARD_TYPE_BLOCK != 0,
            clock_mode_50mhz: bits & Self::CLOCK_MODE_50MHZ != 0,
            byte_swap: bits & Self::BYTE_SWAP != 0,
        }
    }

    pub fn to_bits(&self) -> u32 {
        let mut bits = 0;
        if self.card_inserted {
            bits |= Self::CARD_INSERTED;
        }
        if self.card_initialized {
            bits |= Self::CARD_INITIALIZED;
        }
        if self.card_type_block {
            bits |= Self::CARD_TYPE_BLOCK;
        }
        if self.clock_mode_50mhz {
            bits |= Self::CLOCK_MODE_50MHZ;
        }
        if self.byte_swap {
            bits |= Self::BYTE_SWAP;
        }
        bits
    }
}

/// Decoded reply of an SD card operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SdCardOpReply {
    pub result: SdCardResult,
    pub status: SdCardStatus,
}

impl SdCardOpReply {
    /// Wire size of the reply payload
    pub const LEN: usize = 8;

    /// Decode `result(4, BE) | status(4, BE)`. The payload must be exactly 8 bytes.
    pub fn decode(data: &[u8]) -> crate::Result<Self> {
        crate::protocol::parser::ensure_exact_len(data, Self::LEN)?;
        let result = SdCardResult::try_from(crate::protocol::parser::be_u32_at(data, 0)?)?;
        let status = SdCardStatus::from_bits(crate::protocol::parser::be_u32_at(data, 4)?);
        Ok(Self { result, status })
    }
}
