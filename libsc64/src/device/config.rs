// libsc64/src/device/config.rs
//! Device controller configuration

use crate::constants::{HANDSHAKE_POLL_INTERVAL_US, HANDSHAKE_TIMEOUT_MS};
use crate::types::SupportedVersion;
use crate::utils::DEFAULT_READ_TIMEOUT_MS;

/// Settings fixed for the lifetime of a `Device`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct DeviceConfig {
    /// Firmware baseline `check_firmware_version` accepts
    pub supported_version: SupportedVersion,
    /// Timeout handed to every transport read (ms)
    pub read_timeout_ms: u64,
    /// Bound on each control-line phase of the reset handshake (ms)
    pub handshake_timeout_ms: u64,
    /// Pause between control-line polls (us); 0 spins
    pub poll_interval_us: u64,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            supported_version: SupportedVersion::default(),
            read_timeout_ms: DEFAULT_READ_TIMEOUT_MS,
            handshake_timeout_ms: HANDSHAKE_TIMEOUT_MS,
            poll_interval_us: HANDSHAKE_POLL_INTERVAL_US,
        }
    }
}
