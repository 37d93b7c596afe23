// libsc64/src/device/handle.rs

use std::marker::PhantomData;

use log::{debug, warn};

use crate::device::config::DeviceConfig;
use crate::device::dispatcher::Dispatcher;
use crate::device::handshake;
use crate::protocol::parser::{be_u16_at, be_u32_at, be_u32_exact, ensure_len};
use crate::protocol::{AsyncPacket, Command};
use crate::transport::Transport;
use crate::types::{ConfigId, FirmwareVersion, Identifier, SdCardOp, SdCardOpReply};
use crate::Result;

/// Type-state markers
pub struct Unsynchronized;
pub struct Ready;

/// SC64 controller. Commands are only available once the reset handshake
/// has brought the device into a known state (`Device<Ready>`).
pub struct Device<State = Unsynchronized> {
    dispatcher: Dispatcher,
    config: DeviceConfig,
    _state: PhantomData<State>,
}

impl<State> Device<State> {
    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }

    /// Packets the device sent while a response was awaited. They are
    /// dropped, not queued.
    pub fn discarded_packets(&self) -> usize {
        self.dispatcher.discarded_packets()
    }
}

impl Device<Unsynchronized> {
    /// Create a Device from an existing Transport instance with the default
    /// configuration.
    pub fn new_with_transport(transport: Box<dyn Transport>) -> Self {
        Self::with_config(transport, DeviceConfig::default())
    }

    pub fn with_config(transport: Box<dyn Transport>, config: DeviceConfig) -> Self {
        Self {
            dispatcher: Dispatcher::new(transport, config.read_timeout_ms),
            config,
            _state: PhantomData,
        }
    }

    /// Run the control-line reset handshake. Returns a ready Device on success.
    pub fn reset(self) -> Result<Device<Ready>> {
        let mut this = self;
        handshake::hardware_reset(this.dispatcher.transport_mut(), &this.config)?;
        Ok(Device {
            dispatcher: this.dispatcher,
            config: this.config,
            _state: PhantomData,
        })
    }
}

impl Device<Ready> {
    /// Re-run the reset handshake on a device already in use.
    pub fn reset(&mut self) -> Result<()> {
        handshake::hardware_reset(self.dispatcher.transport_mut(), &self.config)
    }

    /// Execute a command and return its raw payload. A set error flag fails.
    pub fn execute(&mut self, cmd: &Command) -> Result<Vec<u8>> {
        self.dispatcher.execute(cmd, false)
    }

    /// Execute a command and return its payload even when the device flagged
    /// an error. The caller must interpret the payload.
    pub fn execute_ignoring_error(&mut self, cmd: &Command) -> Result<Vec<u8>> {
        self.dispatcher.execute(cmd, true)
    }

    /// Raw 4-byte device identifier.
    pub fn identifier_get(&mut self) -> Result<Identifier> {
        let data = self.execute(&Command::IdentifierGet)?;
        Identifier::try_from(&data[..])
    }

    /// True when the device identifies itself as an SC64.
    pub fn check_device(&mut self) -> Result<bool> {
        let id = self.identifier_get()?;
        debug!("device identifier: {}", id);
        if !id.is_sc64() {
            warn!("unexpected device identifier {}", id);
        }
        Ok(id.is_sc64())
    }

    /// Firmware version: major(2, BE) | minor(2, BE) | revision(4, BE).
    /// Bytes past the first 8 are ignored.
    pub fn version_get(&mut self) -> Result<FirmwareVersion> {
        let data = self.execute(&Command::VersionGet)?;
        ensure_len(&data, 8)?;
        Ok(FirmwareVersion {
            major: be_u16_at(&data, 0)?,
            minor: be_u16_at(&data, 2)?,
            revision: be_u32_at(&data, 4)?,
        })
    }

    /// True when the firmware satisfies the configured `SupportedVersion`.
    pub fn check_firmware_version(&mut self) -> Result<bool> {
        let version = self.version_get()?;
        debug!("detected firmware {}", version);
        let supported = self.config.supported_version.accepts(&version);
        if !supported {
            warn!(
                "firmware {} not supported (need {})",
                version, self.config.supported_version
            );
        }
        Ok(supported)
    }

    pub fn config_get(&mut self, id: ConfigId) -> Result<u32> {
        let data = self.execute(&Command::ConfigGet { id })?;
        be_u32_exact(&data)
    }

    pub fn config_set(&mut self, id: ConfigId, value: u32) -> Result<()> {
        self.execute(&Command::ConfigSet { id, value })?;
        Ok(())
    }

    pub fn setting_get(&mut self, index: u32) -> Result<u32> {
        let data = self.execute(&Command::SettingGet { index })?;
        be_u32_exact(&data)
    }

    pub fn setting_set(&mut self, index: u32, value: u32) -> Result<()> {
        self.execute(&Command::SettingSet { index, value })?;
        Ok(())
    }

    /// Clear session-level device state. Unrelated to the control-line reset.
    pub fn state_reset(&mut self) -> Result<()> {
        self.execute(&Command::StateReset)?;
        Ok(())
    }

    /// Run an SD card sub-command.
    ///
    /// The frame error flag is ignored; failures are reported through the
    /// result code in the reply.
    pub fn sd_card_operation(&mut self, op: SdCardOp) -> Result<SdCardOpReply> {
        let response = self
            .dispatcher
            .execute_response(&Command::SdCardOperation { op })?;
        if response.error {
            warn!("sd card {} returned an error frame, decoding result code", op);
        }
        let reply = SdCardOpReply::decode(&response.data)?;
        if !reply.result.is_ok() {
            warn!("sd card {} failed: {}", op, reply.result);
        }
        Ok(reply)
    }

    pub fn init_sd_card(&mut self) -> Result<SdCardOpReply> {
        self.sd_card_operation(SdCardOp::Init)
    }

    pub fn deinit_sd_card(&mut self) -> Result<SdCardOpReply> {
        self.sd_card_operation(SdCardOp::Deinit)
    }

    pub fn get_sd_card_status(&mut self) -> Result<SdCardOpReply> {
        self.sd_card_operation(SdCardOp::GetStatus)
    }

    pub fn set_sd_card_byte_swap(&mut self, enabled: bool) -> Result<SdCardOpReply> {
        self.sd_card_operation(if enabled {
            SdCardOp::ByteSwapOn
        } else {
            SdCardOp::ByteSwapOff
        })
    }

    /// Block until the device sends an asynchronous packet.
    pub fn receive_packet(&mut self) -> Result<AsyncPacket> {
        self.dispatcher.receive_packet()
    }

    /// Release the transport.
    pub fn into_transport(self) -> Box<dyn Transport> {
        self.dispatcher.into_transport()
    }
}
