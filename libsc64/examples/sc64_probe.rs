//! Simple probe for a connected SC64.
//!
//! Usage:
//!   cargo run -p libsc64 --example sc64_probe --features serial -- /dev/ttyUSB0

use anyhow::{Context, bail};
use libsc64::device::DeviceBuilder;
use libsc64::transport::SerialTransport;
use libsc64::types::ConfigId;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .context("usage: sc64_probe <serial port>")?;

    let transport = SerialTransport::open(&path).with_context(|| format!("opening {}", path))?;
    let mut dev = DeviceBuilder::new()
        .with_transport(Box::new(transport))
        .build()?
        .reset()
        .context("reset handshake")?;

    dev.state_reset()?;

    if !dev.check_device()? {
        bail!("check device failed: not an SC64");
    }
    let version = dev.version_get()?;
    println!("Detected firmware: {}", version);
    if !dev.check_firmware_version()? {
        bail!(
            "firmware {} not supported (need {})",
            version,
            dev.config().supported_version
        );
    }

    println!("ButtonMode: {}", dev.config_get(ConfigId::ButtonMode)?);

    let sd = dev.get_sd_card_status()?;
    println!("SD card: {} {:?}", sd.result, sd.status);

    let _ = dev.into_transport();
    Ok(())
}
