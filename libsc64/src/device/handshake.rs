// libsc64/src/device/handshake.rs

//! Control-line reset handshake.
//!
//! Runs outside the command/response path: it toggles the reset line and
//! polls its readback, bounded per phase by a wall-clock deadline.

use std::time::Duration;

use log::debug;

use crate::device::config::DeviceConfig;
use crate::error::HandshakePhase;
use crate::transport::Transport;
use crate::utils::{Deadline, ms};
use crate::{Error, Result};

/// Bring the device into a known state:
/// flush output, assert and await, drop buffered input, deassert and await.
pub fn hardware_reset(transport: &mut dyn Transport, config: &DeviceConfig) -> Result<()> {
    let poll = Duration::from_micros(config.poll_interval_us);

    transport.flush()?;

    transport.set_control_line(true)?;
    wait_for_line(
        transport,
        HandshakePhase::Assert,
        config.handshake_timeout_ms,
        poll,
    )?;
    debug!("reset line asserted");

    transport.clear_input()?;

    transport.set_control_line(false)?;
    wait_for_line(
        transport,
        HandshakePhase::Deassert,
        config.handshake_timeout_ms,
        poll,
    )?;
    debug!("reset line deasserted");

    Ok(())
}

fn wait_for_line(
    transport: &mut dyn Transport,
    phase: HandshakePhase,
    timeout_ms: u64,
    poll: Duration,
) -> Result<()> {
    let want = phase == HandshakePhase::Assert;
    let deadline = Deadline::after(ms(timeout_ms));
    loop {
        if transport.control_line()? == want {
            return Ok(());
        }
        if deadline.expired() {
            return Err(Error::HandshakeTimeout { phase, timeout_ms });
        }
        if !poll.is_zero() {
            std::thread::sleep(poll);
        }
    }
}
