// libsc64/src/transport/serial.rs

#![cfg(feature = "serial")]

use std::io::{self, Write};
use std::time::Duration;

use log::debug;
use serialport::{ClearBuffer, SerialPort};

use crate::constants::BAUD_RATE;
use crate::transport::traits::Transport;
use crate::utils::timeout::{DEFAULT_READ_TIMEOUT_MS, Deadline, ms, read_before};
use crate::Result;

/// Serial-port transport for the SC64's FTDI bridge.
///
/// The reset control line is DTR. The device loops DTR back to DSR, so the
/// observed state is read from DSR.
pub struct SerialTransport {
    port: Box<dyn SerialPort>,
}

impl SerialTransport {
    /// Open `path` at the fixed SC64 baud rate with the default read timeout.
    pub fn open(path: &str) -> Result<Self> {
        let port = serialport::new(path, BAUD_RATE)
            .timeout(Duration::from_millis(DEFAULT_READ_TIMEOUT_MS))
            .open()?;
        debug!("opened {} at {} baud", path, BAUD_RATE);
        Ok(Self::from_port(port))
    }

    /// Wrap an already configured port.
    pub fn from_port(port: Box<dyn SerialPort>) -> Self {
        Self { port }
    }
}

impl Transport for SerialTransport {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        self.port.write_all(data)?;
        Ok(())
    }

    fn receive(&mut self, buf: &mut [u8], timeout_ms: u64) -> Result<usize> {
        // The port timeout restarts on every read, so each read gets only
        // what is left of the overall bound.
        let deadline = Deadline::after(ms(timeout_ms));
        let filled = read_before(&mut *self.port, buf, &deadline, |port, left| {
            port.set_timeout(left).map_err(io::Error::from)
        })?;
        Ok(filled)
    }

    fn flush(&mut self) -> Result<()> {
        self.port.flush()?;
        Ok(())
    }

    fn clear_input(&mut self) -> Result<()> {
        self.port.clear(ClearBuffer::Input)?;
        Ok(())
    }

    fn set_control_line(&mut self, asserted: bool) -> Result<()> {
        self.port.write_data_terminal_ready(asserted)?;
        Ok(())
    }

    fn control_line(&mut self) -> Result<bool> {
        Ok(self.port.read_data_set_ready()?)
    }
}
