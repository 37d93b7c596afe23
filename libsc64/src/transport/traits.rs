// libsc64/src/transport/traits.rs

use crate::Result;

/// Transport trait abstracts the serial link away from protocol/device logic.
///
/// `Send` so a `Device` can be moved behind a mutex and shared across threads.
pub trait Transport: Send {
    /// Write all of `data` to the device
    fn send(&mut self, data: &[u8]) -> Result<()>;

    /// Fill `buf` from the device, blocking for at most `timeout_ms`.
    /// Returns how many bytes were read; a count below `buf.len()` means the
    /// timeout elapsed first.
    fn receive(&mut self, buf: &mut [u8], timeout_ms: u64) -> Result<usize>;

    /// Push any buffered outbound bytes onto the wire
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    /// Drop whatever is currently buffered on the input side
    fn clear_input(&mut self) -> Result<()>;

    /// Drive the reset control line
    fn set_control_line(&mut self, asserted: bool) -> Result<()>;

    /// Observed state of the reset control line
    fn control_line(&mut self) -> Result<bool>;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        (**self).send(data)
    }

    fn receive(&mut self, buf: &mut [u8], timeout_ms: u64) -> Result<usize> {
        (**self).receive(buf, timeout_ms)
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }

    fn clear_input(&mut self) -> Result<()> {
        (**self).clear_input()
    }

    fn set_control_line(&mut self, asserted: bool) -> Result<()> {
        (**self).set_control_line(asserted)
    }

    fn control_line(&mut self) -> Result<bool> {
        (**self).control_line()
    }
}
