// libsc64/src/transport/mock.rs

use std::collections::VecDeque;

use crate::transport::traits::Transport;
use crate::Result;

/// Mock transport for unit tests. It records sent frames and plays back
/// queued device replies.
///
/// Replies queued with `push_reply` are released onto the input side one at
/// a time, each time the host sends something. Bytes pushed with
/// `push_bytes` are already buffered, like stale data left on the line.
#[derive(Debug, Default)]
pub struct MockTransport {
    pub sent: Vec<Vec<u8>>,
    pub replies: VecDeque<Vec<u8>>,
    pub input: VecDeque<u8>,
    /// Level most recently written to the control line
    pub control_line: bool,
    /// Testing hook: when set, `control_line()` always reads this level
    pub control_line_stuck: Option<bool>,
    /// Every level written to the control line, in order
    pub control_writes: Vec<bool>,
    pub flushes: usize,
    pub input_clears: usize,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a reply the device sends after the next host write.
    pub fn push_reply(&mut self, reply: Vec<u8>) {
        self.replies.push_back(reply);
    }

    /// Make bytes available to read immediately.
    pub fn push_bytes(&mut self, bytes: &[u8]) {
        self.input.extend(bytes);
    }

    /// Make the control line read back `level` regardless of writes.
    pub fn set_control_line_stuck(&mut self, level: bool) {
        self.control_line_stuck = Some(level);
    }

    pub fn pop_sent(&mut self) -> Option<Vec<u8>> {
        self.sent.pop()
    }

    /// Bytes buffered and not yet read
    pub fn pending_input(&self) -> usize {
        self.input.len()
    }
}

impl Transport for MockTransport {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        self.sent.push(data.to_vec());
        if let Some(reply) = self.replies.pop_front() {
            self.input.extend(reply);
        }
        Ok(())
    }

    fn receive(&mut self, buf: &mut [u8], _timeout_ms: u64) -> Result<usize> {
        // Running dry behaves like a read timeout: short count, no error.
        let n = buf.len().min(self.input.len());
        for (dst, src) in buf.iter_mut().zip(self.input.drain(..n)) {
            *dst = src;
        }
        Ok(n)
    }

    fn flush(&mut self) -> Result<()> {
        self.flushes += 1;
        Ok(())
    }

    fn clear_input(&mut self) -> Result<()> {
        self.input_clears += 1;
        self.input.clear();
        Ok(())
    }

    fn set_control_line(&mut self, asserted: bool) -> Result<()> {
        self.control_line = asserted;
        self.control_writes.push(asserted);
        Ok(())
    }

    fn control_line(&mut self) -> Result<bool> {
        Ok(self.control_line_stuck.unwrap_or(self.control_line))
    }
}
