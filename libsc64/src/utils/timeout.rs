//! Timeout helpers used across the crate.
//!
//! `Deadline` captures a wall-clock bound at creation, so a polling loop is
//! bounded by elapsed time no matter how fast it spins.

use std::io::{self, ErrorKind, Read};
use std::time::{Duration, Instant};

/// Default read timeout in milliseconds used by transports when a caller
/// doesn't provide an explicit timeout.
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 1000;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Wall-clock bound measured from the moment it was created.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    start: Instant,
    limit: Duration,
}

impl Deadline {
    pub fn after(limit: Duration) -> Self {
        Self {
            start: Instant::now(),
            limit,
        }
    }

    pub fn expired(&self) -> bool {
        self.start.elapsed() > self.limit
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Time left before the bound passes, zero once expired.
    pub fn remaining(&self) -> Duration {
        self.limit.saturating_sub(self.start.elapsed())
    }
}

/// Fill `buf` from `reader` until it is full, the reader times out or hits
/// end of input, or `deadline` passes.
///
/// `arm` runs before every read with the time left, so a reader whose own
/// timeout restarts per call still returns within the deadline.
pub fn read_before<R, F>(
    reader: &mut R,
    buf: &mut [u8],
    deadline: &Deadline,
    mut arm: F,
) -> io::Result<usize>
where
    R: Read + ?Sized,
    F: FnMut(&mut R, Duration) -> io::Result<()>,
{
    let mut filled = 0;
    while filled < buf.len() {
        let left = deadline.remaining();
        if left.is_zero() {
            break;
        }
        arm(reader, left)?;
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::TimedOut => break,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
