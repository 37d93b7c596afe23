//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTransport setup so tests across the
//! crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::device::{Device, Ready};
use crate::protocol::{Frame, FrameTag};
use crate::transport::{MockTransport, Transport};
use crate::Result;

/// Incoming wire bytes for a frame.
#[doc(hidden)]
pub fn frame_bytes(tag: FrameTag, id: u8, payload: &[u8]) -> Vec<u8> {
    Frame::new(tag, id, payload.to_vec()).encode()
}

/// Shorthand for a `CMP` frame.
#[doc(hidden)]
pub fn completion(id: u8, payload: &[u8]) -> Vec<u8> {
    frame_bytes(FrameTag::Completion, id, payload)
}

/// MockTransport handle that stays inspectable after a Device took
/// ownership of its boxed clone.
#[doc(hidden)]
#[derive(Clone, Default)]
pub struct SharedMock {
    inner: Arc<Mutex<MockTransport>>,
}

impl SharedMock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn boxed(&self) -> Box<dyn Transport> {
        Box::new(self.clone())
    }

    /// Lock the mock for inspection. A test that panicked while holding the
    /// lock does not poison it for later assertions.
    pub fn borrow(&self) -> MutexGuard<'_, MockTransport> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn borrow_mut(&self) -> MutexGuard<'_, MockTransport> {
        self.borrow()
    }
}

impl Transport for SharedMock {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        self.borrow_mut().send(data)
    }

    fn receive(&mut self, buf: &mut [u8], timeout_ms: u64) -> Result<usize> {
        self.borrow_mut().receive(buf, timeout_ms)
    }

    fn flush(&mut self) -> Result<()> {
        self.borrow_mut().flush()
    }

    fn clear_input(&mut self) -> Result<()> {
        self.borrow_mut().clear_input()
    }

    fn set_control_line(&mut self, asserted: bool) -> Result<()> {
        self.borrow_mut().set_control_line(asserted)
    }

    fn control_line(&mut self) -> Result<bool> {
        self.borrow_mut().control_line()
    }
}

/// Build a MockTransport pre-seeded with device replies and return it boxed
/// as a Transport trait object.
#[doc(hidden)]
pub fn boxed_mock_with_replies(replies: Vec<Vec<u8>>) -> Box<dyn Transport> {
    let mut mock = MockTransport::new();
    for reply in replies {
        mock.push_reply(reply);
    }
    Box::new(mock)
}

/// Convenience: create a Device<Ready> backed by a MockTransport whose
/// replies are released one per command sent.
#[doc(hidden)]
pub fn ready_mock_device(replies: Vec<Vec<u8>>) -> Result<Device<Ready>> {
    Device::new_with_transport(boxed_mock_with_replies(replies)).reset()
}
