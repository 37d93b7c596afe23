//! Utilities for libsc64: small, reusable helpers used across the crate.

pub mod hex;
pub mod timeout;

pub use hex::HexDump;
pub use timeout::{DEFAULT_READ_TIMEOUT_MS, Deadline, ms, read_before};
