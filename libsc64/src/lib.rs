// libsc64/src/lib.rs

//! libsc64
//!
//! Pure Rust host-side protocol engine for the SC64 N64 flashcart.
//!
//! The crate frames commands for the device, decodes and classifies the
//! frames it sends back, correlates responses with the command in flight and
//! runs the control-line reset handshake that must precede any command.
#![warn(missing_docs)]

pub mod constants;
pub mod device;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the value types in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
