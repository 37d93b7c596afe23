//! Hexadecimal rendering for log output.
//!
//! `HexDump` formats lazily, so wrapping a buffer in a disabled `trace!`
//! call costs nothing.

use std::fmt;

/// Display adapter rendering bytes as space separated lowercase hex.
///
/// Example: `HexDump(&[0xde, 0xad])` -> `"de ad"`
#[derive(Debug, Clone, Copy)]
pub struct HexDump<'a>(pub &'a [u8]);

impl fmt::Display for HexDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, b) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(" ")?;
            }
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}
