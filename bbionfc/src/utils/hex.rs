//! Hexadecimal helpers used for logging, display and test fixtures.
//!
//! `HexDisplay` formats lazily so `trace!` calls cost nothing when the log
//! level filters them out.

use std::fmt;

/// Lazily formatted lowercase hex view over a byte slice.
///
/// Example: `format!("{}", HexDisplay(&[0xde, 0xad]))` -> `"dead"`
#[derive(Clone, Copy)]
pub struct HexDisplay<'a>(pub &'a [u8]);

impl fmt::Display for HexDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.0 {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl fmt::Debug for HexDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self)
    }
}

/// Convert a byte slice to a lowercase hex string without separators.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    HexDisplay(bytes).to_string()
}

/// Parse a hex string into bytes. ASCII whitespace between digits is ignored,
/// so fixtures can be written the way firmware traces print them.
pub fn parse_hex(s: &str) -> Result<Vec<u8>, String> {
    let digits: Vec<u8> = s.bytes().filter(|b| !b.is_ascii_whitespace()).collect();

    if digits.len() % 2 != 0 {
        return Err("hex string has odd length".to_string());
    }

    digits
        .chunks(2)
        .map(|pair| {
            let text = std::str::from_utf8(pair).map_err(|e| e.to_string())?;
            u8::from_str_radix(text, 16).map_err(|e| format!("invalid hex pair '{}': {}", text, e))
        })
        .collect()
}
