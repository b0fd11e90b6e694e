// bbionfc/src/protocol/parser.rs

//! Bounds-checked slice readers.

use crate::error::ChannelError;

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<(), ChannelError> {
    if data.len() < min {
        return Err(ChannelError::ShortRead {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Read a little-endian u16 at given index, with bounds checking.
pub fn le_u16_at(data: &[u8], idx: usize) -> Result<u16, ChannelError> {
    ensure_len(data, idx + 2)?;
    Ok(u16::from_le_bytes([data[idx], data[idx + 1]]))
}

/// Return a subslice with bounds checking.
pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8], ChannelError> {
    ensure_len(data, idx + len)?;
    Ok(&data[idx..idx + len])
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8, ChannelError> {
    ensure_len(data, idx + 1)?;
    Ok(data[idx])
}

/// Ensure a payload fits a length prefix that can count up to `max`.
pub fn ensure_fits(payload: &[u8], max: usize) -> Result<(), ChannelError> {
    if payload.len() > max {
        return Err(ChannelError::PayloadTooLarge {
            max,
            actual: payload.len(),
        });
    }
    Ok(())
}

/// Ensure an emulator configuration reply is the single ack byte.
pub fn expect_ack(data: &[u8]) -> Result<(), ChannelError> {
    let got = byte_at(data, 0)?;
    if got != crate::constants::CE_ACK {
        return Err(ChannelError::NotAcknowledged { got });
    }
    Ok(())
}

/// Whether `marker` occurs anywhere inside `data`.
pub fn contains_marker(data: &[u8], marker: &[u8]) -> bool {
    !marker.is_empty() && data.windows(marker.len()).any(|w| w == marker)
}
