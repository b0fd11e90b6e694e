// bbionfc/src/protocol/frame.rs

//! Length-prefixed frames.

use crate::constants::{FRAME_MAX_PAYLOAD_LEN, SHORT_FRAME_MAX_PAYLOAD_LEN};
use crate::error::ChannelError;
use crate::protocol::{io, parser};
use crate::transport::Transport;

/// Emulator command frame: [Len(2, little-endian)] [Payload(n)]
/// No escaping or checksum at this layer.
pub struct Frame;

impl Frame {
    /// Encode a payload into a length-prefixed frame
    pub fn encode(payload: &[u8]) -> Result<Vec<u8>, ChannelError> {
        parser::ensure_fits(payload, FRAME_MAX_PAYLOAD_LEN)?;

        let mut out = Vec::with_capacity(2 + payload.len());
        out.extend_from_slice(&(payload.len() as u16).to_le_bytes());
        out.extend_from_slice(payload);
        Ok(out)
    }

    /// Decode a complete frame and return the payload
    pub fn decode(frame: &[u8]) -> Result<Vec<u8>, ChannelError> {
        let len = parser::le_u16_at(frame, 0)? as usize;
        let payload = parser::slice_at(frame, 2, len)?;
        if frame.len() != 2 + len {
            return Err(ChannelError::LengthMismatch {
                declared: len,
                actual: frame.len() - 2,
            });
        }
        Ok(payload.to_vec())
    }

    /// Read one frame from the stream and return the payload
    pub fn read_from(transport: &mut dyn Transport) -> Result<Vec<u8>, ChannelError> {
        let len = io::read_u16_le(transport)? as usize;
        io::read_exact(transport, len)
    }
}

/// Reader frame: [Len(1)] [Payload(n)]
pub struct ShortFrame;

impl ShortFrame {
    /// Encode a payload behind a u8 length.
    pub fn encode(payload: &[u8]) -> Result<Vec<u8>, ChannelError> {
        parser::ensure_fits(payload, SHORT_FRAME_MAX_PAYLOAD_LEN)?;

        let mut out = Vec::with_capacity(1 + payload.len());
        out.push(payload.len() as u8);
        out.extend_from_slice(payload);
        Ok(out)
    }

    /// Decode a complete frame and return the payload.
    pub fn decode(frame: &[u8]) -> Result<Vec<u8>, ChannelError> {
        let len = parser::byte_at(frame, 0)? as usize;
        let payload = parser::slice_at(frame, 1, len)?;
        if frame.len() != 1 + len {
            return Err(ChannelError::LengthMismatch {
                declared: len,
                actual: frame.len() - 1,
            });
        }
        Ok(payload.to_vec())
    }

    /// Read one frame from the stream and return the payload.
    pub fn read_from(transport: &mut dyn Transport) -> Result<Vec<u8>, ChannelError> {
        let len = io::read_u8(transport)? as usize;
        io::read_exact(transport, len)
    }
}
