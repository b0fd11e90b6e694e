// bbionfc/src/protocol/commands/reader.rs

//! Reader-mode encoders.

use crate::constants::{NFC_CMD_SEND_BITS, NFC_CMD_SEND_BYTES};
use crate::error::ChannelError;
use crate::protocol::frame::ShortFrame;

/// Encode a reader transaction: opcode, crc mode, then a u8-length frame.
pub fn encode_transaction(opcode: u8, crc_mode: u8, payload: &[u8]) -> Result<Vec<u8>, ChannelError> {
    let frame = ShortFrame::encode(payload)?;
    let mut v = Vec::with_capacity(2 + frame.len());
    v.push(opcode);
    v.push(crc_mode);
    v.extend_from_slice(&frame);
    Ok(v)
}

/// Encode the standard send-bytes transaction.
pub fn encode_send_bytes(crc_mode: u8, payload: &[u8]) -> Result<Vec<u8>, ChannelError> {
    encode_transaction(NFC_CMD_SEND_BYTES, crc_mode, payload)
}

/// Encode a send-bits request: opcode then two raw bytes, no length prefix.
pub fn encode_send_bits(bits: [u8; 2]) -> Vec<u8> {
    vec![NFC_CMD_SEND_BITS, bits[0], bits[1]]
}
