// bbionfc/src/protocol/commands/emulator.rs

//! Card-emulator configuration encoders.

use crate::constants::{CE_SET_ATS_HIST_BYTES, CE_SET_SAK, CE_SET_UID};
use crate::error::ChannelError;
use crate::protocol::frame::ShortFrame;

/// Encode an emulator configuration command: opcode then a u8-length frame.
pub fn encode_config(opcode: u8, payload: &[u8]) -> Result<Vec<u8>, ChannelError> {
    let frame = ShortFrame::encode(payload)?;
    let mut v = Vec::with_capacity(1 + frame.len());
    v.push(opcode);
    v.extend_from_slice(&frame);
    Ok(v)
}

/// `0x04`, u8 length, UID bytes.
pub fn encode_set_uid(uid: &[u8]) -> Result<Vec<u8>, ChannelError> {
    encode_config(CE_SET_UID, uid)
}

/// `0x05`, length 1, SAK.
pub fn encode_set_sak(sak: u8) -> Vec<u8> {
    vec![CE_SET_SAK, 0x01, sak]
}

/// `0x0B`, u8 length, historical bytes.
pub fn encode_set_ats_historical_bytes(bytes: &[u8]) -> Result<Vec<u8>, ChannelError> {
    encode_config(CE_SET_ATS_HIST_BYTES, bytes)
}
