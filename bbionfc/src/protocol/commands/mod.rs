// bbionfc/src/protocol/commands/mod.rs

//! Host-to-device command table and per-mode encoders.

pub mod emulator;
pub mod reader;

pub use emulator::{encode_config, encode_set_ats_historical_bytes, encode_set_sak, encode_set_uid};
pub use reader::{encode_send_bits, encode_send_bytes, encode_transaction};

use crate::constants::*;
use crate::error::ChannelError;

/// What the device sends back after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    /// Fire-and-forget
    None,
    /// u8 length then payload
    ShortFrame,
    /// Single acknowledgment byte (`0x01`)
    Ack,
}

/// High-level host-to-device command. New commands should be added here and
/// their encoder placed in `protocol::commands::<mode>.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// BBIO reset: probes the bridge, or leaves the active sub-mode
    Reset,
    /// Reader: RF field off
    FieldOff,
    /// Reader: RF field on
    FieldOn,
    /// Reader: protocol selector opcode (see `types::Protocol`)
    SelectProtocol(u8),
    /// Reader: ISO 14443-A REQA
    RequestA,
    /// Short-frame bit exchange: opcode plus exactly two bytes
    SendBits([u8; 2]),
    /// Reader transaction
    Transact {
        /// Leading opcode, usually `NFC_CMD_SEND_BYTES`
        opcode: u8,
        /// CRC handling byte (see `types::CrcMode`)
        crc_mode: u8,
        /// Bytes sent after the u8 length
        payload: Vec<u8>,
    },
    /// Emulator: set UID
    SetUid(Vec<u8>),
    /// Emulator: set SAK
    SetSak(u8),
    /// Emulator: set ATS historical bytes
    SetAtsHistoricalBytes(Vec<u8>),
    /// Emulator: start emulation
    StartEmulation {
        /// `CE_START_EMULATION` or `CE_START_EMULATION_RAW`
        opcode: u8,
    },
    /// Reply to an emulator command event
    Respond(Vec<u8>),
}

impl Command {
    /// Return the leading opcode byte, if the command has one.
    pub fn command_code(&self) -> Option<u8> {
        match self {
            Self::Reset => Some(BBIO_RESET),
            Self::FieldOff => Some(NFC_RF_OFF),
            Self::FieldOn => Some(NFC_RF_ON),
            Self::SelectProtocol(p) => Some(*p),
            Self::RequestA => Some(NFC_ISO_14443A_REQA),
            Self::SendBits(_) => Some(NFC_CMD_SEND_BITS),
            Self::Transact { opcode, .. } => Some(*opcode),
            Self::SetUid(_) => Some(CE_SET_UID),
            Self::SetSak(_) => Some(CE_SET_SAK),
            Self::SetAtsHistoricalBytes(_) => Some(CE_SET_ATS_HIST_BYTES),
            Self::StartEmulation { opcode } => Some(*opcode),
            Self::Respond(_) => None,
        }
    }

    /// Reply the firmware produces for this command.
    pub fn reply(&self) -> Reply {
        match self {
            Self::RequestA | Self::SendBits(_) | Self::Transact { .. } => Reply::ShortFrame,
            Self::SetUid(_) | Self::SetSak(_) | Self::SetAtsHistoricalBytes(_) => Reply::Ack,
            _ => Reply::None,
        }
    }

    /// Encode the command into wire bytes. Oversized payloads are rejected
    /// before anything is produced.
    pub fn encode(&self) -> Result<Vec<u8>, ChannelError> {
        match self {
            Self::Transact {
                opcode,
                crc_mode,
                payload,
            } => encode_transaction(*opcode, *crc_mode, payload),
            Self::SendBits(bits) => Ok(encode_send_bits(*bits)),
            Self::SetUid(uid) => encode_set_uid(uid),
            Self::SetSak(sak) => Ok(encode_set_sak(*sak)),
            Self::SetAtsHistoricalBytes(bytes) => encode_set_ats_historical_bytes(bytes),
            Self::Respond(payload) => crate::protocol::Frame::encode(payload),
            other => Ok(other.command_code().into_iter().collect()),
        }
    }
}
