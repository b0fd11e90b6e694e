// bbionfc/src/protocol/channel.rs

//! Framed request/response operations on an already negotiated stream.
//!
//! These are the stateless building blocks; `session::Reader` and
//! `session::CardEmulator` wrap them and enforce which ones are valid when.

use log::debug;

use crate::error::ChannelError;
use crate::protocol::commands::{Command, Reply};
use crate::protocol::events::{EmulationEvent, EventFraming, read_event};
use crate::protocol::frame::ShortFrame;
use crate::protocol::{io, parser};
use crate::transport::Transport;

/// Send a command and collect its reply according to `Command::reply`.
///
/// Returns the reply payload for `ShortFrame` replies and an empty vector
/// otherwise.
pub fn execute(transport: &mut dyn Transport, cmd: &Command) -> Result<Vec<u8>, ChannelError> {
    // Encoding validates lengths, so nothing is written for a bad command.
    let wire = cmd.encode()?;
    io::write_all(transport, &wire)?;

    match cmd.reply() {
        Reply::None => Ok(Vec::new()),
        Reply::ShortFrame => ShortFrame::read_from(transport),
        Reply::Ack => {
            let ack = io::read_exact(transport, 1)?;
            parser::expect_ack(&ack)?;
            Ok(Vec::new())
        }
    }
}

/// Reader transaction: `opcode, crc_mode, len(u8), payload` answered by a
/// u8-length frame.
pub fn transact(
    transport: &mut dyn Transport,
    opcode: u8,
    crc_mode: u8,
    payload: &[u8],
) -> Result<Vec<u8>, ChannelError> {
    execute(
        transport,
        &Command::Transact {
            opcode,
            crc_mode,
            payload: payload.to_vec(),
        },
    )
}

/// Two-byte bit exchange. Returns the payload of the u8-length reply.
pub fn send_bits(transport: &mut dyn Transport, bits: [u8; 2]) -> Result<Vec<u8>, ChannelError> {
    debug!("send bits {}", crate::utils::HexDisplay(&bits));
    execute(transport, &Command::SendBits(bits))
}

/// BBIO reset. Leaves the active sub-mode; the firmware sends nothing back.
pub fn reset(transport: &mut dyn Transport) -> Result<(), ChannelError> {
    execute(transport, &Command::Reset).map(drop)
}

/// ISO 14443-A wake-up (REQA). Returns the ATQA bytes.
pub fn request_a(transport: &mut dyn Transport) -> Result<Vec<u8>, ChannelError> {
    execute(transport, &Command::RequestA)
}

/// Switch the RF field on. No reply.
pub fn set_field_on(transport: &mut dyn Transport) -> Result<(), ChannelError> {
    execute(transport, &Command::FieldOn).map(drop)
}

/// Switch the RF field off. No reply.
pub fn set_field_off(transport: &mut dyn Transport) -> Result<(), ChannelError> {
    execute(transport, &Command::FieldOff).map(drop)
}

/// Write a protocol selector opcode. No reply.
pub fn select_protocol(transport: &mut dyn Transport, protocol: u8) -> Result<(), ChannelError> {
    execute(transport, &Command::SelectProtocol(protocol)).map(drop)
}

/// Emulator UID, acknowledged with `0x01`.
pub fn set_uid(transport: &mut dyn Transport, uid: &[u8]) -> Result<(), ChannelError> {
    debug!("set uid {}", crate::utils::HexDisplay(uid));
    execute(transport, &Command::SetUid(uid.to_vec())).map(drop)
}

/// Emulator SAK, acknowledged with `0x01`.
pub fn set_sak(transport: &mut dyn Transport, sak: u8) -> Result<(), ChannelError> {
    debug!("set sak {:#04x}", sak);
    execute(transport, &Command::SetSak(sak)).map(drop)
}

/// Emulator ATS historical bytes, acknowledged with `0x01`.
pub fn set_ats_historical_bytes(
    transport: &mut dyn Transport,
    bytes: &[u8],
) -> Result<(), ChannelError> {
    debug!("set ats historical bytes {}", crate::utils::HexDisplay(bytes));
    execute(transport, &Command::SetAtsHistoricalBytes(bytes.to_vec())).map(drop)
}

/// Write the start opcode. Any banner is left for the caller.
pub fn start_emulation(transport: &mut dyn Transport, opcode: u8) -> Result<(), ChannelError> {
    debug!("start emulation with opcode {:#04x}", opcode);
    execute(transport, &Command::StartEmulation { opcode }).map(drop)
}

/// Read the next tagged emulator event.
pub fn next_event(transport: &mut dyn Transport) -> Result<EmulationEvent, ChannelError> {
    read_event(transport, EventFraming::Tagged)
}

/// Reply to a command event with a u16-LE length-prefixed payload.
pub fn respond(transport: &mut dyn Transport, response: &[u8]) -> Result<(), ChannelError> {
    execute(transport, &Command::Respond(response.to_vec())).map(drop)
}
