// bbionfc/src/session/reader.rs

//! Reader-mode session.

use log::debug;

use crate::constants::NFC_CMD_SEND_BYTES;
use crate::error::ChannelError;
use crate::negotiate::SyncConfig;
use crate::protocol::channel;
use crate::session::handle::{Idle, Session};
use crate::transport::Transport;
use crate::types::{CrcMode, Mode, Protocol};

/// HydraNFC reader-mode handle.
///
/// Only obtainable through `Session<BinaryBridge>::enter_reader`, so every
/// method here runs with the reader mode acknowledged. The channel enforces
/// no ISO 14443 ordering; anticollision, RATS and APDU exchanges are plain
/// sequences of `transact` calls chosen by the caller.
pub struct Reader {
    transport: Box<dyn Transport>,
    sync: SyncConfig,
}

impl Reader {
    pub(crate) fn new(transport: Box<dyn Transport>, sync: SyncConfig) -> Self {
        Self { transport, sync }
    }

    /// Always `Mode::Reader`.
    pub fn mode(&self) -> Mode {
        Mode::Reader
    }

    /// Pick the RF protocol used by subsequent field and transaction calls.
    pub fn select_protocol(&mut self, protocol: Protocol) -> Result<(), ChannelError> {
        debug!("select protocol {}", protocol);
        channel::select_protocol(&mut *self.transport, protocol.selector())
    }

    /// Switch the RF field on.
    pub fn field_on(&mut self) -> Result<(), ChannelError> {
        channel::set_field_on(&mut *self.transport)
    }

    /// Switch the RF field off.
    pub fn field_off(&mut self) -> Result<(), ChannelError> {
        channel::set_field_off(&mut *self.transport)
    }

    /// REQA; returns the ATQA bytes as reported by the device.
    pub fn request_a(&mut self) -> Result<Vec<u8>, ChannelError> {
        channel::request_a(&mut *self.transport)
    }

    /// One request/response exchange.
    ///
    /// Writes `opcode, crc_mode, len, payload` (`3 + payload.len()` bytes)
    /// and returns the payload of the u8-length reply. Payloads over 255 bytes are rejected before
    /// anything is written.
    pub fn transact(
        &mut self,
        opcode: u8,
        crc_mode: u8,
        payload: &[u8],
    ) -> Result<Vec<u8>, ChannelError> {
        channel::transact(&mut *self.transport, opcode, crc_mode, payload)
    }

    /// `transact` with the generic send-bytes opcode.
    pub fn send_bytes(&mut self, crc: CrcMode, payload: &[u8]) -> Result<Vec<u8>, ChannelError> {
        self.transact(NFC_CMD_SEND_BYTES, crc.as_byte(), payload)
    }

    /// Send two raw bytes with the bit-oriented opcode (`0x04`). Unlike
    /// `transact` no CRC mode or length byte is written; the reply is a
    /// u8-length frame.
    pub fn send_bits(&mut self, bits: [u8; 2]) -> Result<Vec<u8>, ChannelError> {
        channel::send_bits(&mut *self.transport, bits)
    }

    /// Drop back to the firmware's idle state. The returned session must be
    /// re-negotiated before it can be used again.
    pub fn leave(self) -> Result<Session<Idle>, ChannelError> {
        let mut this = self;
        channel::reset(&mut *this.transport)?;
        debug!("left reader mode");
        Ok(crate::session::handle::idle(this.transport, this.sync))
    }

    /// Release the transport without leaving the mode.
    pub fn into_transport(self) -> Box<dyn Transport> {
        self.transport
    }
}
