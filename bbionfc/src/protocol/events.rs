// bbionfc/src/protocol/events.rs

//! Card-emulator event decoding.

use crate::constants::{CE_TAG_CARD_ACTIVATION, CE_TAG_CARD_CMD, CE_TAG_END_EMULATION};
use crate::error::ChannelError;
use crate::protocol::{Frame, io, parser};
use crate::transport::Transport;

/// Event produced by the device while card emulation runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmulationEvent {
    /// A reader activated the emulated card
    Activation,
    /// A reader sent a command; exactly one `respond` must follow
    Command {
        /// Raw command bytes from the reader
        payload: Vec<u8>,
    },
    /// Emulation ended on the device; no further events follow
    End,
}

impl EmulationEvent {
    /// Tag byte under tagged framing.
    pub fn tag(&self) -> u8 {
        match self {
            Self::Activation => CE_TAG_CARD_ACTIVATION,
            Self::Command { .. } => CE_TAG_CARD_CMD,
            Self::End => CE_TAG_END_EMULATION,
        }
    }

    /// Whether this is the end event.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::End)
    }

    /// Encode the event the way the device sends it (tagged framing).
    pub fn encode(&self) -> Result<Vec<u8>, ChannelError> {
        let mut out = vec![self.tag()];
        if let Self::Command { payload } = self {
            out.extend_from_slice(&Frame::encode(payload)?);
        }
        Ok(out)
    }

    /// Decode a complete tagged event from a buffer.
    pub fn decode(data: &[u8]) -> Result<Self, ChannelError> {
        let tag = parser::byte_at(data, 0)?;
        match tag {
            CE_TAG_CARD_ACTIVATION => Ok(Self::Activation),
            CE_TAG_END_EMULATION => Ok(Self::End),
            CE_TAG_CARD_CMD => Ok(Self::Command {
                payload: Frame::decode(&data[1..])?,
            }),
            tag => Err(ChannelError::UnknownTag { tag }),
        }
    }
}

/// How events are delimited on the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventFraming {
    /// 1-byte tag then tag-specific body
    Tagged,
    /// Every event is a bare u16-LE length-prefixed command
    Untagged,
}

/// Read the next event from the stream.
///
/// Unknown tags yield `UnknownTag` after consuming only the tag byte, so the
/// caller can keep reading.
pub fn read_event(
    transport: &mut dyn Transport,
    framing: EventFraming,
) -> Result<EmulationEvent, ChannelError> {
    if framing == EventFraming::Untagged {
        let payload = Frame::read_from(transport)?;
        return Ok(EmulationEvent::Command { payload });
    }

    match io::read_u8(transport)? {
        CE_TAG_CARD_ACTIVATION => Ok(EmulationEvent::Activation),
        CE_TAG_END_EMULATION => Ok(EmulationEvent::End),
        CE_TAG_CARD_CMD => {
            let payload = Frame::read_from(transport)?;
            Ok(EmulationEvent::Command { payload })
        }
        tag => Err(ChannelError::UnknownTag { tag }),
    }
}
