//! Negotiation tunables

use std::time::Duration;

use crate::constants::{CARD_EMULATOR_MODE_ACK, CE_START_EMULATION, CE_START_EMULATION_RAW};
use crate::constants::{BBIO_NFC_CARD_EMULATOR, LEGACY_EMULATOR_BANNER_LEN};
use crate::protocol::EventFraming;

/// Number of bridge probes before giving up
pub const SYNC_ATTEMPTS: usize = 20;

/// Bridge synchronization parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SyncConfig {
    /// Probes before `BridgeUnreachable`
    pub attempts: usize,
    /// Read timeout of each probe
    pub probe_timeout: Duration,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            attempts: SYNC_ATTEMPTS,
            probe_timeout: crate::utils::default_probe_timeout(),
        }
    }
}

/// How a card-emulator firmware build is driven.
///
/// Firmware revisions disagree on the start opcode and on how events are
/// framed, so there is no `Default`: pick the preset matching
/// the firmware, or build one field by field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EmulatorProfile {
    /// Mode selector written from bridge mode
    pub selector: u8,
    /// Acknowledgment expected after the selector
    pub mode_ack: [u8; 4],
    /// Opcode that starts emulation
    pub start_opcode: u8,
    /// Event delimiting used once emulation runs
    pub framing: EventFraming,
    /// Bytes of banner text printed after start, discarded before events
    pub banner_len: usize,
}

impl EmulatorProfile {
    /// Raw ISO-DEP passthrough with tag-prefixed events.
    pub const fn tagged() -> Self {
        Self {
            selector: BBIO_NFC_CARD_EMULATOR,
            mode_ack: CARD_EMULATOR_MODE_ACK,
            start_opcode: CE_START_EMULATION_RAW,
            framing: EventFraming::Tagged,
            banner_len: 0,
        }
    }

    /// Older firmware: untagged command frames after a text banner.
    pub const fn legacy() -> Self {
        Self {
            selector: BBIO_NFC_CARD_EMULATOR,
            mode_ack: CARD_EMULATOR_MODE_ACK,
            start_opcode: CE_START_EMULATION,
            framing: EventFraming::Untagged,
            banner_len: LEGACY_EMULATOR_BANNER_LEN,
        }
    }

    /// Same profile with another start opcode.
    pub const fn with_start_opcode(mut self, opcode: u8) -> Self {
        self.start_opcode = opcode;
        self
    }

    /// Same profile expecting another mode ack.
    pub const fn with_mode_ack(mut self, ack: [u8; 4]) -> Self {
        self.mode_ack = ack;
        self
    }
}
