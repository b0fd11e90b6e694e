// bbionfc/src/constants.rs
//! Common protocol constants used across the crate

/// BBIO reset / bridge probe byte. Also leaves any active sub-mode.
pub const BBIO_RESET: u8 = 0x00;

/// Marker the firmware prints when it sits in binary-bridge mode.
pub const BBIO_MARKER: &[u8; 5] = b"BBIO1";

/// Number of bytes read per bridge probe.
pub const BBIO_PROBE_READ_LEN: usize = 5;

/// Mode selector: HydraNFC v2 reader
pub const BBIO_NFC_READER: u8 = 0x0E;
/// Mode selector: HydraNFC v2 card emulator
pub const BBIO_NFC_CARD_EMULATOR: u8 = 0x17;

/// Mode acknowledgment of the reader (4 bytes)
pub const READER_MODE_ACK: [u8; 4] = *b"NFC2";
/// Mode acknowledgment of the card emulator (4 bytes)
pub const CARD_EMULATOR_MODE_ACK: [u8; 4] = *b"NCE2";

/// Reader: RF field off
pub const NFC_RF_OFF: u8 = 0x02;
/// Reader: RF field on
pub const NFC_RF_ON: u8 = 0x03;
/// Reader: two raw bytes, no CRC mode or length byte
pub const NFC_CMD_SEND_BITS: u8 = 0x04;
/// Reader: CRC mode, u8 length, payload
pub const NFC_CMD_SEND_BYTES: u8 = 0x05;
/// Reader: select ISO 14443-A
pub const NFC_SET_MODE_ISO_14443A: u8 = 0x06;
/// Reader: select ISO 15693
pub const NFC_SET_MODE_ISO_15693: u8 = 0x07;
/// Reader: ISO 14443-A REQA, answered with the ATQA
pub const NFC_ISO_14443A_REQA: u8 = 0x08;
/// Reader: select ISO 14443-B
pub const NFC_SET_MODE_ISO_14443B: u8 = 0x09;

/// Card emulator: start with untagged events (legacy firmware)
pub const CE_START_EMULATION: u8 = 0x01;
/// Card emulator: set UID
pub const CE_SET_UID: u8 = 0x04;
/// Card emulator: set SAK
pub const CE_SET_SAK: u8 = 0x05;
/// Card emulator: start with tagged events
pub const CE_START_EMULATION_RAW: u8 = 0x0A;
/// Card emulator: set ATS historical bytes
pub const CE_SET_ATS_HIST_BYTES: u8 = 0x0B;

/// Acknowledgment byte returned by emulator configuration commands
pub const CE_ACK: u8 = 0x01;

/// Event tag: a reader activated the emulated card
pub const CE_TAG_CARD_ACTIVATION: u8 = 7;
/// Event tag: a reader command follows (u16-LE length, payload)
pub const CE_TAG_CARD_CMD: u8 = 8;
/// Event tag: emulation ended
pub const CE_TAG_END_EMULATION: u8 = 9;

/// Maximum payload of a u8-length (reader / emulator config) frame
pub const SHORT_FRAME_MAX_PAYLOAD_LEN: usize = u8::MAX as usize;

/// Maximum payload of a u16-LE-length (emulator command) frame
pub const FRAME_MAX_PAYLOAD_LEN: usize = u16::MAX as usize;

/// Banner length printed by the legacy emulator firmware after start
pub const LEGACY_EMULATOR_BANNER_LEN: usize = 40;
