// bbionfc/src/types.rs

//! Protocol newtypes and enums.

use crate::Error;
use std::convert::TryFrom;

/// Operating mode of the attached device as seen by the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// Nothing negotiated
    #[display(fmt = "idle")]
    Idle,
    /// Binary bridge reached, no sub-mode
    #[display(fmt = "binary bridge")]
    BinaryBridge,
    /// HydraNFC reader
    #[display(fmt = "reader")]
    Reader,
    /// HydraNFC card emulator
    #[display(fmt = "card emulator")]
    CardEmulator,
}

/// UID - Newtype Pattern (ISO 14443-A single or double size)
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::AsRef)]
pub struct Uid(Vec<u8>);

impl Uid {
    /// Accepted UID sizes in bytes.
    pub const VALID_LENGTHS: [usize; 2] = [4, 7];

    /// Raw UID bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// UID size in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a validated UID.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lowercase hex, no separators.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if !Self::VALID_LENGTHS.contains(&bytes.len()) {
            return Err(Error::InvalidLength {
                expected: if bytes.len() < 7 { 4 } else { 7 },
                actual: bytes.len(),
            });
        }
        Ok(Self(bytes.to_vec()))
    }
}

impl<const N: usize> TryFrom<[u8; N]> for Uid {
    type Error = Error;

    fn try_from(bytes: [u8; N]) -> Result<Self, Self::Error> {
        Self::try_from(&bytes[..])
    }
}

/// SAK (u8)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::From)]
pub struct Sak(u8);

impl Sak {
    /// Type 4 compliant, ISO/IEC 14443-4 supported
    pub const ISO_14443_4: Self = Self(0x20);

    /// Wrap a raw SAK byte.
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Raw SAK byte.
    pub fn as_u8(&self) -> u8 {
        self.0
    }

    /// Bit 6: ISO/IEC 14443-4 compliant
    pub fn supports_iso_14443_4(&self) -> bool {
        self.0 & 0x20 != 0
    }
}

/// Reader-side RF protocol selection.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Protocol {
    /// ISO/IEC 14443 type A
    #[display(fmt = "ISO 14443-A")]
    Iso14443A = crate::constants::NFC_SET_MODE_ISO_14443A,
    /// ISO/IEC 15693 vicinity cards
    #[display(fmt = "ISO 15693")]
    Iso15693 = crate::constants::NFC_SET_MODE_ISO_15693,
    /// ISO/IEC 14443 type B
    #[display(fmt = "ISO 14443-B")]
    Iso14443B = crate::constants::NFC_SET_MODE_ISO_14443B,
}

impl Protocol {
    /// Reader opcode selecting this protocol.
    pub fn selector(&self) -> u8 {
        *self as u8
    }
}

/// CRC handling for a reader transaction
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrcMode {
    /// CRC bytes are supplied by the caller and kept in the answer
    Manual = 0,
    /// The firmware appends and checks the CRC
    Compute = 1,
}

impl CrcMode {
    /// Byte sent in a transaction header.
    pub fn as_byte(&self) -> u8 {
        *self as u8
    }
}
