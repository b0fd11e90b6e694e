// bbionfc/src/card/mod.rs

//! Identity presented by the emulated card.

use crate::types::{Sak, Uid};

pub mod builder;
pub use builder::CardProfileBuilder;

/// UID, SAK and optional ATS historical bytes of an emulated ISO 14443-A
/// card. Applied with `CardEmulator<Configuring>::configure`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardProfile {
    uid: Uid,
    sak: Sak,
    ats_historical: Option<Vec<u8>>,
}

impl CardProfile {
    /// Profile without ATS historical bytes.
    pub fn new(uid: Uid, sak: Sak) -> Self {
        Self {
            uid,
            sak,
            ats_historical: None,
        }
    }

    /// Start a `CardProfileBuilder`.
    pub fn builder() -> CardProfileBuilder {
        CardProfileBuilder::new()
    }

    /// UID presented during anticollision.
    pub fn uid(&self) -> &Uid {
        &self.uid
    }
    /// SAK sent after selection.
    pub fn sak(&self) -> Sak {
        self.sak
    }
    /// Historical bytes of the ATS, if set.
    pub fn ats_historical(&self) -> Option<&[u8]> {
        self.ats_historical.as_deref()
    }

    /// Replace the ATS historical bytes.
    pub fn with_ats_historical(mut self, bytes: impl Into<Vec<u8>>) -> Self {
        self.ats_historical = Some(bytes.into());
        self
    }
}
