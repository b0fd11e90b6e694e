//! Step-by-step `CardProfile` construction.

use crate::card::CardProfile;
use crate::constants::SHORT_FRAME_MAX_PAYLOAD_LEN;
use crate::types::{Sak, Uid};
use crate::{Error, Result};

/// Builder for `CardProfile`.
///
/// The UID is required. SAK defaults to `Sak::ISO_14443_4` since the
/// emulator answers ISO-DEP commands.
#[derive(Debug, Default)]
pub struct CardProfileBuilder {
    uid: Option<Vec<u8>>,
    sak: Option<Sak>,
    ats_historical: Option<Vec<u8>>,
}

impl CardProfileBuilder {
    /// Empty builder; `uid` must be set before `build`.
    pub fn new() -> Self {
        Self::default()
    }

    /// UID bytes, 4 or 7 long.
    pub fn uid(mut self, uid: &[u8]) -> Self {
        self.uid = Some(uid.to_vec());
        self
    }

    /// Override the default SAK.
    pub fn sak(mut self, sak: u8) -> Self {
        self.sak = Some(Sak::new(sak));
        self
    }

    /// ATS historical bytes, at most 255.
    pub fn ats_historical(mut self, bytes: &[u8]) -> Self {
        self.ats_historical = Some(bytes.to_vec());
        self
    }

    /// Validate and produce the profile.
    pub fn build(self) -> Result<CardProfile> {
        let raw = self.uid.ok_or(Error::InvalidLength {
            expected: 4,
            actual: 0,
        })?;
        let uid = Uid::try_from(raw.as_slice())?;

        let mut profile = CardProfile::new(uid, self.sak.unwrap_or(Sak::ISO_14443_4));
        if let Some(hist) = self.ats_historical {
            // Sent behind a one-byte length
            if hist.len() > SHORT_FRAME_MAX_PAYLOAD_LEN {
                return Err(Error::InvalidLength {
                    expected: SHORT_FRAME_MAX_PAYLOAD_LEN,
                    actual: hist.len(),
                });
            }
            profile = profile.with_ats_historical(hist);
        }
        Ok(profile)
    }
}
