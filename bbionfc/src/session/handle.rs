// bbionfc/src/session/handle.rs

//! `Session<Idle>` and `Session<BinaryBridge>`.

use std::marker::PhantomData;

use crate::error::NegotiationError;
use crate::negotiate::{self, EmulatorProfile, SyncConfig};
use crate::session::emulator::{CardEmulator, Configuring};
use crate::session::reader::Reader;
use crate::transport::Transport;
use crate::types::Mode;

/// Type-state marker: nothing negotiated yet
pub struct Idle;
/// Type-state marker: the firmware answered with the bridge marker
pub struct BinaryBridge;

/// Maps a type-state marker to its runtime `Mode`.
pub trait SessionState {
    /// Runtime mode of this state
    const MODE: Mode;
}

impl SessionState for Idle {
    const MODE: Mode = Mode::Idle;
}

impl SessionState for BinaryBridge {
    const MODE: Mode = Mode::BinaryBridge;
}

/// Session handle that enforces the negotiation order at compile time.
///
/// `Idle -> BinaryBridge -> Reader | CardEmulator`. Framed operations only
/// exist on `Reader` and `CardEmulator`, so they cannot be issued before a
/// sub-mode was acknowledged.
pub struct Session<State = Idle> {
    transport: Box<dyn Transport>,
    sync: SyncConfig,
    _state: PhantomData<State>,
}

impl<S: SessionState> Session<S> {
    /// Current protocol mode.
    pub fn mode(&self) -> Mode {
        S::MODE
    }

    /// Release the transport, ending the session.
    pub fn into_transport(self) -> Box<dyn Transport> {
        self.transport
    }

    /// Synchronization settings used by `reset_to_bridge`.
    pub fn sync_config(&self) -> &SyncConfig {
        &self.sync
    }
}

impl Session<Idle> {
    /// Create a session from an existing Transport instance, e.g. a
    /// `SerialTransport` or, in tests, a `MockTransport`.
    pub fn new_with_transport(transport: Box<dyn Transport>) -> Self {
        Self::with_config(transport, SyncConfig::default())
    }

    /// Create a session with custom synchronization settings.
    pub fn with_config(transport: Box<dyn Transport>, sync: SyncConfig) -> Self {
        Self {
            transport,
            sync,
            _state: PhantomData,
        }
    }

    /// Synchronize with the firmware and reach binary-bridge mode.
    pub fn reset_to_bridge(self) -> Result<Session<BinaryBridge>, NegotiationError> {
        let mut this = self;
        negotiate::reset_to_bridge(&mut *this.transport, &this.sync)?;
        Ok(Session {
            transport: this.transport,
            sync: this.sync,
            _state: PhantomData,
        })
    }
}

impl Session<BinaryBridge> {
    /// Enter HydraNFC reader mode (`0x0E` / `NFC2`).
    pub fn enter_reader(self) -> Result<Reader, NegotiationError> {
        let mut this = self;
        negotiate::enter_mode(
            &mut *this.transport,
            crate::constants::BBIO_NFC_READER,
            crate::constants::READER_MODE_ACK,
        )?;
        Ok(Reader::new(this.transport, this.sync))
    }

    /// Enter card-emulator mode as described by `profile`.
    pub fn enter_card_emulator(
        self,
        profile: EmulatorProfile,
    ) -> Result<CardEmulator<Configuring>, NegotiationError> {
        let mut this = self;
        negotiate::enter_mode(&mut *this.transport, profile.selector, profile.mode_ack)?;
        Ok(CardEmulator::new(this.transport, this.sync, profile))
    }
}

/// Hand a transport back as an `Idle` session after a sub-mode was left.
pub(crate) fn idle(transport: Box<dyn Transport>, sync: SyncConfig) -> Session<Idle> {
    Session::with_config(transport, sync)
}
