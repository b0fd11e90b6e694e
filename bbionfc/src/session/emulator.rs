// bbionfc/src/session/emulator.rs

//! Card-emulator session: `Configuring -> Emulating -> Stopped`.

use log::{debug, warn};

use crate::card::CardProfile;
use crate::error::ChannelError;
use crate::negotiate::{EmulatorProfile, SyncConfig};
use crate::protocol::events::read_event;
use crate::protocol::{EmulationEvent, channel, io};
use crate::session::handle::{Idle, Session};
use crate::transport::Transport;
use crate::types::Mode;

/// Phase marker: identity may still be configured
pub struct Configuring;
/// Phase marker: the device reported `End`
pub struct Stopped;

/// Running phase. Tracks the command/response pairing.
#[derive(Debug, Default)]
pub struct Emulating {
    pending_command: bool,
    ended: bool,
}

/// Card-emulator handle. Configuration calls only exist while
/// `Configuring`, event calls only while `Emulating`.
pub struct CardEmulator<Phase = Configuring> {
    transport: Box<dyn Transport>,
    sync: SyncConfig,
    profile: EmulatorProfile,
    phase: Phase,
}

impl<P> CardEmulator<P> {
    /// Always `Mode::CardEmulator`.
    pub fn mode(&self) -> Mode {
        Mode::CardEmulator
    }

    /// Firmware profile this session was negotiated with.
    pub fn profile(&self) -> &EmulatorProfile {
        &self.profile
    }

    /// Release the transport without leaving the mode.
    pub fn into_transport(self) -> Box<dyn Transport> {
        self.transport
    }

    fn into_phase<Q>(self, phase: Q) -> CardEmulator<Q> {
        CardEmulator {
            transport: self.transport,
            sync: self.sync,
            profile: self.profile,
            phase,
        }
    }

    fn leave_mode(self) -> Result<Session<Idle>, ChannelError> {
        let mut this = self;
        channel::reset(&mut *this.transport)?;
        debug!("left card emulator mode");
        Ok(crate::session::handle::idle(this.transport, this.sync))
    }
}

impl CardEmulator<Configuring> {
    pub(crate) fn new(
        transport: Box<dyn Transport>,
        sync: SyncConfig,
        profile: EmulatorProfile,
    ) -> Self {
        Self {
            transport,
            sync,
            profile,
            phase: Configuring,
        }
    }

    /// Set the emulated UID.
    pub fn set_uid(&mut self, uid: &[u8]) -> Result<(), ChannelError> {
        channel::set_uid(&mut *self.transport, uid)
    }

    /// Set the emulated SAK.
    pub fn set_sak(&mut self, sak: u8) -> Result<(), ChannelError> {
        channel::set_sak(&mut *self.transport, sak)
    }

    /// Set the ATS historical bytes.
    pub fn set_ats_historical_bytes(&mut self, bytes: &[u8]) -> Result<(), ChannelError> {
        channel::set_ats_historical_bytes(&mut *self.transport, bytes)
    }

    /// Apply a whole card identity: UID, SAK, then ATS historical bytes if
    /// the profile carries any.
    pub fn configure(&mut self, card: &CardProfile) -> Result<(), ChannelError> {
        self.set_uid(card.uid().as_bytes())?;
        self.set_sak(card.sak().as_u8())?;
        if let Some(hist) = card.ats_historical() {
            self.set_ats_historical_bytes(hist)?;
        }
        Ok(())
    }

    /// Start emulation. Legacy firmware prints a banner first; it is read
    /// and dropped so the next read lands on an event.
    pub fn start(self) -> Result<CardEmulator<Emulating>, ChannelError> {
        let mut this = self;
        channel::start_emulation(&mut *this.transport, this.profile.start_opcode)?;

        if this.profile.banner_len > 0 {
            let banner = io::read_exact(&mut *this.transport, this.profile.banner_len)?;
            debug!("emulator banner: {}", String::from_utf8_lossy(&banner).trim_end());
        }

        Ok(this.into_phase(Emulating::default()))
    }

    /// Reset the firmware out of the emulator and hand back an idle session.
    pub fn leave(self) -> Result<Session<Idle>, ChannelError> {
        self.leave_mode()
    }
}

impl CardEmulator<Emulating> {
    /// Read the next event.
    ///
    /// A `Command` event must be answered with `respond` before the next
    /// read; after `End` no further events are read and `stopped` yields the
    /// terminal handle.
    pub fn next_event(&mut self) -> Result<EmulationEvent, ChannelError> {
        if self.phase.ended {
            return Err(ChannelError::EmulationEnded);
        }
        if self.phase.pending_command {
            return Err(ChannelError::ResponsePending);
        }

        let event = read_event(&mut *self.transport, self.profile.framing)?;
        match &event {
            EmulationEvent::Activation => debug!("card activated"),
            EmulationEvent::Command { payload } => {
                debug!("command {}", crate::utils::HexDisplay(payload));
                self.phase.pending_command = true;
            }
            EmulationEvent::End => {
                debug!("emulation ended");
                self.phase.ended = true;
            }
        }
        Ok(event)
    }

    /// Answer the command event returned by the last `next_event`.
    pub fn respond(&mut self, response: &[u8]) -> Result<(), ChannelError> {
        if !self.phase.pending_command {
            return Err(ChannelError::NoPendingCommand);
        }
        debug!("response {}", crate::utils::HexDisplay(response));
        channel::respond(&mut *self.transport, response)?;
        self.phase.pending_command = false;
        Ok(())
    }

    /// Whether a command event is awaiting `respond`.
    pub fn is_awaiting_response(&self) -> bool {
        self.phase.pending_command
    }

    /// Whether the device already reported `End`.
    pub fn is_ended(&self) -> bool {
        self.phase.ended
    }

    /// Terminal handle once `End` was read. Before that the running handle
    /// is handed back unchanged.
    pub fn stopped(self) -> Result<CardEmulator<Stopped>, Self> {
        if self.phase.ended {
            Ok(self.into_phase(Stopped))
        } else {
            Err(self)
        }
    }

    /// Serve events until the device reports `End`.
    ///
    /// Every command is answered with the handler's response. Unknown event
    /// tags are logged and skipped; any other error ends the loop. Untagged
    /// framing has no end event, so the loop then only ends on an error.
    pub fn run<H: CommandHandler + ?Sized>(
        self,
        handler: &mut H,
    ) -> Result<CardEmulator<Stopped>, ChannelError> {
        let mut this = self;
        loop {
            match this.next_event() {
                Ok(EmulationEvent::Activation) => handler.on_activation(),
                Ok(EmulationEvent::Command { payload }) => {
                    let response = handler.on_command(&payload);
                    this.respond(&response)?;
                }
                Ok(EmulationEvent::End) => return Ok(this.into_phase(Stopped)),
                Err(ChannelError::UnknownTag { tag }) => {
                    warn!("skipping unknown event tag {:#04x}", tag);
                    handler.on_unknown_tag(tag);
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Reset the firmware out of the emulator, even mid-exchange.
    pub fn leave(self) -> Result<Session<Idle>, ChannelError> {
        self.leave_mode()
    }
}

/// Answers reader commands during `CardEmulator::run`.
///
/// Any `FnMut(&[u8]) -> Vec<u8>` closure is a handler.
pub trait CommandHandler {
    /// Produce the response to one reader command.
    fn on_command(&mut self, command: &[u8]) -> Vec<u8>;

    /// Called for every activation event.
    fn on_activation(&mut self) {}

    /// Called after an unknown event tag was skipped.
    fn on_unknown_tag(&mut self, _tag: u8) {}
}

impl<F> CommandHandler for F
where
    F: FnMut(&[u8]) -> Vec<u8>,
{
    fn on_command(&mut self, command: &[u8]) -> Vec<u8> {
        self(command)
    }
}
