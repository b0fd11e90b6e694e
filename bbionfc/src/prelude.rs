// bbionfc/src/prelude.rs

//! Common imports: `use bbionfc::prelude::*;`.

pub use crate::card::{CardProfile, CardProfileBuilder};
pub use crate::negotiate::{EmulatorProfile, SyncConfig};
pub use crate::protocol::{EmulationEvent, EventFraming};
pub use crate::session::{
    BinaryBridge, CardEmulator, CommandHandler, Configuring, Emulating, Idle, Reader, Session,
    SessionBuilder, Stopped,
};
pub use crate::transport::Transport;
#[cfg(feature = "serial")]
pub use crate::transport::SerialTransport;
pub use crate::{
    ChannelError, CrcMode, Error, Mode, NegotiationError, Protocol, Result, Sak, TransportError,
    Uid,
};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, parse_hex, HexDisplay};
