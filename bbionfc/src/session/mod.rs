// bbionfc/src/session/mod.rs

//! Type-state session handles over a negotiated transport.

pub mod builder;
pub mod emulator;
pub mod handle;
pub mod reader;

pub use builder::SessionBuilder;
pub use emulator::{CardEmulator, CommandHandler, Configuring, Emulating, Stopped};
pub use handle::{BinaryBridge, Idle, Session, SessionState};
pub use reader::Reader;
