// bbionfc/src/protocol/mod.rs

//! Wire layer: frames, commands, emulator events and the stateless channel.

pub mod channel;
pub mod commands;
pub mod events;
pub mod frame;
pub mod io;
pub mod parser;

pub use commands::{Command, Reply};
pub use events::{EmulationEvent, EventFraming};
pub use frame::{Frame, ShortFrame};
