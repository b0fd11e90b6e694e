// bbionfc/src/lib.rs

//! bbionfc
//!
//! Host-side client for the HydraBus binary bridge (BBIO) and its HydraNFC
//! reader and card-emulator modes, over any byte-stream transport.
#![warn(missing_docs)]

pub mod card;
pub mod constants;
pub mod error;
pub mod negotiate;
pub mod prelude;
pub mod protocol;
pub mod session;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
