//! Utilities for bbionfc: small, reusable helpers used across the crate.

pub mod hex;
pub mod timeout;

pub use self::hex::*;
pub use self::timeout::*;
