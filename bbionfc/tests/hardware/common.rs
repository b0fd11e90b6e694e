#![cfg(feature = "serial")]

//! Helpers for tests against a real HydraBus with a HydraNFC shield.
//!
//! The port comes from `BBIONFC_PORT`; without it the tests return early so
//! an accidental `--ignored` run on CI passes.

use bbionfc::transport::SerialTransport;
use bbionfc::transport::serial::DEFAULT_BAUD_RATE;
use bbionfc::{Result, Session};

pub fn open_session() -> Result<Option<Session>> {
    let Ok(path) = std::env::var("BBIONFC_PORT") else {
        return Ok(None);
    };
    let transport = SerialTransport::open(&path, DEFAULT_BAUD_RATE)?;
    Ok(Some(Session::new_with_transport(Box::new(transport))))
}
