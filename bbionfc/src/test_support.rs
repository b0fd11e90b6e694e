//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTransport setup so tests across the
//! crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::negotiate::EmulatorProfile;
use crate::session::{CardEmulator, Configuring, Reader, Session};
use crate::transport::{MockTransport, Transport};
use crate::{Result, TransportError};

/// Seed the replies of a clean negotiation: the bridge marker on the first
/// probe, then the 4-byte mode ack.
#[doc(hidden)]
pub fn seed_negotiation(mock: &mut MockTransport, mode_ack: [u8; 4]) {
    mock.push_response(crate::constants::BBIO_MARKER.to_vec());
    mock.push_response(mode_ack.to_vec());
}

/// MockTransport answering a reader negotiation, followed by `responses`.
#[doc(hidden)]
pub fn reader_ready_mock(responses: Vec<Vec<u8>>) -> MockTransport {
    let mut mock = MockTransport::new();
    seed_negotiation(&mut mock, crate::constants::READER_MODE_ACK);
    for r in responses {
        mock.push_response(r);
    }
    mock
}

/// MockTransport answering a card-emulator negotiation, followed by
/// `responses`.
#[doc(hidden)]
pub fn emulator_ready_mock(responses: Vec<Vec<u8>>) -> MockTransport {
    let mut mock = MockTransport::new();
    seed_negotiation(&mut mock, crate::constants::CARD_EMULATOR_MODE_ACK);
    for r in responses {
        mock.push_response(r);
    }
    mock
}

/// Negotiate a `Reader` over any transport already seeded for it.
#[doc(hidden)]
pub fn negotiated_reader(transport: Box<dyn Transport>) -> Result<Reader> {
    let reader = Session::new_with_transport(transport)
        .reset_to_bridge()?
        .enter_reader()?;
    Ok(reader)
}

/// Negotiate a `CardEmulator` over any transport already seeded for it.
#[doc(hidden)]
pub fn negotiated_emulator(
    transport: Box<dyn Transport>,
    profile: EmulatorProfile,
) -> Result<CardEmulator<Configuring>> {
    let emulator = Session::new_with_transport(transport)
        .reset_to_bridge()?
        .enter_card_emulator(profile)?;
    Ok(emulator)
}

/// Transport delegating into a shared MockTransport, so a test can inspect
/// what was written after a session took ownership of the transport.
#[doc(hidden)]
#[derive(Clone, Default)]
pub struct SharedMock {
    inner: Rc<RefCell<MockTransport>>,
}

impl SharedMock {
    /// Share `mock` between the test and a session.
    pub fn new(mock: MockTransport) -> Self {
        Self {
            inner: Rc::new(RefCell::new(mock)),
        }
    }

    /// Borrow the underlying mock.
    pub fn mock(&self) -> std::cell::Ref<'_, MockTransport> {
        self.inner.borrow()
    }

    /// Boxed handle for a session; this value keeps a second reference.
    pub fn boxed(&self) -> Box<dyn Transport> {
        Box::new(self.clone())
    }
}

impl Transport for SharedMock {
    fn read(&mut self, len: usize) -> std::result::Result<Vec<u8>, TransportError> {
        self.inner.borrow_mut().read(len)
    }

    fn write(&mut self, data: &[u8]) -> std::result::Result<(), TransportError> {
        self.inner.borrow_mut().write(data)
    }

    fn set_timeout(&mut self, timeout: Option<Duration>) -> std::result::Result<(), TransportError> {
        self.inner.borrow_mut().set_timeout(timeout)
    }

    fn clear_input_buffer(&mut self) -> std::result::Result<(), TransportError> {
        self.inner.borrow_mut().clear_input_buffer()
    }
}
