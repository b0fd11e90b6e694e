// bbionfc/src/transport/traits.rs

//! The `Transport` seam.

use std::time::Duration;

use crate::error::TransportError;

/// Transport trait abstracts the byte stream away from protocol/session logic.
///
/// Semantics follow a serial port: `read` blocks until `len` bytes arrived
/// or the configured timeout elapsed, and may therefore return fewer bytes
/// (possibly none). With no timeout configured it blocks until satisfied or
/// the stream fails. Closing the underlying stream must make a pending read
/// return an error instead of hanging.
pub trait Transport {
    /// Read up to `len` bytes.
    fn read(&mut self, len: usize) -> Result<Vec<u8>, TransportError>;

    /// Write all bytes to the device.
    fn write(&mut self, data: &[u8]) -> Result<(), TransportError>;

    /// Configure the read timeout; `None` blocks until a read is satisfied.
    fn set_timeout(&mut self, timeout: Option<Duration>) -> Result<(), TransportError>;

    /// Discard any bytes buffered on the input side.
    fn clear_input_buffer(&mut self) -> Result<(), TransportError>;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn read(&mut self, len: usize) -> Result<Vec<u8>, TransportError> {
        (**self).read(len)
    }

    fn write(&mut self, data: &[u8]) -> Result<(), TransportError> {
        (**self).write(data)
    }

    fn set_timeout(&mut self, timeout: Option<Duration>) -> Result<(), TransportError> {
        (**self).set_timeout(timeout)
    }

    fn clear_input_buffer(&mut self) -> Result<(), TransportError> {
        (**self).clear_input_buffer()
    }
}
