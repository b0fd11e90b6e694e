// bbionfc/src/transport/serial.rs

//! USB CDC serial port transport.

#![cfg(feature = "serial")]

use std::io::{ErrorKind, Read, Write};
use std::time::Duration;

use serialport::{ClearBuffer, SerialPort};

use crate::error::TransportError;
use crate::transport::traits::Transport;

/// Default baud rate. The HydraBus USB CDC port ignores it, but the OS
/// driver still wants one.
pub const DEFAULT_BAUD_RATE: u32 = 115_200;

/// Poll interval used to emulate an infinite read timeout.
const BLOCKING_POLL: Duration = Duration::from_secs(1);

/// Serial port transport (USB CDC ACM on the HydraBus).
pub struct SerialTransport {
    port: Box<dyn SerialPort>,
    timeout: Option<Duration>,
}

impl SerialTransport {
    /// Open the given port (e.g. `/dev/ttyACM0`, `COM3`) with blocking reads.
    pub fn open(path: &str, baud_rate: u32) -> Result<Self, TransportError> {
        let port = serialport::new(path, baud_rate)
            .timeout(BLOCKING_POLL)
            .open()?;
        log::debug!("opened serial port {} at {} baud", path, baud_rate);
        Ok(Self {
            port,
            timeout: None,
        })
    }

    /// Wrap an already opened port.
    pub fn from_port(port: Box<dyn SerialPort>) -> Self {
        Self {
            port,
            timeout: None,
        }
    }

    /// List serial ports that look like a HydraBus (or any USB CDC device).
    pub fn available_ports() -> Result<Vec<String>, TransportError> {
        Ok(serialport::available_ports()?
            .into_iter()
            .filter(|p| matches!(p.port_type, serialport::SerialPortType::UsbPort(_)))
            .map(|p| p.port_name)
            .collect())
    }
}

impl Transport for SerialTransport {
    fn read(&mut self, len: usize) -> Result<Vec<u8>, TransportError> {
        let mut buf = vec![0u8; len];
        let mut filled = 0usize;

        while filled < len {
            match self.port.read(&mut buf[filled..]) {
                Ok(0) => return Err(TransportError::Closed),
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::TimedOut => {
                    // A bounded timeout ends the read with what arrived so far;
                    // without one keep waiting.
                    if self.timeout.is_some() {
                        break;
                    }
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(e.into()),
            }
        }

        buf.truncate(filled);
        Ok(buf)
    }

    fn write(&mut self, data: &[u8]) -> Result<(), TransportError> {
        self.port.write_all(data)?;
        self.port.flush()?;
        Ok(())
    }

    fn set_timeout(&mut self, timeout: Option<Duration>) -> Result<(), TransportError> {
        self.port.set_timeout(timeout.unwrap_or(BLOCKING_POLL))?;
        self.timeout = timeout;
        Ok(())
    }

    fn clear_input_buffer(&mut self) -> Result<(), TransportError> {
        self.port.clear(ClearBuffer::Input)?;
        Ok(())
    }
}
