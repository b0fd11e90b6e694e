// bbionfc/src/protocol/io.rs

//! Exact-length reads and logged writes on top of a `Transport`.

use log::trace;

use crate::error::ChannelError;
use crate::transport::Transport;
use crate::utils::HexDisplay;

/// Read exactly `len` bytes. A read that returns no bytes (timeout or end of
/// stream) ends the attempt with `ShortRead`.
pub fn read_exact(transport: &mut dyn Transport, len: usize) -> Result<Vec<u8>, ChannelError> {
    let mut out = Vec::with_capacity(len);
    while out.len() < len {
        let chunk = transport.read(len - out.len())?;
        if chunk.is_empty() {
            return Err(ChannelError::ShortRead {
                expected: len,
                actual: out.len(),
            });
        }
        out.extend_from_slice(&chunk);
    }
    trace!("<- {}", HexDisplay(&out));
    Ok(out)
}

/// Read a single byte.
pub fn read_u8(transport: &mut dyn Transport) -> Result<u8, ChannelError> {
    let b = read_exact(transport, 1)?;
    Ok(b[0])
}

/// Read a little-endian u16.
pub fn read_u16_le(transport: &mut dyn Transport) -> Result<u16, ChannelError> {
    let b = read_exact(transport, 2)?;
    crate::protocol::parser::le_u16_at(&b, 0)
}

/// Write all bytes in one transport write.
pub fn write_all(transport: &mut dyn Transport, data: &[u8]) -> Result<(), ChannelError> {
    trace!("-> {}", HexDisplay(data));
    transport.write(data)?;
    Ok(())
}
