// bbionfc/src/negotiate/mod.rs

//! Mode negotiation: synchronize with the bridge firmware and switch it into
//! a sub-mode. This is the only code that changes the transport timeout.

pub mod config;

pub use config::{EmulatorProfile, SyncConfig};

use log::{debug, trace, warn};

use crate::constants::{BBIO_MARKER, BBIO_PROBE_READ_LEN, BBIO_RESET};
use crate::error::NegotiationError;
use crate::protocol::parser::contains_marker;
use crate::transport::Transport;
use crate::utils::HexDisplay;

/// Probe for binary-bridge mode.
///
/// Writes the reset byte and looks for `BBIO1` in up to five answer bytes,
/// at most `config.attempts` times. On success, stale input is dropped and
/// reads become blocking.
pub fn reset_to_bridge(
    transport: &mut dyn Transport,
    config: &SyncConfig,
) -> Result<(), NegotiationError> {
    transport.set_timeout(Some(config.probe_timeout))?;

    for attempt in 1..=config.attempts {
        transport.write(&[BBIO_RESET])?;
        let resp = transport.read(BBIO_PROBE_READ_LEN)?;
        trace!("probe {}: {}", attempt, HexDisplay(&resp));

        if contains_marker(&resp, BBIO_MARKER) {
            transport.clear_input_buffer()?;
            transport.set_timeout(crate::utils::BLOCKING)?;
            debug!("binary bridge reached after {} probe(s)", attempt);
            return Ok(());
        }
    }

    warn!("no bridge marker after {} probes", config.attempts);
    Err(NegotiationError::BridgeUnreachable {
        attempts: config.attempts,
    })
}

/// Switch from bridge mode into a sub-mode and verify its 4-byte ack.
pub fn enter_mode(
    transport: &mut dyn Transport,
    selector: u8,
    expected_ack: [u8; 4],
) -> Result<(), NegotiationError> {
    transport.write(&[selector])?;

    // Blocking reads may still hand the ack over in pieces.
    let mut got = Vec::with_capacity(expected_ack.len());
    while got.len() < expected_ack.len() {
        let chunk = transport.read(expected_ack.len() - got.len())?;
        if chunk.is_empty() {
            break;
        }
        got.extend_from_slice(&chunk);
    }

    if got != expected_ack {
        warn!(
            "mode {:#04x} answered {} instead of {}",
            selector,
            HexDisplay(&got),
            HexDisplay(&expected_ack)
        );
        return Err(NegotiationError::UnexpectedAck {
            expected: expected_ack,
            got,
        });
    }

    debug!(
        "entered mode {:#04x} ({})",
        selector,
        String::from_utf8_lossy(&expected_ack)
    );
    Ok(())
}
