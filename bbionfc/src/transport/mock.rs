// bbionfc/src/transport/mock.rs

//! In-memory transport for tests.

use std::collections::VecDeque;
use std::time::Duration;

use crate::error::TransportError;
use crate::transport::traits::Transport;

/// Mock transport for unit tests. It records written payloads and serves
/// queued response chunks.
///
/// Each queued chunk models what the device has sent by the time a read
/// starts. A read takes up to the requested number of bytes from the front
/// chunk; an empty chunk models a read that timed out with nothing received.
/// Once the queue is drained every read returns no bytes, which the protocol
/// layer reports as a short read.
#[derive(Debug, Default)]
pub struct MockTransport {
    /// Every write, in order
    pub sent: Vec<Vec<u8>>,
    /// Chunks served to reads
    pub responses: VecDeque<Vec<u8>>,
    /// Every timeout configuration applied, in order
    pub timeouts: Vec<Option<Duration>>,
    /// Number of clear_input_buffer calls
    pub input_clears: usize,
    /// Testing hook: the next `n` writes fail as if the port was closed
    pub write_failures: usize,
    /// Testing hook: reads fail with `Closed` once the queue is drained
    pub closed_when_drained: bool,
}

impl MockTransport {
    /// Empty mock: every read returns nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor seeding the response queue.
    pub fn with_responses<I>(responses: I) -> Self
    where
        I: IntoIterator<Item = Vec<u8>>,
    {
        let mut mock = Self::new();
        for r in responses {
            mock.push_response(r);
        }
        mock
    }

    /// Queue one chunk.
    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push_back(resp);
    }

    /// Queue `n` probe reads that time out with no data.
    pub fn push_silence(&mut self, n: usize) {
        for _ in 0..n {
            self.responses.push_back(Vec::new());
        }
    }

    /// Set how many subsequent writes should fail (for tests).
    pub fn set_write_failures(&mut self, n: usize) {
        self.write_failures = n;
    }

    /// All written bytes concatenated in order.
    pub fn written(&self) -> Vec<u8> {
        self.sent.concat()
    }

    /// Bytes still queued for reading.
    pub fn pending(&self) -> usize {
        self.responses.iter().map(Vec::len).sum()
    }
}

impl Transport for MockTransport {
    fn read(&mut self, len: usize) -> Result<Vec<u8>, TransportError> {
        let Some(front) = self.responses.front_mut() else {
            if self.closed_when_drained {
                return Err(TransportError::Closed);
            }
            return Ok(Vec::new());
        };

        if front.len() <= len {
            // Whole chunk (possibly empty) is consumed by this read
            return Ok(self.responses.pop_front().unwrap_or_default());
        }

        let rest = front.split_off(len);
        Ok(std::mem::replace(front, rest))
    }

    fn write(&mut self, data: &[u8]) -> Result<(), TransportError> {
        if self.write_failures > 0 {
            self.write_failures -= 1;
            return Err(TransportError::Closed);
        }
        self.sent.push(data.to_vec());
        Ok(())
    }

    fn set_timeout(&mut self, timeout: Option<Duration>) -> Result<(), TransportError> {
        self.timeouts.push(timeout);
        Ok(())
    }

    fn clear_input_buffer(&mut self) -> Result<(), TransportError> {
        // Queued responses are preserved: tests pre-seed the replies that
        // follow synchronization before handing the transport to a session.
        self.input_clears += 1;
        Ok(())
    }
}
