// bbionfc/src/session/builder.rs

//! `SessionBuilder`.

use crate::negotiate::SyncConfig;
use crate::session::handle::{Idle, Session};
use crate::transport::Transport;
use crate::{Error, Result};

/// Helper to construct a Session with optional configuration.
#[derive(Default)]
pub struct SessionBuilder {
    transport: Option<Box<dyn Transport>>,
    sync: SyncConfig,
}

impl SessionBuilder {
    /// Builder with default synchronization settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide an already-created transport instance (e.g. MockTransport)
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Replace the whole synchronization config.
    pub fn sync_config(mut self, sync: SyncConfig) -> Self {
        self.sync = sync;
        self
    }

    /// Number of bridge probes before giving up.
    pub fn sync_attempts(mut self, attempts: usize) -> Self {
        self.sync.attempts = attempts;
        self
    }

    /// Consume the builder and return an idle Session.
    /// Requires a transport to be provided; otherwise returns MissingTransport.
    pub fn build(self) -> Result<Session<Idle>> {
        match self.transport {
            Some(t) => Ok(Session::with_config(t, self.sync)),
            None => Err(Error::MissingTransport),
        }
    }
}
