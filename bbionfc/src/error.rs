// bbionfc/src/error.rs

//! Error types, one per failure class, plus the crate-level `Error`.

use thiserror::Error;

/// Transport 層のエラー
#[derive(Error, Debug)]
pub enum TransportError {
    /// The stream was closed underneath the session.
    #[error("transport closed")]
    Closed,

    /// A blocking operation gave up.
    #[error("transport operation timed out")]
    Timeout,

    /// Underlying I/O failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    // シリアル実装は feature で後から有効化する
    /// Serial port setup or enumeration failure.
    #[cfg(feature = "serial")]
    #[error("serial port error: {0}")]
    Serial(#[from] serialport::Error),
}

/// Failures while bringing the device into a protocol mode.
#[derive(Error, Debug)]
pub enum NegotiationError {
    /// No probe reply contained the bridge marker.
    #[error("bridge mode not reached after {attempts} probes")]
    BridgeUnreachable {
        /// Probes sent before giving up
        attempts: usize,
    },

    /// The mode selector was answered with something other than the ack.
    #[error("unexpected mode ack: expected {expected:02x?}, got {got:02x?}")]
    UnexpectedAck {
        /// Ack of the requested mode
        expected: [u8; 4],
        /// Bytes actually received (may be fewer than 4)
        got: Vec<u8>,
    },

    /// Transport failure during negotiation.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Failures of framed operations once a mode is active.
#[derive(Error, Debug)]
pub enum ChannelError {
    /// The stream ended or timed out before the expected bytes arrived.
    #[error("short read: expected {expected} bytes, got {actual}")]
    ShortRead {
        /// Bytes the read asked for
        expected: usize,
        /// Bytes that arrived
        actual: usize,
    },

    /// A complete frame buffer carries more bytes than its header declares.
    #[error("frame length mismatch: header declares {declared} bytes, frame carries {actual}")]
    LengthMismatch {
        /// Payload length from the header
        declared: usize,
        /// Payload bytes present after the header
        actual: usize,
    },

    /// Payload does not fit the frame's length field. Nothing was written.
    #[error("payload too large: max {max} bytes, got {actual}")]
    PayloadTooLarge {
        /// Largest payload the length field can carry
        max: usize,
        /// Length of the rejected payload
        actual: usize,
    },

    /// An emulator configuration command was not answered with `0x01`.
    #[error("configuration not acknowledged: got {got:#04x}")]
    NotAcknowledged {
        /// Byte received instead of the ack
        got: u8,
    },

    /// An emulator event started with an unknown tag; only the tag was read.
    #[error("unknown emulator event tag {tag:#04x}")]
    UnknownTag {
        /// The tag byte
        tag: u8,
    },

    /// `respond` was called with no command event outstanding.
    #[error("no command event is awaiting a response")]
    NoPendingCommand,

    /// `next_event` was called before the last command was answered.
    #[error("command event still awaiting a response")]
    ResponsePending,

    /// `next_event` was called after the end event.
    #[error("emulation already ended")]
    EmulationEnded,

    /// Transport failure during a framed operation.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl ChannelError {
    /// Whether the session must be re-negotiated after this error.
    ///
    /// Unknown event tags are skipped on the wire. Oversized payloads and
    /// misuse of the command/response pairing are caught before any byte
    /// moves, so the stream stays in step for those.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            ChannelError::UnknownTag { .. }
                | ChannelError::PayloadTooLarge { .. }
                | ChannelError::NoPendingCommand
                | ChannelError::ResponsePending
                | ChannelError::EmulationEnded
        )
    }
}

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// `SessionBuilder::build` was called without a transport.
    #[error("no transport configured")]
    MissingTransport,

    /// A value such as a UID has an unsupported length.
    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Nearest accepted length
        expected: usize,
        /// Length supplied
        actual: usize,
    },

    /// See `NegotiationError`.
    #[error("negotiation failed: {0}")]
    Negotiation(#[from] NegotiationError),

    /// See `ChannelError`.
    #[error("channel error: {0}")]
    Channel(#[from] ChannelError),

    /// See `TransportError`.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
