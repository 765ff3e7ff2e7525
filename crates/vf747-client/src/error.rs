//! Client error types.

use thiserror::Error;

use vf747_protocol::ProtocolError;

/// Errors a protocol call can fail with.
///
/// Nothing is retried internally. Only the caller knows whether a retry
/// is safe: the reader may be mid-inventory, and reissuing a command
/// could double-count tags.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The I/O layer failed. Fatal to the current call.
    #[error("transport error: {0}")]
    Transport(#[from] std::io::Error),

    /// Framing or decoding failure, propagated unchanged from the codec.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}
