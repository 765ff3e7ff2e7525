//! Protocol error types.

use thiserror::Error;

use crate::constants::MAX_SCAN_WINDOW;
use crate::types::ReaderStatus;

/// Errors that can occur when building or parsing protocol frames.
///
/// Nothing here is retried internally; retry policy belongs to the
/// caller, who knows whether the reader's inventory state makes a retry
/// safe.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// Request payload exceeds the reader's limit.
    #[error("payload too large: maximum {max} bytes, got {actual}")]
    PayloadTooLarge {
        /// Maximum allowed payload length.
        max: usize,
        /// Actual payload length.
        actual: usize,
    },

    /// No frame start byte within the scan window.
    #[error("no frame start within {scanned} scanned bytes")]
    FrameNotFound {
        /// How many bytes were scanned.
        scanned: usize,
    },

    /// Fewer bytes available than the frame's length field demands.
    /// The caller may re-read and try again.
    #[error("truncated frame: expected at least {expected} bytes, got {actual}")]
    Truncated {
        /// Expected minimum length.
        expected: usize,
        /// Actual length available.
        actual: usize,
    },

    /// Recomputed checksum disagrees with the one on the wire. The
    /// bytes are corrupt; re-parsing them cannot help, the whole
    /// command must be reissued.
    #[error("checksum mismatch: expected 0x{expected:02X}, got 0x{actual:02X}")]
    ChecksumMismatch {
        /// Checksum recomputed over the received bytes.
        expected: u8,
        /// Checksum carried in the frame.
        actual: u8,
    },

    /// Byte after the checksum is not the end-of-frame marker.
    #[error("bad frame end byte: 0x{0:02X}")]
    InvalidFrameEnd(u8),

    /// Unknown command code.
    #[error("unknown command code: 0x{0:02X}")]
    UnknownCommand(u8),

    /// Unknown status code.
    #[error("unknown status code: 0x{0:02X}")]
    UnknownStatus(u8),

    /// The reader reported a device-side failure. Surfaced verbatim,
    /// never swallowed.
    #[error("reader error: {0}")]
    Reader(ReaderStatus),

    /// Tag list payload inconsistent with its declared count. Treated
    /// as a protocol/firmware mismatch, fatal to the call.
    #[error(
        "malformed tag list: count {count} with {payload_len} data bytes (tag width {tag_width})"
    )]
    MalformedTagList {
        /// Declared tag count.
        count: usize,
        /// Bytes following the count.
        payload_len: usize,
        /// Configured tag identifier width.
        tag_width: usize,
    },

    /// Invalid data in a frame payload.
    #[error("invalid frame data: {0}")]
    InvalidData(String),

    /// UTF-8 decoding error.
    #[error("invalid UTF-8 in string field")]
    InvalidUtf8,
}

impl ProtocolError {
    /// Whether more bytes from the link could still complete the frame.
    ///
    /// True for a truncated frame and for a missing start byte whose
    /// scan window is not yet exhausted; everything else is final.
    pub fn is_incomplete(&self) -> bool {
        match self {
            ProtocolError::Truncated { .. } => true,
            ProtocolError::FrameNotFound { scanned } => *scanned < MAX_SCAN_WINDOW,
            _ => false,
        }
    }
}
