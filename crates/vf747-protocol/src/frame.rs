//! Frame encoding/decoding utilities.
//!
//! The reader protocol uses a length-prefixed, checksummed frame as the
//! only unit of exchange on the wire:
//!
//! ```text
//! +-------+--------+---------+----------------+----------+-------+
//! | START | LENGTH | COMMAND | PAYLOAD[0..N]  | CHECKSUM |  END  |
//! | 0x02  | 1+N    | 1 byte  | N bytes        | 1 byte   | 0x03  |
//! +-------+--------+---------+----------------+----------+-------+
//! ```
//!
//! LENGTH covers the command byte plus the payload. CHECKSUM is the sum
//! of the command byte and all payload bytes, modulo 256. The serial
//! link offers no message boundaries of its own, so the parser scans
//! for the start byte and skips any preceding noise (stale bytes from a
//! timed-out exchange, partial reads).

use bytes::{Buf, BytesMut};

use crate::constants::*;
use crate::error::ProtocolError;

/// A frame lifted off the wire: command byte and payload, with framing
/// and checksum already stripped and verified.
///
/// The command byte is left raw here; mapping it into the closed
/// [`CommandCode`](crate::CommandCode) enumeration happens when the
/// response is decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFrame {
    /// Command code byte.
    pub command: u8,
    /// Frame payload (for responses: status byte plus operation data).
    pub payload: Vec<u8>,
}

/// Compute the frame checksum: command plus payload bytes, modulo 256.
pub fn checksum(command: u8, payload: &[u8]) -> u8 {
    payload.iter().fold(command, |acc, b| acc.wrapping_add(*b))
}

/// Build a complete wire frame for a command and payload.
///
/// Fails only when the payload exceeds the reader's limit.
pub fn build_frame(command: u8, payload: &[u8]) -> Result<Vec<u8>, ProtocolError> {
    if payload.len() > MAX_PAYLOAD_LEN {
        return Err(ProtocolError::PayloadTooLarge {
            max: MAX_PAYLOAD_LEN,
            actual: payload.len(),
        });
    }

    let mut buf = Vec::with_capacity(payload.len() + FRAME_OVERHEAD + 1);
    buf.push(FRAME_START);
    buf.push((1 + payload.len()) as u8);
    buf.push(command);
    buf.extend_from_slice(payload);
    buf.push(checksum(command, payload));
    buf.push(FRAME_END);
    Ok(buf)
}

/// Parse one frame out of `buf`, skipping noise before the start byte.
///
/// Fails with `FrameNotFound` when no start byte appears within the
/// scan window, and with `Truncated` when the buffer holds less than
/// the length field demands (the caller should re-read and retry).
pub fn parse_frame(buf: &[u8]) -> Result<RawFrame, ProtocolError> {
    parse_frame_at(buf).map(|(frame, _)| frame)
}

/// Parse one frame and report how many bytes it consumed from the front
/// of the buffer, noise prefix included.
fn parse_frame_at(buf: &[u8]) -> Result<(RawFrame, usize), ProtocolError> {
    let window = buf.len().min(MAX_SCAN_WINDOW);
    let start = buf[..window]
        .iter()
        .position(|&b| b == FRAME_START)
        .ok_or(ProtocolError::FrameNotFound { scanned: window })?;

    let frame = &buf[start..];
    if frame.len() < 2 {
        return Err(ProtocolError::Truncated {
            expected: MIN_FRAME_LEN,
            actual: frame.len(),
        });
    }

    let length = frame[1] as usize;
    if length == 0 {
        return Err(ProtocolError::InvalidData("zero length field".to_string()));
    }

    // start + length + (command + payload) + checksum + end
    let total = length + FRAME_OVERHEAD;
    if frame.len() < total {
        return Err(ProtocolError::Truncated {
            expected: total,
            actual: frame.len(),
        });
    }

    let command = frame[2];
    let payload = &frame[3..2 + length];

    let expected = checksum(command, payload);
    let actual = frame[2 + length];
    if actual != expected {
        return Err(ProtocolError::ChecksumMismatch { expected, actual });
    }

    let end = frame[3 + length];
    if end != FRAME_END {
        return Err(ProtocolError::InvalidFrameEnd(end));
    }

    Ok((
        RawFrame {
            command,
            payload: payload.to_vec(),
        },
        start + total,
    ))
}

/// Incremental frame decoder over an accumulating byte buffer.
///
/// Serial reads deliver arbitrary chunk sizes, so callers `push` each
/// chunk and poll `try_decode` until a complete frame turns up.
#[derive(Debug, Default)]
pub struct FrameDecoder {
    /// Buffer for accumulating incoming data.
    buffer: BytesMut,
}

impl FrameDecoder {
    /// Create a new frame decoder.
    pub fn new() -> Self {
        FrameDecoder {
            buffer: BytesMut::with_capacity(MAX_SCAN_WINDOW),
        }
    }

    /// Add received data to the buffer.
    pub fn push(&mut self, data: &[u8]) {
        self.buffer.extend_from_slice(data);
    }

    /// Try to decode a complete frame from the buffer.
    ///
    /// Returns `Ok(Some(frame))` when a complete, valid frame is
    /// available (consuming it and any noise before it), `Ok(None)` when
    /// more data is needed, or `Err` when the buffered bytes can no
    /// longer become a valid frame.
    pub fn try_decode(&mut self) -> Result<Option<RawFrame>, ProtocolError> {
        match parse_frame_at(&self.buffer) {
            Ok((frame, consumed)) => {
                self.buffer.advance(consumed);
                log::trace!(
                    "decoded frame: command=0x{:02X} payload_len={}",
                    frame.command,
                    frame.payload.len()
                );
                Ok(Some(frame))
            }
            Err(err) if err.is_incomplete() => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Get the number of buffered bytes.
    pub fn buffered_len(&self) -> usize {
        self.buffer.len()
    }

    /// Get the buffered bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.buffer
    }

    /// Clear the buffer.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_frame_layout() {
        let frame = build_frame(CMD_LIST_TAG_IDS, &[]).expect("should build");
        assert_eq!(frame, vec![FRAME_START, 0x01, CMD_LIST_TAG_IDS, 0x01, FRAME_END]);
    }

    #[test]
    fn test_build_frame_with_payload() {
        let frame = build_frame(0x10, &[0x20, 0x30]).expect("should build");
        assert_eq!(frame[1], 0x03); // command + 2 payload bytes
        assert_eq!(frame[frame.len() - 2], 0x60); // 0x10 + 0x20 + 0x30
    }

    #[test]
    fn test_checksum_wraps() {
        assert_eq!(checksum(0xFF, &[0x02]), 0x01);
    }

    #[test]
    fn test_round_trip() {
        let payload = [0x00, 0x01, 0x02, 0xFE];
        let frame = build_frame(CMD_GET_READER_INFO, &payload).expect("should build");

        let parsed = parse_frame(&frame).expect("should parse");
        assert_eq!(parsed.command, CMD_GET_READER_INFO);
        assert_eq!(parsed.payload, payload);
    }

    #[test]
    fn test_payload_too_large() {
        let payload = vec![0u8; MAX_PAYLOAD_LEN + 1];
        let err = build_frame(CMD_LIST_TAG_IDS, &payload).unwrap_err();
        assert_eq!(
            err,
            ProtocolError::PayloadTooLarge {
                max: MAX_PAYLOAD_LEN,
                actual: MAX_PAYLOAD_LEN + 1
            }
        );
    }

    #[test]
    fn test_max_payload_accepted() {
        let payload = vec![0u8; MAX_PAYLOAD_LEN];
        let frame = build_frame(CMD_LIST_TAG_IDS, &payload).expect("should build");
        let parsed = parse_frame(&frame).expect("should parse");
        assert_eq!(parsed.payload.len(), MAX_PAYLOAD_LEN);
    }

    #[test]
    fn test_checksum_sensitivity() {
        // Flipping any single payload byte must fail the checksum.
        let payload = [0x11, 0x22, 0x33, 0x44];
        let frame = build_frame(CMD_LIST_TAG_IDS, &payload).expect("should build");

        for i in 0..payload.len() {
            let mut corrupted = frame.clone();
            corrupted[3 + i] ^= 0x01;
            let err = parse_frame(&corrupted).unwrap_err();
            assert!(
                matches!(err, ProtocolError::ChecksumMismatch { .. }),
                "flipping payload byte {} gave {:?}",
                i,
                err
            );
        }
    }

    #[test]
    fn test_truncated_prefixes_never_parse() {
        let frame = build_frame(CMD_LIST_TAG_IDS, &[0x00, 0x02, 0xAA, 0xBB]).expect("should build");

        for cut in 1..frame.len() {
            let err = parse_frame(&frame[..cut]).unwrap_err();
            assert!(
                matches!(err, ProtocolError::Truncated { .. }),
                "prefix of {} bytes gave {:?}",
                cut,
                err
            );
        }
    }

    #[test]
    fn test_resync_past_garbage() {
        let frame = build_frame(CMD_LIST_TAG_IDS, &[0x00, 0x00]).expect("should build");
        let mut stream = vec![0xAA, 0x55, 0xFF, 0xF0];
        stream.extend_from_slice(&frame);

        let parsed = parse_frame(&stream).expect("should parse past garbage");
        assert_eq!(parsed.command, CMD_LIST_TAG_IDS);
        assert_eq!(parsed.payload, vec![0x00, 0x00]);
    }

    #[test]
    fn test_frame_not_found() {
        let err = parse_frame(&[0xAA; 16]).unwrap_err();
        assert_eq!(err, ProtocolError::FrameNotFound { scanned: 16 });
        assert!(err.is_incomplete());
    }

    #[test]
    fn test_scan_window_bounded() {
        // A full window of noise is final even if a frame follows it.
        let frame = build_frame(CMD_LIST_TAG_IDS, &[]).expect("should build");
        let mut stream = vec![0xFFu8; MAX_SCAN_WINDOW];
        stream.extend_from_slice(&frame);

        let err = parse_frame(&stream).unwrap_err();
        assert_eq!(
            err,
            ProtocolError::FrameNotFound {
                scanned: MAX_SCAN_WINDOW
            }
        );
        assert!(!err.is_incomplete());
    }

    #[test]
    fn test_bad_end_byte() {
        let mut frame = build_frame(CMD_LIST_TAG_IDS, &[0x00]).expect("should build");
        let last = frame.len() - 1;
        frame[last] = 0x7E;
        let err = parse_frame(&frame).unwrap_err();
        assert_eq!(err, ProtocolError::InvalidFrameEnd(0x7E));
    }

    #[test]
    fn test_decoder_partial_then_complete() {
        let frame = build_frame(CMD_LIST_TAG_IDS, &[0x00, 0x01, 0xAB]).expect("should build");
        let mut decoder = FrameDecoder::new();

        decoder.push(&frame[..3]);
        assert!(decoder.try_decode().expect("no hard error").is_none());

        decoder.push(&frame[3..]);
        let parsed = decoder.try_decode().expect("no hard error").expect("frame");
        assert_eq!(parsed.command, CMD_LIST_TAG_IDS);
        assert_eq!(decoder.buffered_len(), 0);
    }

    #[test]
    fn test_decoder_multiple_frames() {
        let first = build_frame(CMD_LIST_TAG_IDS, &[0x00]).expect("should build");
        let second = build_frame(CMD_GET_READER_INFO, &[0x00, 0x01]).expect("should build");

        let mut decoder = FrameDecoder::new();
        decoder.push(&first);
        decoder.push(&second);

        let a = decoder.try_decode().expect("no hard error").expect("frame");
        assert_eq!(a.command, CMD_LIST_TAG_IDS);
        let b = decoder.try_decode().expect("no hard error").expect("frame");
        assert_eq!(b.command, CMD_GET_READER_INFO);
        assert!(decoder.try_decode().expect("no hard error").is_none());
    }

    #[test]
    fn test_decoder_surfaces_checksum_error() {
        let mut frame = build_frame(CMD_LIST_TAG_IDS, &[0x00, 0x07]).expect("should build");
        frame[4] ^= 0xFF;

        let mut decoder = FrameDecoder::new();
        decoder.push(&frame);
        let err = decoder.try_decode().unwrap_err();
        assert!(matches!(err, ProtocolError::ChecksumMismatch { .. }));
    }
}
