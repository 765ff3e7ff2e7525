//! Responses from the reader.

use crate::error::ProtocolError;
use crate::frame::RawFrame;
use crate::types::*;

/// A validated response frame: echoed command code, reader status, and
/// the operation payload that follows the status byte.
///
/// Parsed once from a received buffer and consumed by the typed payload
/// decoders below.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseFrame {
    /// Command this response answers.
    pub command: CommandCode,
    /// Status byte the reader reported.
    pub status: ReaderStatus,
    /// Operation payload after the status byte.
    pub payload: Vec<u8>,
}

impl ResponseFrame {
    /// Decode a raw frame into a response.
    ///
    /// Rejects unknown command and status codes at this boundary, and
    /// fails with `Reader(status)` when the reader signalled a
    /// device-side failure. The status is surfaced verbatim, never
    /// swallowed.
    pub fn decode(frame: &RawFrame) -> Result<Self, ProtocolError> {
        let command = CommandCode::from_code(frame.command)
            .ok_or(ProtocolError::UnknownCommand(frame.command))?;

        let (&status_byte, payload) =
            frame
                .payload
                .split_first()
                .ok_or(ProtocolError::Truncated {
                    expected: 1,
                    actual: 0,
                })?;

        let status =
            ReaderStatus::from_code(status_byte).ok_or(ProtocolError::UnknownStatus(status_byte))?;

        if !status.is_success() {
            return Err(ProtocolError::Reader(status));
        }

        Ok(ResponseFrame {
            command,
            status,
            payload: payload.to_vec(),
        })
    }
}

/// Decode a tag list payload: `[count][count * tag_id_width bytes]`.
///
/// The declared count and the data length must agree exactly; a
/// mismatch is a protocol error, never silently corrected. Tag order is
/// the reader's inventory order and is preserved.
pub fn decode_tag_list(
    payload: &[u8],
    tag_id_width: usize,
) -> Result<TagListResult, ProtocolError> {
    let (&count, data) = payload.split_first().ok_or(ProtocolError::MalformedTagList {
        count: 0,
        payload_len: 0,
        tag_width: tag_id_width,
    })?;

    let count = count as usize;
    if data.len() != count * tag_id_width {
        return Err(ProtocolError::MalformedTagList {
            count,
            payload_len: data.len(),
            tag_width: tag_id_width,
        });
    }

    let tags = data
        .chunks_exact(tag_id_width)
        .map(TagId::from_slice)
        .collect();

    Ok(TagListResult { count, tags })
}

/// Decode a reader info payload:
/// `[fw_major][fw_minor][model string bytes]`.
pub fn decode_reader_info(payload: &[u8]) -> Result<ReaderInfo, ProtocolError> {
    if payload.len() < 2 {
        return Err(ProtocolError::InvalidData(format!(
            "reader info payload too short: {} bytes",
            payload.len()
        )));
    }

    let model = std::str::from_utf8(&payload[2..])
        .map_err(|_| ProtocolError::InvalidUtf8)?
        .trim_end_matches('\0')
        .to_string();

    Ok(ReaderInfo {
        firmware_major: payload[0],
        firmware_minor: payload[1],
        model,
    })
}
