//! Common types used in the protocol.

use crate::constants::*;

/// Command codes the reader understands.
///
/// Closed enumeration: an unrecognized code coming back from the reader
/// is rejected at the decoding boundary instead of being carried around
/// as a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandCode {
    /// List visible tag identifiers.
    ListTagIds,
    /// Query firmware and model information.
    GetReaderInfo,
}

impl CommandCode {
    /// Look up the command for a wire code. Returns None for codes this
    /// protocol does not define.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            CMD_LIST_TAG_IDS => Some(CommandCode::ListTagIds),
            CMD_GET_READER_INFO => Some(CommandCode::GetReaderInfo),
            _ => None,
        }
    }

    /// Get the wire code for this command.
    pub fn code(&self) -> u8 {
        match self {
            CommandCode::ListTagIds => CMD_LIST_TAG_IDS,
            CommandCode::GetReaderInfo => CMD_GET_READER_INFO,
        }
    }
}

impl From<CommandCode> for u8 {
    fn from(code: CommandCode) -> Self {
        code.code()
    }
}

/// Status byte carried as the first payload byte of every response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaderStatus {
    /// Command completed successfully.
    Success,
    /// Command understood but failed on the device.
    CommandFailed,
    /// Antenna fault detected during inventory.
    AntennaFault,
    /// Reader is mid-inventory and cannot accept the command.
    InventoryBusy,
    /// Command code not supported by this firmware.
    UnsupportedCommand,
}

impl ReaderStatus {
    /// Look up the status for a wire code. Returns None for codes this
    /// protocol does not define.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            STATUS_OK => Some(ReaderStatus::Success),
            STATUS_COMMAND_FAILED => Some(ReaderStatus::CommandFailed),
            STATUS_ANTENNA_FAULT => Some(ReaderStatus::AntennaFault),
            STATUS_INVENTORY_BUSY => Some(ReaderStatus::InventoryBusy),
            STATUS_UNSUPPORTED_CMD => Some(ReaderStatus::UnsupportedCommand),
            _ => None,
        }
    }

    /// Get the wire code for this status.
    pub fn code(&self) -> u8 {
        match self {
            ReaderStatus::Success => STATUS_OK,
            ReaderStatus::CommandFailed => STATUS_COMMAND_FAILED,
            ReaderStatus::AntennaFault => STATUS_ANTENNA_FAULT,
            ReaderStatus::InventoryBusy => STATUS_INVENTORY_BUSY,
            ReaderStatus::UnsupportedCommand => STATUS_UNSUPPORTED_CMD,
        }
    }

    /// Whether this status signals success.
    pub fn is_success(&self) -> bool {
        matches!(self, ReaderStatus::Success)
    }
}

impl From<ReaderStatus> for u8 {
    fn from(status: ReaderStatus) -> Self {
        status.code()
    }
}

impl std::fmt::Display for ReaderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReaderStatus::Success => write!(f, "success"),
            ReaderStatus::CommandFailed => write!(f, "command failed"),
            ReaderStatus::AntennaFault => write!(f, "antenna fault"),
            ReaderStatus::InventoryBusy => write!(f, "inventory busy"),
            ReaderStatus::UnsupportedCommand => write!(f, "unsupported command"),
        }
    }
}

/// An opaque, fixed-width tag identifier reported by the reader.
///
/// Never interpreted numerically; the width depends on the tag
/// population in use.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TagId(Vec<u8>);

impl TagId {
    /// Create a new tag identifier from raw bytes.
    pub fn new(bytes: Vec<u8>) -> Self {
        TagId(bytes)
    }

    /// Create from a slice.
    pub fn from_slice(slice: &[u8]) -> Self {
        TagId(slice.to_vec())
    }

    /// Get the underlying bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Get the identifier width in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the identifier is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the bytes as a hex string.
    pub fn to_hex(&self) -> String {
        hex_encode(&self.0)
    }
}

impl AsRef<[u8]> for TagId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Result of a tag inventory listing.
///
/// `tags.len() == count` always holds for a decoded result; the decoder
/// rejects payloads where the declared count and the data disagree. Tag
/// order is the reader's inventory order and is preserved end-to-end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagListResult {
    /// Number of tags the reader reported.
    pub count: usize,
    /// Tag identifiers in inventory order.
    pub tags: Vec<TagId>,
}

impl TagListResult {
    /// Whether the inventory came back empty.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Firmware and model information returned by CMD_GET_READER_INFO.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderInfo {
    /// Firmware major version.
    pub firmware_major: u8,
    /// Firmware minor version.
    pub firmware_minor: u8,
    /// Model name string.
    pub model: String,
}

impl ReaderInfo {
    /// Get the firmware version as a "major.minor" string.
    pub fn firmware_version(&self) -> String {
        format!("{}.{}", self.firmware_major, self.firmware_minor)
    }
}

/// Helper to encode bytes as hex.
fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
