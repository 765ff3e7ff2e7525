//! Protocol constants
//!
//! Command codes, status codes, and framing values for the VF747 serial
//! protocol. The byte-level layout is reconstructed from common low-cost
//! reader firmware conventions and must be validated against the real
//! device documentation before production use.

// ============================================================================
// Framing
// ============================================================================

/// Start-of-frame marker.
pub const FRAME_START: u8 = 0x02;
/// End-of-frame marker.
pub const FRAME_END: u8 = 0x03;
/// Bytes of framing around the length field's coverage:
/// start, length, checksum, end.
pub const FRAME_OVERHEAD: usize = 4;
/// Smallest possible frame: start, length, command, checksum, end.
pub const MIN_FRAME_LEN: usize = 5;
/// Maximum command payload accepted by the reader.
pub const MAX_PAYLOAD_LEN: usize = 250;
/// How far the parser scans for a start byte before giving up.
///
/// Bytes arriving after a timed-out call are stale noise; the scan is
/// bounded so a stream with no frame in it fails instead of buffering
/// forever.
pub const MAX_SCAN_WINDOW: usize = 256;

// ============================================================================
// Command Codes (host → reader)
// ============================================================================

/// List the identifiers of all tags currently visible to the reader.
pub const CMD_LIST_TAG_IDS: u8 = 0x01;
/// Query reader firmware and model information.
pub const CMD_GET_READER_INFO: u8 = 0x02;

// ============================================================================
// Status Codes (first payload byte of every response)
// ============================================================================

/// Command completed successfully.
pub const STATUS_OK: u8 = 0x00;
/// Command understood but failed on the device.
pub const STATUS_COMMAND_FAILED: u8 = 0x01;
/// Antenna fault detected during inventory.
pub const STATUS_ANTENNA_FAULT: u8 = 0x02;
/// Reader is mid-inventory and cannot accept the command.
pub const STATUS_INVENTORY_BUSY: u8 = 0x03;
/// Command code not supported by this firmware.
pub const STATUS_UNSUPPORTED_CMD: u8 = 0x04;

// ============================================================================
// Sizes
// ============================================================================

/// Default tag identifier width in bytes. The actual width depends on
/// the tag population (typically 8-12 bytes) and is client-configurable.
pub const DEFAULT_TAG_ID_WIDTH: usize = 8;
