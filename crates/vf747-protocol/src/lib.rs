//! VF747 RFID Reader Serial Protocol
//!
//! This crate provides types and utilities for talking to a VF747-class
//! RFID reader over its binary serial protocol. The reader exposes a
//! point-to-point command/response interface: the host sends a framed
//! command, the reader answers with a framed response carrying a status
//! byte and an operation payload.
//!
//! # Protocol Overview
//!
//! Each frame on the wire is delimited and checksummed, since the serial
//! link itself offers no message boundaries:
//!
//! - **Requests** (host → reader): command code plus optional parameters
//! - **Responses** (reader → host): echoed command code, status byte,
//!   and the operation payload
//!
//! This crate is pure: it builds and parses byte buffers and holds no
//! I/O. Transport handling lives in `vf747-client`.
//!
//! # Example
//!
//! ```rust,ignore
//! use vf747_protocol::{Command, FrameDecoder, ResponseFrame};
//!
//! // Build a request
//! let frame = Command::ListTagIds.encode()?;
//!
//! // Parse a response out of received bytes
//! let mut decoder = FrameDecoder::new();
//! decoder.push(&received_data);
//! if let Some(raw) = decoder.try_decode()? {
//!     let response = ResponseFrame::decode(&raw)?;
//! }
//! ```

mod commands;
mod constants;
mod error;
mod frame;
mod responses;
mod types;

pub use commands::*;
pub use constants::*;
pub use error::*;
pub use frame::*;
pub use responses::*;
pub use types::*;
