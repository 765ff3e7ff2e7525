//! Blocking client for VF747-class RFID readers.
//!
//! Drives the `vf747-protocol` frame codec over a caller-supplied
//! [`Transport`]: one command per call, blocking until a complete valid
//! frame arrives or the configured deadline elapses. No cross-call
//! state is retained; each call is an independent transaction, and a
//! timed-out call's stale bytes are skipped by the next call's
//! start-byte scan.
//!
//! The serial link is assumed half-duplex at the protocol level, so one
//! client instance must be used from one logical owner at a time; the
//! client itself keeps no internal queue.
//!
//! # Example
//!
//! ```rust,ignore
//! use vf747_client::{ProtocolClient, SerialTransport};
//!
//! let transport = SerialTransport::open("/dev/ttyUSB0", 57600)?;
//! let mut client = ProtocolClient::new(transport);
//! for tag in &client.list_tag_ids()?.tags {
//!     println!("{}", tag.to_hex());
//! }
//! ```

mod client;
mod error;
mod mock;
#[cfg(feature = "serial")]
mod serial;
mod transport;

pub use client::*;
pub use error::*;
pub use mock::*;
#[cfg(feature = "serial")]
pub use serial::*;
pub use transport::*;
