//! Blocking request/response client.

use std::time::{Duration, Instant};

use tracing::{debug, trace};

use vf747_protocol::{
    decode_reader_info, decode_tag_list, parse_frame, Command, FrameDecoder, RawFrame, ReaderInfo,
    ResponseFrame, TagListResult, DEFAULT_TAG_ID_WIDTH,
};

use crate::error::ClientError;
use crate::transport::Transport;

/// Configuration for a protocol client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Deadline for assembling a complete response frame.
    pub read_timeout: Duration,
    /// Width in bytes of one tag identifier, as reported by this
    /// reader's tag population.
    pub tag_id_width: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            read_timeout: Duration::from_secs(1),
            tag_id_width: DEFAULT_TAG_ID_WIDTH,
        }
    }
}

/// A client driving one reader over an exclusively-owned transport.
///
/// The link is half-duplex at the protocol level: one command must
/// resolve before the next begins, which single ownership of the
/// transport enforces. Port open/close stays with the caller.
pub struct ProtocolClient<T: Transport> {
    transport: T,
    config: ClientConfig,
}

impl<T: Transport> ProtocolClient<T> {
    /// Create a client with default configuration.
    pub fn new(transport: T) -> Self {
        ProtocolClient::with_config(transport, ClientConfig::default())
    }

    /// Create a client with the given configuration.
    pub fn with_config(transport: T, config: ClientConfig) -> Self {
        ProtocolClient { transport, config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Give the transport back to the caller.
    pub fn into_transport(self) -> T {
        self.transport
    }

    /// List the identifiers of all tags currently visible to the reader.
    ///
    /// Tags come back in the reader's inventory order, which generally
    /// reflects antenna scan order and is preserved as-is.
    pub fn list_tag_ids(&mut self) -> Result<TagListResult, ClientError> {
        let response = self.execute(Command::ListTagIds)?;
        let result = decode_tag_list(&response.payload, self.config.tag_id_width)?;
        debug!(count = result.count, "inventory complete");
        Ok(result)
    }

    /// Query reader firmware and model information.
    pub fn reader_info(&mut self) -> Result<ReaderInfo, ClientError> {
        let response = self.execute(Command::GetReaderInfo)?;
        Ok(decode_reader_info(&response.payload)?)
    }

    /// Run one command/response transaction.
    ///
    /// No cross-call state: a timed-out call discards its partial
    /// buffer, and the next call's start-byte scan skips whatever stale
    /// bytes arrive late.
    fn execute(&mut self, command: Command) -> Result<ResponseFrame, ClientError> {
        let frame = command.encode()?;
        trace!(command = ?command, len = frame.len(), "sending request frame");
        self.transport.write_all(&frame)?;

        let raw = self.read_frame()?;
        Ok(ResponseFrame::decode(&raw)?)
    }

    /// Accumulate reads until a complete frame is assembled or the
    /// configured deadline elapses.
    ///
    /// The serial layer delivers arbitrary chunk sizes, so partial
    /// reads are the normal case, not an error.
    fn read_frame(&mut self) -> Result<RawFrame, ClientError> {
        let deadline = Instant::now() + self.config.read_timeout;
        let mut decoder = FrameDecoder::new();

        loop {
            let now = Instant::now();
            if now >= deadline {
                // Surface what the final parse attempt saw: Truncated
                // for a partial frame, FrameNotFound when no start byte
                // ever arrived.
                return match parse_frame(decoder.as_slice()) {
                    Ok(frame) => Ok(frame),
                    Err(err) => Err(err.into()),
                };
            }

            let chunk = self.transport.read_available(deadline - now)?;
            if !chunk.is_empty() {
                trace!(len = chunk.len(), "received chunk");
                decoder.push(&chunk);
            }

            if let Some(frame) = decoder.try_decode()? {
                return Ok(frame);
            }
        }
    }
}
