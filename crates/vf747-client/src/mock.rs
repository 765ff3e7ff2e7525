//! Scripted transport for tests and offline development.

use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use crate::transport::Transport;

/// A transport that replays scripted read chunks and records writes.
///
/// Reads pop one scripted chunk per call, so chunk boundaries model the
/// arbitrary fragmentation of a real serial link. When the script runs
/// out, reads return empty until the caller's deadline gives up.
#[derive(Debug, Default)]
pub struct MockTransport {
    written: Vec<Vec<u8>>,
    reads: VecDeque<io::Result<Vec<u8>>>,
    write_error: Option<io::ErrorKind>,
}

impl MockTransport {
    /// Create a mock with an empty read script.
    pub fn new() -> Self {
        MockTransport::default()
    }

    /// Queue a chunk of bytes to be returned by one future read.
    pub fn push_read(&mut self, chunk: &[u8]) {
        self.reads.push_back(Ok(chunk.to_vec()));
    }

    /// Queue an I/O error to be returned by one future read.
    pub fn push_read_error(&mut self, kind: io::ErrorKind) {
        self.reads.push_back(Err(io::Error::new(kind, "scripted read error")));
    }

    /// Make every write fail with the given error kind.
    pub fn fail_writes(&mut self, kind: io::ErrorKind) {
        self.write_error = Some(kind);
    }

    /// Frames written so far, one entry per write call.
    pub fn written(&self) -> &[Vec<u8>] {
        &self.written
    }
}

impl Transport for MockTransport {
    fn write_all(&mut self, bytes: &[u8]) -> io::Result<()> {
        if let Some(kind) = self.write_error {
            return Err(io::Error::new(kind, "scripted write error"));
        }
        self.written.push(bytes.to_vec());
        Ok(())
    }

    fn read_available(&mut self, _timeout: Duration) -> io::Result<Vec<u8>> {
        match self.reads.pop_front() {
            Some(result) => result,
            None => Ok(Vec::new()),
        }
    }
}
