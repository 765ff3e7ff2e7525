//! Transport abstraction over the serial link.

use std::io;
use std::time::Duration;

/// The capability the client needs from a serial link.
///
/// Narrow by design: any serial-port binding (or test double) can
/// implement these two methods. Port lifecycle stays with the caller;
/// the client only borrows the open link for the duration of its calls.
pub trait Transport {
    /// Blocking send of exactly the given bytes.
    fn write_all(&mut self, bytes: &[u8]) -> io::Result<()>;

    /// Return whatever bytes have arrived within the timeout, possibly
    /// empty. Must not block past the timeout.
    fn read_available(&mut self, timeout: Duration) -> io::Result<Vec<u8>>;
}
