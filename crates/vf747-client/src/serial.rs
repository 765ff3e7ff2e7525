//! Serial-port transport backed by the `serialport` crate.

use std::io::{self, Read, Write};
use std::time::Duration;

use serialport::SerialPort;

use crate::transport::Transport;

/// A transport over a physical (or virtual) serial port.
///
/// The reader speaks 8N1 at a fixed baud rate with no flow control,
/// which is the `serialport` builder's default line configuration.
pub struct SerialTransport {
    port: Box<dyn SerialPort>,
}

impl SerialTransport {
    /// Open the serial port at `path` with the given baud rate.
    pub fn open(path: &str, baud_rate: u32) -> serialport::Result<Self> {
        let port = serialport::new(path, baud_rate).open()?;
        Ok(SerialTransport { port })
    }

    /// Wrap an already-open serial port.
    pub fn from_port(port: Box<dyn SerialPort>) -> Self {
        SerialTransport { port }
    }
}

impl Transport for SerialTransport {
    fn write_all(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.port.write_all(bytes)?;
        self.port.flush()
    }

    fn read_available(&mut self, timeout: Duration) -> io::Result<Vec<u8>> {
        self.port.set_timeout(timeout).map_err(io::Error::from)?;

        let mut buf = [0u8; 256];
        match self.port.read(&mut buf) {
            Ok(n) => Ok(buf[..n].to_vec()),
            // An expired timeout is not a failure; the caller's deadline
            // decides when to give up.
            Err(err) if err.kind() == io::ErrorKind::TimedOut => Ok(Vec::new()),
            Err(err) => Err(err),
        }
    }
}
