//! Commands that can be sent to the reader.

use crate::error::ProtocolError;
use crate::frame::build_frame;
use crate::types::CommandCode;

/// Commands that can be sent to the reader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List the identifiers of all tags currently visible to the reader.
    ListTagIds,

    /// Query reader firmware and model information.
    GetReaderInfo,
}

impl Command {
    /// Get the command code for this command.
    pub fn code(&self) -> CommandCode {
        match self {
            Command::ListTagIds => CommandCode::ListTagIds,
            Command::GetReaderInfo => CommandCode::GetReaderInfo,
        }
    }

    /// Get the request payload for this command.
    pub fn payload(&self) -> Vec<u8> {
        match self {
            Command::ListTagIds => Vec::new(),
            Command::GetReaderInfo => Vec::new(),
        }
    }

    /// Encode the command into a complete wire frame.
    pub fn encode(&self) -> Result<Vec<u8>, ProtocolError> {
        build_frame(self.code().into(), &self.payload())
    }
}
