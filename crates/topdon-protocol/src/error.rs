//! Protocol error types.

use serial_wire::WireError;
use thiserror::Error;

use crate::opcode::Opcode;

/// Errors that can occur when decoding received events.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// The event is tagged with a different opcode than the requested type.
    ///
    /// `expected` is the opcode of the type the caller asked for. The event
    /// itself is intact; route it to the handler for its own opcode instead
    /// of retrying this decode.
    #[error("invalid opcode {expected}")]
    OpcodeMismatch {
        /// Opcode of the requested payload type.
        expected: Opcode,
    },

    /// The payload bytes do not match the requested type's field layout.
    #[error(transparent)]
    Wire(#[from] WireError),
}
