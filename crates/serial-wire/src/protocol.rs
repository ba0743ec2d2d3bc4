//! Protocol family contracts consumed by transports.
//!
//! A transport carries frames for more than one accessory family over the
//! same link. Each family provides a command type and an event type
//! implementing the role traits here; the transport serializes outbound
//! commands with [`encode_body`] and routes inbound frame bodies to the
//! owning family's event constructor with [`decode_body`], keyed by the
//! [`ProtocolFamily`] tag.
//!
//! A frame body is always the 4-byte big-endian opcode followed by the
//! payload's own encoded fields:
//!
//! ```text
//! +-----------------+---------------------+
//! | opcode (4, BE)  | payload fields      |
//! +-----------------+---------------------+
//! ```

use bytes::{BufMut, Bytes};

use crate::error::WireError;

/// Size of the opcode prefix on every frame body.
pub const OPCODE_SIZE: usize = 4;

/// Tag identifying which accessory family's message set a frame belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProtocolFamily {
    /// Topdon battery monitor accessories (BT20, TB6000 Pro).
    Topdon,
}

/// Outbound role: a message the transport can serialize as an
/// (opcode, payload) pair.
pub trait ProtocolCommand {
    /// Family whose opcode space this command belongs to.
    const FAMILY: ProtocolFamily;

    /// Raw 32-bit opcode tagging this message on the wire.
    fn wire_opcode(&self) -> u32;

    /// The payload's encoded field bytes, without the opcode prefix.
    fn payload_bytes(&self) -> Vec<u8>;
}

/// Inbound role: the type a family's demultiplexed frame bodies become.
pub trait ProtocolEvent: Sized {
    /// Family whose opcode space this event belongs to.
    const FAMILY: ProtocolFamily;

    /// Build the event from a demultiplexed frame body.
    fn from_parts(opcode: u32, payload: Bytes) -> Self;
}

/// Serialize a command into a frame body.
pub fn encode_body<C: ProtocolCommand>(command: &C) -> Vec<u8> {
    let payload = command.payload_bytes();
    let mut buf = Vec::with_capacity(OPCODE_SIZE + payload.len());
    buf.put_u32(command.wire_opcode());
    buf.extend_from_slice(&payload);
    buf
}

/// Split a received frame body into its opcode and payload.
///
/// Fails with [`WireError::Truncated`] when the body is too short to carry
/// an opcode.
pub fn decode_body<E: ProtocolEvent>(body: &[u8]) -> Result<E, WireError> {
    if body.len() < OPCODE_SIZE {
        return Err(WireError::Truncated {
            expected: OPCODE_SIZE,
            actual: body.len(),
        });
    }
    let opcode = u32::from_be_bytes([body[0], body[1], body[2], body[3]]);
    let payload = Bytes::copy_from_slice(&body[OPCODE_SIZE..]);
    log::trace!(
        "{:?} frame body: opcode 0x{:08X}, {} payload bytes",
        E::FAMILY,
        opcode,
        payload.len()
    );
    Ok(E::from_parts(opcode, payload))
}
