//! Command and event envelopes.
//!
//! An outbound [`Command`] pairs a typed payload with the opcode belonging
//! to its type; an inbound [`Event`] pairs an opcode with payload bytes
//! whose concrete type the caller has not yet committed to. Both are plain
//! immutable values created per message and discarded after transmission or
//! decode; neither performs I/O.

use std::fmt;

use bytes::Bytes;
use serial_wire::{Decode, Decoder, Encode, Encoder, ProtocolCommand, ProtocolEvent, ProtocolFamily};

use crate::error::ProtocolError;
use crate::opcode::Opcode;

/// Marker binding a message type to the one opcode that tags it on the wire.
///
/// The association is per type, not per instance: the envelope layer reads
/// it at compile time, so an opcode can never be supplied independently of
/// the payload it tags.
pub trait SerialMessage {
    /// Opcode tagging this message kind.
    const OPCODE: Opcode;
}

/// An outbound message: a typed payload tagged with its opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Command<T> {
    opcode: Opcode,
    payload: T,
}

impl<T> Command<T>
where
    T: SerialMessage + Encode,
{
    /// Wrap a payload, tagging it with `T`'s opcode.
    pub fn new(payload: T) -> Self {
        Command {
            opcode: T::OPCODE,
            payload,
        }
    }
}

impl<T> Command<T> {
    /// Opcode tagging this command.
    pub fn opcode(&self) -> Opcode {
        self.opcode
    }

    /// The typed payload.
    pub fn payload(&self) -> &T {
        &self.payload
    }

    /// Consume the envelope and return the payload.
    pub fn into_payload(self) -> T {
        self.payload
    }
}

impl<T> ProtocolCommand for Command<T>
where
    T: SerialMessage + Encode,
{
    const FAMILY: ProtocolFamily = ProtocolFamily::Topdon;

    fn wire_opcode(&self) -> u32 {
        self.opcode.raw()
    }

    fn payload_bytes(&self) -> Vec<u8> {
        let mut enc = Encoder::big_endian();
        self.payload.encode(&mut enc);
        enc.into_bytes()
    }
}

/// An inbound message: an opcode plus payload bytes not yet decoded.
///
/// Built once by the transport's demux layer; never mutated afterwards.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Event {
    opcode: Opcode,
    payload: Bytes,
}

impl Event {
    /// Wrap a received opcode and payload.
    pub fn new(opcode: Opcode, payload: impl Into<Bytes>) -> Self {
        Event {
            opcode,
            payload: payload.into(),
        }
    }

    /// Opcode tagging this event.
    pub fn opcode(&self) -> Opcode {
        self.opcode
    }

    /// The undecoded payload bytes.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Decode the payload as `T`.
    ///
    /// Fails with [`ProtocolError::OpcodeMismatch`] when this event is not
    /// tagged with `T`'s opcode; the payload codec is not consulted in that
    /// case. Field-level failures from the codec surface unchanged. Decoding
    /// never mutates the event, so it may be retried with another target
    /// type.
    pub fn decode<T>(&self) -> Result<T, ProtocolError>
    where
        T: SerialMessage + Decode,
    {
        if T::OPCODE != self.opcode {
            return Err(ProtocolError::OpcodeMismatch { expected: T::OPCODE });
        }
        log::trace!(
            "decoding event {} ({} payload bytes)",
            self.opcode,
            self.payload.len()
        );
        let mut dec = Decoder::big_endian(&self.payload);
        let value = T::decode(&mut dec)?;
        Ok(value)
    }
}

impl ProtocolEvent for Event {
    const FAMILY: ProtocolFamily = ProtocolFamily::Topdon;

    fn from_parts(opcode: u32, payload: Bytes) -> Self {
        Event::new(Opcode::new(opcode), payload)
    }
}

impl fmt::Debug for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("opcode", &self.opcode)
            .field("payload", &format_args!("{}", hex::encode(&self.payload)))
            .finish()
    }
}
