//! Generic serial-port protocol wire layer.
//!
//! Several accessory families speak the same style of protocol over a serial
//! or Bluetooth LE link: each frame body starts with a fixed-width opcode
//! identifying the message kind, followed by the message's fields encoded as
//! fixed-width integers. This crate provides the pieces shared by all of
//! them:
//!
//! - a structured field codec ([`Encoder`]/[`Decoder`]) with an explicit
//!   byte order, and the [`Encode`]/[`Decode`] traits payload types implement
//! - the [`ProtocolFamily`] tag and the [`ProtocolCommand`]/[`ProtocolEvent`]
//!   role contracts a transport uses to serialize outbound messages and
//!   route inbound frame bodies to the right family's event type
//!
//! Framing below the body level (delimiters, checksums, retransmission) is
//! the transport's own concern and does not appear here.

mod codec;
mod error;
mod protocol;

pub use codec::*;
pub use error::*;
pub use protocol::*;
