//! Topdon Serial Message Protocol
//!
//! This crate provides types for exchanging binary commands and events with
//! Topdon battery-monitoring accessories (the BT20 monitor and the TB6000
//! Pro charger) over a serial or Bluetooth LE link. Every message kind the
//! firmware understands is identified by a 32-bit [`Opcode`]; a frame body
//! is the opcode followed by the message's big-endian payload fields.
//!
//! # Protocol Overview
//!
//! Messages flow in two directions:
//!
//! - **Commands** (host → accessory): a typed payload wrapped in a
//!   [`Command`] envelope, which derives the opcode from the payload type so
//!   the two can never disagree.
//! - **Events** (accessory → host): an opcode plus undecoded payload bytes
//!   wrapped in an [`Event`] envelope. The caller asks for a concrete type
//!   with [`Event::decode`], which checks the opcode before touching the
//!   payload.
//!
//! # Example
//!
//! ```rust,ignore
//! use topdon_protocol::{bt20, Command, Event};
//!
//! // Build a command
//! let cmd = Command::new(bt20::BatteryVoltageCommand);
//! let body = serial_wire::encode_body(&cmd);
//!
//! // Decode a received event
//! let event: Event = serial_wire::decode_body(&received_body)?;
//! let sample: bt20::BatteryVoltageNotification = event.decode()?;
//! println!("battery at {:.2} V", sample.volts());
//! ```

pub mod bt20;
mod envelope;
mod error;
mod opcode;
pub mod tb6000;

pub use envelope::*;
pub use error::*;
pub use opcode::*;

pub use serial_wire::{Decode, Encode, WireError};
