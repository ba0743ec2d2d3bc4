//! Messages understood by the BT20 Bluetooth battery monitor.

use serde::{Deserialize, Serialize};
use serial_wire::{Decode, Decoder, Encode, Encoder, WireError};

use crate::envelope::SerialMessage;
use crate::opcode::Opcode;

/// Asks the monitor to begin streaming [`BatteryVoltageNotification`]s.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BatteryVoltageCommand;

impl SerialMessage for BatteryVoltageCommand {
    const OPCODE: Opcode = Opcode::BT20_BATTERY_VOLTAGE_COMMAND;
}

impl Encode for BatteryVoltageCommand {
    fn encode(&self, _enc: &mut Encoder) {}
}

impl Decode for BatteryVoltageCommand {
    fn decode(_dec: &mut Decoder<'_>) -> Result<Self, WireError> {
        Ok(BatteryVoltageCommand)
    }
}

/// A live battery voltage sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BatteryVoltageNotification {
    /// Measured voltage in millivolts.
    pub millivolts: u16,
}

impl BatteryVoltageNotification {
    /// Measured voltage in volts.
    pub fn volts(&self) -> f32 {
        f32::from(self.millivolts) / 1000.0
    }
}

impl SerialMessage for BatteryVoltageNotification {
    const OPCODE: Opcode = Opcode::BT20_BATTERY_VOLTAGE_NOTIFICATION;
}

impl Encode for BatteryVoltageNotification {
    fn encode(&self, enc: &mut Encoder) {
        enc.put_u16(self.millivolts);
    }
}

impl Decode for BatteryVoltageNotification {
    fn decode(dec: &mut Decoder<'_>) -> Result<Self, WireError> {
        Ok(BatteryVoltageNotification {
            millivolts: dec.u16()?,
        })
    }
}

/// Sets how often the monitor records a sample to its standalone log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LoggingIntervalCommand {
    /// Interval between logged samples, in seconds.
    pub seconds: u16,
}

impl SerialMessage for LoggingIntervalCommand {
    const OPCODE: Opcode = Opcode::BT20_LOGGING_INTERVAL_COMMAND;
}

impl Encode for LoggingIntervalCommand {
    fn encode(&self, enc: &mut Encoder) {
        enc.put_u16(self.seconds);
    }
}

impl Decode for LoggingIntervalCommand {
    fn decode(dec: &mut Decoder<'_>) -> Result<Self, WireError> {
        Ok(LoggingIntervalCommand {
            seconds: dec.u16()?,
        })
    }
}

/// Requests the firmware version.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VersionCommand;

impl SerialMessage for VersionCommand {
    const OPCODE: Opcode = Opcode::BT20_VERSION_COMMAND;
}

impl Encode for VersionCommand {
    fn encode(&self, _enc: &mut Encoder) {}
}

impl Decode for VersionCommand {
    fn decode(_dec: &mut Decoder<'_>) -> Result<Self, WireError> {
        Ok(VersionCommand)
    }
}
