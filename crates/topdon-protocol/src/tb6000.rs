//! Messages understood by the TB6000 Pro charger.

use serde::{Deserialize, Serialize};
use serial_wire::{Decode, Decoder, Encode, Encoder, WireError};

use crate::envelope::SerialMessage;
use crate::opcode::Opcode;

/// Switches quick charge mode on or off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuickChargeCommand {
    /// Whether quick charge should be active.
    pub enabled: bool,
}

impl SerialMessage for QuickChargeCommand {
    const OPCODE: Opcode = Opcode::TB6000_PRO_QUICK_CHARGE_COMMAND;
}

impl Encode for QuickChargeCommand {
    fn encode(&self, enc: &mut Encoder) {
        enc.put_u8(u8::from(self.enabled));
    }
}

impl Decode for QuickChargeCommand {
    // Flag byte must be exactly 0 or 1; anything else is a corrupt frame.
    fn decode(dec: &mut Decoder<'_>) -> Result<Self, WireError> {
        let enabled = match dec.u8()? {
            0 => false,
            1 => true,
            value => {
                return Err(WireError::InvalidValue {
                    field: "enabled",
                    value: value.into(),
                })
            }
        };
        Ok(QuickChargeCommand { enabled })
    }
}

/// A live battery voltage sample from the charger's sense leads.
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
    const OPCODE: Opcode = Opcode::TB6000_PRO_BATTERY_VOLTAGE_NOTIFICATION;
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quick_charge_encodes_flag_byte() {
        let mut enc = Encoder::big_endian();
        QuickChargeCommand { enabled: true }.encode(&mut enc);
        assert_eq!(enc.into_bytes(), [0x01]);

        let mut enc = Encoder::big_endian();
        QuickChargeCommand { enabled: false }.encode(&mut enc);
        assert_eq!(enc.into_bytes(), [0x00]);
    }

    #[test]
    fn test_quick_charge_rejects_unknown_flag_byte() {
        let mut dec = Decoder::big_endian(&[0x02]);
        let err = QuickChargeCommand::decode(&mut dec).unwrap_err();
        assert_eq!(
            err,
            WireError::InvalidValue {
                field: "enabled",
                value: 2,
            }
        );
    }

    #[test]
    fn test_voltage_notification_round_trip() {
        let mut enc = Encoder::big_endian();
        BatteryVoltageNotification { millivolts: 12780 }.encode(&mut enc);
        let bytes = enc.into_bytes();
        assert_eq!(bytes, [0x31, 0xEC]);

        let mut dec = Decoder::big_endian(&bytes);
        let sample = BatteryVoltageNotification::decode(&mut dec).unwrap();
        assert_eq!(sample.millivolts, 12780);
        assert!((sample.volts() - 12.78).abs() < f32::EPSILON);
    }
}
