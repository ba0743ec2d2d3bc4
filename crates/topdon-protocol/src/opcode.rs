//! Message opcodes.
//!
//! Each message kind the accessory firmware understands is tagged with a
//! fixed 32-bit opcode. Opcodes are constants baked into the firmware, never
//! computed from payload content; the registry below grows as new accessory
//! variants are supported without ever touching existing entries.

use std::fmt;

use serde::{Deserialize, Serialize};

/// 32-bit tag identifying a message kind understood by accessory firmware.
///
/// Two opcodes are equal exactly when their raw values are. The `Display`
/// form (`0x` + 8 uppercase hex digits) is for diagnostics only; putting the
/// opcode on the wire is the transport's job.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Opcode(u32);

impl Opcode {
    /// BT20: request the live battery voltage stream.
    pub const BT20_BATTERY_VOLTAGE_COMMAND: Opcode = Opcode(0xFFF2_DD02);
    /// BT20: live battery voltage sample.
    pub const BT20_BATTERY_VOLTAGE_NOTIFICATION: Opcode = Opcode(0xFFF0_DD03);
    /// BT20: set the standalone logging interval.
    pub const BT20_LOGGING_INTERVAL_COMMAND: Opcode = Opcode(0xFFF6_DD0B);
    /// BT20: request the firmware version.
    pub const BT20_VERSION_COMMAND: Opcode = Opcode(0xFFF8_DD09);
    /// TB6000 Pro: toggle quick charge mode.
    pub const TB6000_PRO_QUICK_CHARGE_COMMAND: Opcode = Opcode(0xFFF8_BF11);
    /// TB6000 Pro: live battery voltage sample.
    pub const TB6000_PRO_BATTERY_VOLTAGE_NOTIFICATION: Opcode = Opcode(0xFFE5_BF12);

    /// Create an opcode from its raw wire value.
    pub const fn new(raw: u32) -> Self {
        Opcode(raw)
    }

    /// The raw 32-bit wire value.
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for Opcode {
    fn from(raw: u32) -> Self {
        Opcode(raw)
    }
}

impl From<Opcode> for u32 {
    fn from(opcode: Opcode) -> Self {
        opcode.0
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08X}", self.0)
    }
}

impl fmt::Debug for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Opcode(0x{:08X})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    use super::*;

    fn hash_of(opcode: Opcode) -> u64 {
        let mut hasher = DefaultHasher::new();
        opcode.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_display_is_fixed_width_uppercase_hex() {
        assert_eq!(
            Opcode::new(0xFFF2DD02).to_string(),
            "0xFFF2DD02"
        );
        // Small values are zero-padded to 8 digits.
        assert_eq!(Opcode::new(0x2).to_string(), "0x00000002");
    }

    #[test]
    fn test_equality_and_hash_follow_raw_value() {
        let a = Opcode::new(0xFFF0DD03);
        let b = Opcode::new(0xFFF0DD03);
        let c = Opcode::new(0xFFF8DD09);

        assert_eq!(a, b);
        assert_eq!(hash_of(a), hash_of(b));
        assert_ne!(a, c);
    }

    #[test]
    fn test_raw_value_round_trip() {
        let opcode = Opcode::from(0xFFF8BF11);
        assert_eq!(opcode.raw(), 0xFFF8BF11);
        assert_eq!(u32::from(opcode), 0xFFF8BF11);
    }

    #[test]
    fn test_registry_values_match_firmware() {
        assert_eq!(Opcode::BT20_BATTERY_VOLTAGE_COMMAND.raw(), 0xFFF2DD02);
        assert_eq!(Opcode::BT20_BATTERY_VOLTAGE_NOTIFICATION.raw(), 0xFFF0DD03);
        assert_eq!(Opcode::BT20_LOGGING_INTERVAL_COMMAND.raw(), 0xFFF6DD0B);
        assert_eq!(Opcode::BT20_VERSION_COMMAND.raw(), 0xFFF8DD09);
        assert_eq!(Opcode::TB6000_PRO_QUICK_CHARGE_COMMAND.raw(), 0xFFF8BF11);
        assert_eq!(
            Opcode::TB6000_PRO_BATTERY_VOLTAGE_NOTIFICATION.raw(),
            0xFFE5BF12
        );
    }
}
