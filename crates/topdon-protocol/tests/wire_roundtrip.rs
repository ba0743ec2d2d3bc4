//! End-to-end checks of the command → frame body → event → decode path.

use serial_wire::{decode_body, encode_body, WireError, OPCODE_SIZE};
use topdon_protocol::{bt20, tb6000, Command, Event, Opcode, ProtocolError};

/// Serialize a command and demultiplex it back as an event, the way a
/// loopback transport would.
fn loopback<T>(payload: T) -> Event
where
    T: topdon_protocol::SerialMessage + topdon_protocol::Encode,
{
    let body = encode_body(&Command::new(payload));
    decode_body(&body).unwrap()
}

#[test]
fn test_body_layout_opcode_first_then_fields() {
    let body = encode_body(&Command::new(bt20::LoggingIntervalCommand { seconds: 300 }));
    assert_eq!(body, [0xFF, 0xF6, 0xDD, 0x0B, 0x01, 0x2C]);

    let body = encode_body(&Command::new(bt20::VersionCommand));
    assert_eq!(body, [0xFF, 0xF8, 0xDD, 0x09]);
    assert_eq!(body.len(), OPCODE_SIZE);
}

#[test]
fn test_round_trip_preserves_opcode_and_payload() {
    let event = loopback(bt20::BatteryVoltageNotification { millivolts: 12450 });
    assert_eq!(event.opcode(), Opcode::BT20_BATTERY_VOLTAGE_NOTIFICATION);

    let sample: bt20::BatteryVoltageNotification = event.decode().unwrap();
    assert_eq!(sample, bt20::BatteryVoltageNotification { millivolts: 12450 });
}

#[test]
fn test_round_trip_every_message_kind() {
    assert_eq!(
        loopback(bt20::BatteryVoltageCommand)
            .decode::<bt20::BatteryVoltageCommand>()
            .unwrap(),
        bt20::BatteryVoltageCommand
    );
    assert_eq!(
        loopback(bt20::LoggingIntervalCommand { seconds: 900 })
            .decode::<bt20::LoggingIntervalCommand>()
            .unwrap(),
        bt20::LoggingIntervalCommand { seconds: 900 }
    );
    assert_eq!(
        loopback(bt20::VersionCommand)
            .decode::<bt20::VersionCommand>()
            .unwrap(),
        bt20::VersionCommand
    );
    assert_eq!(
        loopback(tb6000::QuickChargeCommand { enabled: true })
            .decode::<tb6000::QuickChargeCommand>()
            .unwrap(),
        tb6000::QuickChargeCommand { enabled: true }
    );
    assert_eq!(
        loopback(tb6000::BatteryVoltageNotification { millivolts: 13020 })
            .decode::<tb6000::BatteryVoltageNotification>()
            .unwrap(),
        tb6000::BatteryVoltageNotification { millivolts: 13020 }
    );
}

#[test]
fn test_voltage_frame_decodes_only_against_its_own_type() {
    // 0xFFF0DD03 body carrying the 2-byte big-endian sample 0x0C 0x1C.
    let body = [0xFF, 0xF0, 0xDD, 0x03, 0x0C, 0x1C];
    let event: Event = decode_body(&body).unwrap();

    let sample: bt20::BatteryVoltageNotification = event.decode().unwrap();
    assert_eq!(sample.millivolts, 3100);

    let err = event.decode::<bt20::VersionCommand>().unwrap_err();
    assert_eq!(
        err,
        ProtocolError::OpcodeMismatch {
            expected: Opcode::BT20_VERSION_COMMAND,
        }
    );
}

#[test]
fn test_body_shorter_than_opcode_is_truncated() {
    let err = decode_body::<Event>(&[0xFF, 0xF0, 0xDD]).unwrap_err();
    assert_eq!(
        err,
        WireError::Truncated {
            expected: OPCODE_SIZE,
            actual: 3,
        }
    );
}

#[test]
fn test_trailing_transport_bytes_are_tolerated() {
    // Some transports append a trailer after the payload fields.
    let body = [0xFF, 0xE5, 0xBF, 0x12, 0x30, 0x39, 0x0D, 0x0A];
    let event: Event = decode_body(&body).unwrap();

    let sample: tb6000::BatteryVoltageNotification = event.decode().unwrap();
    assert_eq!(sample.millivolts, 12345);
}
