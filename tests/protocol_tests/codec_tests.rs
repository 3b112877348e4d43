//! Codec Tests
//!
//! Tests for command frame encoding and reply classification.

use std::io::Cursor;
use std::time::Duration;

use projctl::catalog;
use projctl::protocol::{
    decode_reply, encode_command, escape_frame, hex_frame, read_reply, DeviceId,
    TransactionResult, MAX_REPLY_SIZE,
};
use projctl::ProjectorError;

// =============================================================================
// Command Encoding Tests
// =============================================================================

#[test]
fn test_encode_power_query() {
    let frame = encode_command(DeviceId::BROADCAST, "124", Some("1")).unwrap();
    assert_eq!(frame.as_bytes(), b"~00124 1\r");
}

#[test]
fn test_encode_without_argument() {
    let id = DeviceId::new(5).unwrap();
    let frame = encode_command(id, "150", None).unwrap();
    assert_eq!(frame.as_bytes(), b"~05150\r");
}

#[test]
fn test_encode_every_device_id() {
    for n in 0..=99u8 {
        let id = DeviceId::new(n).unwrap();
        let frame = encode_command(id, "21", Some("8")).unwrap();
        let expected = format!("~{:02}21 8\r", n);
        assert_eq!(frame.as_bytes(), expected.as_bytes(), "device id {}", n);
    }
}

#[test]
fn test_encode_every_catalog_query() {
    for feature in catalog::FEATURES {
        let Some(query) = feature.query else { continue };
        let frame = encode_command(DeviceId::BROADCAST, query.opcode, Some(query.arg)).unwrap();
        let text = String::from_utf8(frame.as_bytes().to_vec()).unwrap();

        assert!(text.starts_with("~00"), "{}: {:?}", feature.name, text);
        assert!(text.ends_with('\r'), "{}: {:?}", feature.name, text);
        assert_eq!(text.matches('\r').count(), 1, "{}: {:?}", feature.name, text);
    }
}

#[test]
fn test_encode_rejects_empty_opcode() {
    let err = encode_command(DeviceId::BROADCAST, "", Some("1")).unwrap_err();
    assert!(matches!(err, ProjectorError::InvalidArgument { .. }));
}

#[test]
fn test_encode_rejects_embedded_terminator() {
    let err = encode_command(DeviceId::BROADCAST, "21", Some("8\r")).unwrap_err();
    assert!(matches!(err, ProjectorError::InvalidArgument { .. }));
}

#[test]
fn test_device_id_bounds() {
    assert!(DeviceId::new(99).is_ok());
    assert!(DeviceId::new(100).is_err());
    assert_eq!("7".parse::<DeviceId>().unwrap().to_string(), "07");
    assert!("100".parse::<DeviceId>().is_err());
    assert!("ab".parse::<DeviceId>().is_err());
}

// =============================================================================
// Reply Classification Tests
// =============================================================================

#[test]
fn test_decode_success() {
    assert_eq!(decode_reply(b"P\r"), TransactionResult::Success);
}

#[test]
fn test_decode_failure() {
    assert_eq!(decode_reply(b"F\r"), TransactionResult::Failure { raw: None });
}

#[test]
fn test_decode_data() {
    assert_eq!(
        decode_reply(b"Ok1\r"),
        TransactionResult::SuccessWithData("1".to_string())
    );
    assert_eq!(
        decode_reply(b"Ok\r"),
        TransactionResult::SuccessWithData(String::new())
    );
}

#[test]
fn test_decode_unrecognised_keeps_raw_bytes() {
    match decode_reply(b"Hello\r") {
        TransactionResult::Failure { raw: Some(raw) } => assert_eq!(raw, b"Hello\r"),
        other => panic!("Expected malformed failure, got {:?}", other),
    }
}

#[test]
fn test_decode_invalid_utf8_payload_is_malformed() {
    assert!(matches!(
        decode_reply(b"Ok\xff\xfe\r"),
        TransactionResult::Failure { raw: Some(_) }
    ));
}

// =============================================================================
// Stream Reading Tests
// =============================================================================

#[test]
fn test_read_reply_stops_at_terminator() {
    let mut reader = Cursor::new(b"Ok7\rP\r".to_vec());
    let reply = read_reply(&mut reader, Duration::from_millis(100)).unwrap().unwrap();
    assert_eq!(&reply[..], b"Ok7\r");
}

#[test]
fn test_read_reply_eof_is_error() {
    let mut reader = Cursor::new(b"Ok7".to_vec());
    let err = read_reply(&mut reader, Duration::from_millis(100)).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::UnexpectedEof);
}

#[test]
fn test_read_reply_overlong_keeps_bytes() {
    let mut reader = Cursor::new(vec![b'Z'; 300]);
    let reply = read_reply(&mut reader, Duration::from_secs(1)).unwrap().unwrap();

    assert!(reply.len() > MAX_REPLY_SIZE);
    assert!(reply.iter().all(|&b| b == b'Z'));
    match decode_reply(&reply) {
        TransactionResult::Failure { raw: Some(raw) } => assert_eq!(raw, &reply[..]),
        other => panic!("Expected malformed failure, got {:?}", other),
    }
}

// =============================================================================
// Log Rendering Tests
// =============================================================================

#[test]
fn test_escape_frame_renders_terminator() {
    assert_eq!(escape_frame(b"~00124 1\r"), "~00124 1\\r");
}

#[test]
fn test_hex_frame() {
    assert_eq!(hex_frame(b"P\r"), "50 0d");
}
