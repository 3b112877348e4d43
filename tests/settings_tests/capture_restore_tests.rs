//! Capture/Restore Tests
//!
//! Settings snapshots against a scripted device.

use std::time::Duration;

use projctl::protocol::DeviceId;
use projctl::settings::{
    apply_config, capture_config, capture_snapshot, KeyOutcome, SettingsDocument, CAPTURE_ORDER,
    INFO_ORDER, POWER_KEY, RESTORE_ORDER,
};
use projctl::transport::ScriptedTransport;
use projctl::{Controller, Value};

// =============================================================================
// Helpers
// =============================================================================

fn controller(transport: ScriptedTransport) -> Controller<ScriptedTransport> {
    Controller::new(transport, DeviceId::BROADCAST, Duration::from_millis(50))
}

/// Replies for every capture key, in capture order
const FULL_CAPTURE: &[&str] = &[
    "Ok1\r",  // power
    "Ok07\r", // input_source
    "Ok3\r",  // display_mode
    "Ok0\r",  // projection_mode
    "Ok2\r",  // aspect_ratio
    "Ok2\r",  // digital_zoom
    "Ok7\r",  // brightness
    "Ok5\r",  // contrast
    "Ok3\r",  // color_temperature
    "Ok4\r",  // volume
    "Ok0\r",  // audio_mute
    "Ok0\r",  // av_mute
    "Ok-5\r", // v_keystone
];

/// Replies for every status key, in snapshot order
const FULL_INFO: &[&str] = &[
    "Ok00:11:22:33:44:55\r", // mac_address
    "Ok1234\r",              // lamp_hours
    "Ok2048\r",              // system_hours
    "Ok41\r",                // temperature
    "Ok1500\r",              // system_fan_1
    "Ok1510\r",              // system_fan_2
    "Ok1800\r",              // optical_fan
];

fn scripted(replies: &[&str]) -> ScriptedTransport {
    let mut transport = ScriptedTransport::new();
    for reply in replies {
        transport.push_reply(reply);
    }
    transport
}

fn doc(entries: &[(&str, Value)]) -> SettingsDocument {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

// =============================================================================
// Order List Tests
// =============================================================================

#[test]
fn test_order_lists_fit_their_direction() {
    assert!(CAPTURE_ORDER.iter().all(|f| f.is_readable()));
    assert!(RESTORE_ORDER.iter().all(|f| f.is_writable()));
    assert!(INFO_ORDER.iter().all(|f| f.is_readable() && !f.is_writable()));
    assert_eq!(RESTORE_ORDER[0].name, POWER_KEY);
}

#[test]
fn test_source_restored_before_display_mode() {
    let position = |name: &str| RESTORE_ORDER.iter().position(|f| f.name == name);
    assert!(position("input_source") < position("display_mode"));
}

// =============================================================================
// Capture Tests
// =============================================================================

#[test]
fn test_capture_all_keys() {
    let mut projector = controller(scripted(FULL_CAPTURE));

    let capture = capture_config(&mut projector);

    assert!(capture.report.is_complete());
    assert_eq!(capture.document.len(), CAPTURE_ORDER.len());
    assert_eq!(
        capture.document.keys().collect::<Vec<_>>(),
        CAPTURE_ORDER.iter().map(|f| f.name).collect::<Vec<_>>()
    );
    assert_eq!(capture.document.get("power"), Some(&Value::Bool(true)));
    assert_eq!(capture.document.get("input_source"), Some(&Value::from("HDMI 1")));
    assert_eq!(capture.document.get("display_mode"), Some(&Value::from("Cinema")));
    assert_eq!(capture.document.get("digital_zoom"), Some(&Value::from("100%")));
    assert_eq!(capture.document.get("v_keystone"), Some(&Value::Int(-5)));
}

#[test]
fn test_capture_omits_unknown_keys() {
    let mut replies = FULL_CAPTURE.to_vec();
    replies[1] = "Ok99\r"; // unmapped input source
    replies[6] = "F\r"; // brightness rejected
    let mut transport = scripted(&replies[..9]);
    // volume goes unanswered; the rest answer normally
    transport = transport.silence();
    for reply in &replies[10..] {
        transport.push_reply(reply);
    }
    let mut projector = controller(transport);

    let capture = capture_config(&mut projector);

    assert!(!capture.document.contains("input_source"));
    assert!(!capture.document.contains("brightness"));
    assert!(!capture.document.contains("volume"));
    assert_eq!(capture.document.len(), CAPTURE_ORDER.len() - 3);

    let omitted: Vec<&str> = capture.report.omitted.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(omitted, ["input_source", "brightness", "volume"]);
    assert!(capture.report.omitted[0].1.contains("99"));
}

#[test]
fn test_capture_survives_transport_fault() {
    let mut transport = ScriptedTransport::new();
    transport.close();
    let mut projector = controller(transport);

    let capture = capture_config(&mut projector);

    assert!(capture.document.is_empty());
    assert_eq!(capture.report.omitted.len(), CAPTURE_ORDER.len());
}

// =============================================================================
// Snapshot Tests
// =============================================================================

#[test]
fn test_snapshot_adds_provenance_and_status() {
    let mut replies = FULL_CAPTURE.to_vec();
    replies.extend(FULL_INFO);
    let mut projector = Controller::new(
        scripted(&replies),
        DeviceId::new(7).unwrap(),
        Duration::from_millis(50),
    );

    let capture = capture_snapshot(&mut projector);

    assert!(capture.report.is_complete());
    let keys: Vec<&str> = capture.document.keys().collect();
    assert_eq!(&keys[..2], ["captured_at", "device_id"]);
    assert_eq!(keys.len(), 2 + CAPTURE_ORDER.len() + INFO_ORDER.len());

    let Some(Value::Text(stamp)) = capture.document.get("captured_at") else {
        panic!("captured_at missing");
    };
    assert!(stamp.ends_with('Z') && stamp.contains('T'), "{}", stamp);
    assert_eq!(capture.document.get("device_id"), Some(&Value::from("07")));
    assert_eq!(
        capture.document.get("mac_address"),
        Some(&Value::from("00:11:22:33:44:55"))
    );
    assert_eq!(capture.document.get("lamp_hours"), Some(&Value::Int(1234)));
    assert_eq!(capture.document.get("optical_fan"), Some(&Value::Int(1800)));
    assert_eq!(capture.document.get("brightness"), Some(&Value::Int(7)));
    assert_eq!(projector.transport().remaining(), 0);
}

#[test]
fn test_snapshot_leaves_out_unknown_status() {
    let mut transport = scripted(FULL_CAPTURE);
    transport = transport.silence().reply("F\r");
    for reply in &FULL_INFO[2..] {
        transport.push_reply(reply);
    }
    let mut projector = controller(transport);

    let capture = capture_snapshot(&mut projector);

    assert!(!capture.document.contains("mac_address"));
    assert!(!capture.document.contains("lamp_hours"));
    assert_eq!(capture.document.get("temperature"), Some(&Value::Int(41)));
    // Status gaps are not settings gaps
    assert!(capture.report.is_complete());
}

#[test]
fn test_snapshot_metadata_is_not_restored() {
    let mut replies = FULL_CAPTURE.to_vec();
    replies.extend(FULL_INFO);
    let mut projector = controller(scripted(&replies));
    let snapshot = capture_snapshot(&mut projector).document;

    // Volume already at 4, so no key presses follow its query
    let mut replies = vec!["P\r"; 8];
    replies.push("Ok4\r");
    replies.extend(["P\r"; 3]);
    let mut projector = controller(scripted(&replies));
    let report = apply_config(&mut projector, &snapshot, true);

    assert!(report.all_applied(), "{:?}", report);
    for key in ["captured_at", "device_id", "mac_address", "lamp_hours", "temperature"] {
        assert!(report.get(key).is_none(), "{}", key);
    }
    assert_eq!(report.outcomes.len(), RESTORE_ORDER.len());
    assert_eq!(projector.transport().remaining(), 0);
}

// =============================================================================
// Restore Tests
// =============================================================================

#[test]
fn test_skip_power_sends_no_power_command() {
    let document = doc(&[("power", Value::Bool(true)), ("brightness", Value::Int(7))]);
    let mut projector = controller(scripted(&["P\r"]));

    let report = apply_config(&mut projector, &document, true);

    assert_eq!(report.get("power"), Some(&KeyOutcome::SkippedPower));
    assert_eq!(report.get("brightness"), Some(&KeyOutcome::Applied));
    assert_eq!(report.skipped().count(), RESTORE_ORDER.len() - 1);
    assert_eq!(report.skipped().next(), Some("power"));
    assert_eq!(projector.transport().frames_as_text(), ["~0021 7\r"]);
}

#[test]
fn test_power_applied_first_when_not_skipped() {
    let document = doc(&[("brightness", Value::Int(7)), ("power", Value::Bool(true))]);
    let mut projector = controller(scripted(&["P\r", "P\r"]));

    let report = apply_config(&mut projector, &document, false);

    assert_eq!(report.get("power"), Some(&KeyOutcome::Applied));
    assert_eq!(
        projector.transport().frames_as_text(),
        ["~0000 1\r", "~0021 7\r"]
    );
}

#[test]
fn test_absent_keys_skipped_and_processing_continues() {
    let document = doc(&[("contrast", Value::Int(4))]);
    let mut projector = controller(scripted(&["P\r"]));

    let report = apply_config(&mut projector, &document, true);

    assert_eq!(report.get("brightness"), Some(&KeyOutcome::SkippedAbsent));
    assert_eq!(report.get("contrast"), Some(&KeyOutcome::Applied));
    assert_eq!(report.outcomes.len(), RESTORE_ORDER.len());
    assert!(report.all_applied());
}

#[test]
fn test_restore_follows_fixed_order() {
    let document = doc(&[
        ("display_mode", Value::from("Cinema")),
        ("brightness", Value::Int(6)),
        ("input_source", Value::from("HDMI 1")),
    ]);
    let mut projector = controller(scripted(&["P\r", "P\r", "P\r"]));

    apply_config(&mut projector, &document, true);

    assert_eq!(
        projector.transport().frames_as_text(),
        ["~0012 1\r", "~0020 3\r", "~0021 6\r"]
    );
}

#[test]
fn test_failures_reported_without_rollback() {
    let document = doc(&[
        ("input_source", Value::from("HDMI 1")),
        ("brightness", Value::Int(42)),
        ("contrast", Value::Int(5)),
    ]);
    let mut projector = controller(scripted(&["P\r", "F\r"]));

    let report = apply_config(&mut projector, &document, true);

    assert_eq!(report.get("input_source"), Some(&KeyOutcome::Applied));
    assert!(matches!(report.get("brightness"), Some(KeyOutcome::Failed(_))));
    assert!(matches!(report.get("contrast"), Some(KeyOutcome::Failed(_))));
    assert_eq!(report.failed().collect::<Vec<_>>(), ["brightness", "contrast"]);
    assert_eq!(report.applied().collect::<Vec<_>>(), ["input_source"]);
    assert!(!report.all_applied());
    // brightness 42 never reached the wire
    assert_eq!(
        projector.transport().frames_as_text(),
        ["~0012 1\r", "~0022 5\r"]
    );
}

#[test]
fn test_unconfirmed_counts_as_failed() {
    let document = doc(&[("brightness", Value::Int(3))]);
    let mut projector = controller(ScriptedTransport::new().silence());

    let report = apply_config(&mut projector, &document, true);

    assert!(matches!(report.get("brightness"), Some(KeyOutcome::Failed(_))));
}

#[test]
fn test_unknown_document_keys_ignored() {
    let document = doc(&[("schema_version", Value::Int(2)), ("language", Value::from("English"))]);
    let mut projector = controller(ScriptedTransport::new());

    let report = apply_config(&mut projector, &document, true);

    assert!(report.get("schema_version").is_none());
    assert_eq!(projector.transport().bytes_written(), 0);
}

// =============================================================================
// Round Trip Tests
// =============================================================================

#[test]
fn test_captured_document_restores() {
    let mut projector = controller(scripted(FULL_CAPTURE));
    let captured = capture_config(&mut projector).document;
    let json = captured.to_json().unwrap();
    let parsed = SettingsDocument::from_json(&json).unwrap();
    assert_eq!(parsed, captured);

    // Volume steps from the device's current level (4 -> 4 needs no keys)
    let mut replies = vec!["P\r"; 8];
    replies.push("Ok4\r");
    replies.extend(["P\r"; 3]);
    let mut projector = controller(scripted(&replies));

    let report = apply_config(&mut projector, &parsed, true);

    assert!(report.all_applied(), "{:?}", report);
    assert_eq!(report.get("power"), Some(&KeyOutcome::SkippedPower));
    assert_eq!(projector.transport().remaining(), 0);
}
