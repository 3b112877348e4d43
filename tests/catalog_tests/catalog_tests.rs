//! Catalog Tests
//!
//! Consistency checks over the feature and action tables.

use std::collections::HashSet;

use projctl::catalog::{self, Argument, Decoder, Domain};
use projctl::{Unknown, Value};

const ZOOM_LEVELS: &[(u16, &str)] = &[(0, "50%"), (1, "75%"), (2, "100%")];
const MODES: &[(u16, &str)] = &[(0, "Front-Desktop"), (7, "HDMI 1")];

// =============================================================================
// Table Tests
// =============================================================================

#[test]
fn test_feature_names_unique() {
    let mut seen = HashSet::new();
    for feature in catalog::FEATURES {
        assert!(seen.insert(feature.name), "duplicate feature {}", feature.name);
    }
    for action in catalog::ACTIONS {
        assert!(seen.insert(action.name), "duplicate name {}", action.name);
    }
}

#[test]
fn test_lookup_by_name() {
    assert_eq!(catalog::feature("brightness").unwrap().name, "brightness");
    assert_eq!(catalog::action("menu").unwrap().opcode, "140");
    assert!(catalog::feature("nonexistent").is_none());
}

#[test]
fn test_every_feature_has_a_direction() {
    for feature in catalog::FEATURES {
        assert!(
            feature.is_readable() || feature.is_writable(),
            "{} can neither be read nor set",
            feature.name
        );
    }
}

/// Every label a query can report must be accepted by the setter, so a
/// captured value can be applied back.
#[test]
fn test_reported_labels_are_settable() {
    for feature in catalog::FEATURES {
        let (Some(query), Some(command)) = (feature.query, feature.command) else {
            continue;
        };
        let Decoder::Enumerated(reported) = query.decoder else {
            continue;
        };
        for (_, label) in reported {
            assert!(
                command.domain.validate(feature.name, &Value::from(*label)).is_ok(),
                "{}: reported label {:?} is not settable",
                feature.name,
                label
            );
        }
    }
}

#[test]
fn test_integer_features_have_ranges() {
    for feature in catalog::FEATURES {
        let (Some(query), Some(command)) = (feature.query, feature.command) else {
            continue;
        };
        if matches!(query.decoder, Decoder::Integer) {
            assert!(
                matches!(
                    command.domain,
                    Domain::Range { .. } | Domain::Stepped { .. }
                ),
                "{} reads an integer but is not range-checked",
                feature.name
            );
        }
    }
}

#[test]
fn test_describe_mentions_limits() {
    assert_eq!(
        catalog::BRIGHTNESS.command.unwrap().domain.describe(),
        "0..10"
    );
    assert!(catalog::DIGITAL_ZOOM
        .command
        .unwrap()
        .domain
        .describe()
        .contains("200%"));
}

// =============================================================================
// Domain Tests
// =============================================================================

#[test]
fn test_flag_accepts_words_and_digits() {
    let flag = Domain::Flag { on: "1", off: "0" };
    assert_eq!(
        flag.validate("power", &Value::from("ON")).unwrap(),
        Argument::Literal("1".into())
    );
    assert_eq!(
        flag.validate("power", &Value::Int(0)).unwrap(),
        Argument::Literal("0".into())
    );
    assert!(flag.validate("power", &Value::Int(2)).is_err());
}

#[test]
fn test_range_formats_signed_numeral() {
    let range = Domain::Range { min: -40, max: 40 };
    assert_eq!(
        range.validate("v_keystone", &Value::Int(-12)).unwrap(),
        Argument::Literal("-12".into())
    );
    assert!(range.validate("v_keystone", &Value::Int(41)).is_err());
}

#[test]
fn test_zoom_level_or_percentage() {
    let zoom = Domain::Zoom(ZOOM_LEVELS);
    assert_eq!(
        zoom.validate("digital_zoom", &Value::Int(1)).unwrap(),
        Argument::Literal("1".into())
    );
    assert_eq!(
        zoom.validate("digital_zoom", &Value::Int(100)).unwrap(),
        Argument::Literal("2".into())
    );
    assert_eq!(
        zoom.validate("digital_zoom", &Value::from("75%")).unwrap(),
        Argument::Literal("1".into())
    );
    assert!(zoom.validate("digital_zoom", &Value::Int(99)).is_err());
}

// =============================================================================
// Decoder Tests
// =============================================================================

#[test]
fn test_flag_decoding() {
    assert_eq!(Decoder::Flag.decode("1"), Ok(Value::Bool(true)));
    assert_eq!(Decoder::Flag.decode("0"), Ok(Value::Bool(false)));
    assert_eq!(
        Decoder::Flag.decode("2"),
        Err(Unknown::Undecodable("2".into()))
    );
}

#[test]
fn test_integer_decoding_is_signed() {
    assert_eq!(Decoder::Integer.decode("-15"), Ok(Value::Int(-15)));
    assert!(Decoder::Integer.decode("abc").is_err());
}

#[test]
fn test_enumerated_ignores_leading_zeros() {
    let decoder = Decoder::Enumerated(MODES);
    assert_eq!(decoder.decode("07"), Ok(Value::Text("HDMI 1".into())));
    assert_eq!(
        decoder.decode("42"),
        Err(Unknown::UnmappedCode("42".into()))
    );
}
