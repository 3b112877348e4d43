//! Settings Capture and Restore
//!
//! Snapshots the device-readable settings into a flat [`SettingsDocument`]
//! and replays one later.
//!
//! ## Flow
//! ```text
//!  capture_config ──► SettingsDocument ──► save (JSON / TOML)
//!                                                │
//!  apply_config  ◄── SettingsDocument ◄── load ◄─┘
//! ```
//!
//! `capture_snapshot` wraps `capture_config` with `captured_at`, `device_id`
//! and the read-only status in [`INFO_ORDER`]; restore passes over those.
//!
//! Both walks follow fixed, ordered feature lists. Restore order is the list
//! order, never the document's: power first, then the input source ahead of
//! anything that depends on it.

mod capture;
mod document;
mod restore;

pub use capture::{capture_config, capture_snapshot, Capture, CaptureReport};
pub use document::{DocumentFormat, SettingsDocument};
pub use restore::{apply_config, ApplyReport, KeyOutcome};

use crate::catalog::{self, FeatureSpec};

/// Document key that `skip_power` guards
pub const POWER_KEY: &str = "power";

/// Snapshot timestamp written by `capture_snapshot`
pub const CAPTURED_AT_KEY: &str = "captured_at";

/// Address the snapshot was taken from
pub const DEVICE_ID_KEY: &str = "device_id";

/// Features read by `capture_config`, in document order
pub static CAPTURE_ORDER: &[&FeatureSpec] = &[
    &catalog::POWER,
    &catalog::INPUT_SOURCE,
    &catalog::DISPLAY_MODE,
    &catalog::PROJECTION_MODE,
    &catalog::ASPECT_RATIO,
    &catalog::DIGITAL_ZOOM,
    &catalog::BRIGHTNESS,
    &catalog::CONTRAST,
    &catalog::COLOR_TEMPERATURE,
    &catalog::VOLUME,
    &catalog::AUDIO_MUTE,
    &catalog::AV_MUTE,
    &catalog::V_KEYSTONE,
];

/// Features written by `apply_config`, in application order
pub static RESTORE_ORDER: &[&FeatureSpec] = &[
    &catalog::POWER,
    &catalog::INPUT_SOURCE,
    &catalog::DISPLAY_MODE,
    &catalog::PROJECTION_MODE,
    &catalog::ASPECT_RATIO,
    &catalog::DIGITAL_ZOOM,
    &catalog::BRIGHTNESS,
    &catalog::CONTRAST,
    &catalog::COLOR_TEMPERATURE,
    &catalog::VOLUME,
    &catalog::AUDIO_MUTE,
    &catalog::AV_MUTE,
    &catalog::V_KEYSTONE,
];

/// Read-only status recorded by `capture_snapshot`; never restored
pub static INFO_ORDER: &[&FeatureSpec] = &[
    &catalog::MAC_ADDRESS,
    &catalog::LAMP_HOURS,
    &catalog::SYSTEM_HOURS,
    &catalog::TEMPERATURE,
    &catalog::SYSTEM_FAN_1,
    &catalog::SYSTEM_FAN_2,
    &catalog::OPTICAL_FAN,
];
