use chrono::{SecondsFormat, Utc};

use super::{SettingsDocument, CAPTURED_AT_KEY, CAPTURE_ORDER, DEVICE_ID_KEY, INFO_ORDER};
use crate::controller::Controller;
use crate::outcome::Query;
use crate::transport::Transport;

/// Keys left out of a capture, with the reason
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptureReport {
    pub omitted: Vec<(String, String)>,
}

impl CaptureReport {
    pub fn is_complete(&self) -> bool {
        self.omitted.is_empty()
    }
}

/// Output of [`capture_config`] and [`capture_snapshot`]
#[derive(Debug, Clone)]
pub struct Capture {
    pub document: SettingsDocument,
    pub report: CaptureReport,
}

/// Read every feature in `CAPTURE_ORDER`
///
/// Unknown values are omitted rather than stored as a sentinel. A transport
/// fault on one key is recorded and the walk continues.
pub fn capture_config<T: Transport>(controller: &mut Controller<T>) -> Capture {
    let mut document = SettingsDocument::new();
    let mut report = CaptureReport::default();

    for feature in CAPTURE_ORDER {
        match controller.query(feature) {
            Ok(Query::Known(value)) => {
                tracing::debug!("Captured {} = {}", feature.name, value);
                document.insert(feature.name, value);
            }
            Ok(Query::Unknown(reason)) => {
                tracing::warn!("Omitting {}: {}", feature.name, reason);
                report.omitted.push((feature.name.to_string(), reason.to_string()));
            }
            Err(e) => {
                tracing::warn!("Omitting {}: {}", feature.name, e);
                report.omitted.push((feature.name.to_string(), e.to_string()));
            }
        }
    }

    tracing::info!(
        "Captured {} settings ({} omitted)",
        document.len(),
        report.omitted.len()
    );
    Capture { document, report }
}

/// [`capture_config`] plus provenance and read-only status
///
/// The document gains `captured_at` (RFC 3339, UTC) and `device_id` ahead of
/// the settings, then every readable [`INFO_ORDER`] value after them. None of
/// these keys are in the restore list, so [`apply_config`](super::apply_config)
/// passes over them. Status values that come back unknown are left out and
/// do not count against the report.
pub fn capture_snapshot<T: Transport>(controller: &mut Controller<T>) -> Capture {
    let captured_at = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    let settings = capture_config(controller);

    let mut document = SettingsDocument::new();
    document.insert(CAPTURED_AT_KEY, captured_at);
    document.insert(DEVICE_ID_KEY, controller.device_id().to_string());
    for (key, value) in &settings.document {
        document.insert(key, value.clone());
    }

    for feature in INFO_ORDER {
        match controller.query(feature) {
            Ok(Query::Known(value)) => document.insert(feature.name, value),
            Ok(Query::Unknown(reason)) => {
                tracing::debug!("No {} in snapshot: {}", feature.name, reason);
            }
            Err(e) => {
                tracing::debug!("No {} in snapshot: {}", feature.name, e);
            }
        }
    }

    Capture {
        document,
        report: settings.report,
    }
}
