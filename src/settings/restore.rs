use std::fmt;

use super::{SettingsDocument, POWER_KEY, RESTORE_ORDER};
use crate::controller::Controller;
use crate::outcome::Ack;
use crate::transport::Transport;

/// What happened to one key during [`apply_config`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    Applied,
    SkippedAbsent,
    SkippedPower,
    Failed(String),
}

impl fmt::Display for KeyOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyOutcome::Applied => f.write_str("applied"),
            KeyOutcome::SkippedAbsent => f.write_str("skipped (not in document)"),
            KeyOutcome::SkippedPower => f.write_str("skipped (power)"),
            KeyOutcome::Failed(reason) => write!(f, "failed: {}", reason),
        }
    }
}

/// Per-key outcomes in application order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyReport {
    pub outcomes: Vec<(String, KeyOutcome)>,
}

impl ApplyReport {
    pub fn get(&self, key: &str) -> Option<&KeyOutcome> {
        self.outcomes.iter().find(|(k, _)| k == key).map(|(_, o)| o)
    }

    pub fn applied(&self) -> impl Iterator<Item = &str> {
        self.keys_where(|o| *o == KeyOutcome::Applied)
    }

    pub fn failed(&self) -> impl Iterator<Item = &str> {
        self.keys_where(|o| matches!(o, KeyOutcome::Failed(_)))
    }

    pub fn skipped(&self) -> impl Iterator<Item = &str> {
        self.keys_where(|o| matches!(o, KeyOutcome::SkippedAbsent | KeyOutcome::SkippedPower))
    }

    /// No key failed
    pub fn all_applied(&self) -> bool {
        self.failed().next().is_none()
    }

    fn keys_where<'a>(
        &'a self,
        pred: impl Fn(&KeyOutcome) -> bool + 'a,
    ) -> impl Iterator<Item = &'a str> + 'a {
        self.outcomes
            .iter()
            .filter(move |(_, o)| pred(o))
            .map(|(k, _)| k.as_str())
    }
}

/// Replay `document` in `RESTORE_ORDER`
///
/// Every key is attempted regardless of earlier failures and nothing is
/// rolled back. Document keys outside the restore list are ignored.
pub fn apply_config<T: Transport>(
    controller: &mut Controller<T>,
    document: &SettingsDocument,
    skip_power: bool,
) -> ApplyReport {
    let mut report = ApplyReport::default();

    for feature in RESTORE_ORDER {
        let key = feature.name;
        let outcome = match document.get(key) {
            None => KeyOutcome::SkippedAbsent,
            Some(_) if key == POWER_KEY && skip_power => KeyOutcome::SkippedPower,
            Some(value) => match controller.apply(feature, value) {
                Ok(Ack::Confirmed) => KeyOutcome::Applied,
                Ok(ack) => KeyOutcome::Failed(ack.to_string()),
                Err(e) => KeyOutcome::Failed(e.to_string()),
            },
        };

        match &outcome {
            KeyOutcome::Failed(reason) => tracing::warn!("{}: {}", key, reason),
            other => tracing::debug!("{}: {}", key, other),
        }
        report.outcomes.push((key.to_string(), outcome));
    }

    for key in document.keys() {
        if !RESTORE_ORDER.iter().any(|f| f.name == key) {
            tracing::debug!("Ignoring {}: not restorable", key);
        }
    }

    tracing::info!(
        "Restored {} of {} settings",
        report.applied().count(),
        document.len()
    );
    report
}
