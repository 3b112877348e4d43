//! Argument domains
//!
//! Validation and formatting of set-style arguments. Everything here runs
//! before a frame is built, so a rejected value never reaches the wire.

use crate::error::{ProjectorError, Result};
use crate::value::Value;

/// Accepted inputs for a settable feature
#[derive(Debug, Clone, Copy)]
pub enum Domain {
    /// Boolean switch with the argument sent for each state
    Flag {
        on: &'static str,
        off: &'static str,
    },

    /// Inclusive integer range, sent as a signed decimal numeral
    Range { min: i64, max: i64 },

    /// Named choices `(label, code)`; labels match case-insensitively
    Choices(&'static [(&'static str, &'static str)]),

    /// Zoom given as level index or as percentage of `(level, label)` table
    Zoom(&'static [(u16, &'static str)]),

    /// No absolute setter: reach the target with repeated up/down keys
    Stepped {
        up: &'static str,
        down: &'static str,
        min: i64,
        max: i64,
    },
}

/// A validated argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Argument {
    /// Sent verbatim after the opcode
    Literal(String),

    /// Target level for a stepped feature, reached by sending `up`/`down`
    StepTo {
        target: i64,
        up: &'static str,
        down: &'static str,
    },
}

impl Domain {
    /// Check `value` and produce the argument to send
    pub fn validate(&self, feature: &str, value: &Value) -> Result<Argument> {
        match *self {
            Domain::Flag { on, off } => {
                let state = flag_state(value).ok_or_else(|| {
                    ProjectorError::invalid(
                        feature,
                        format!("expected on/off, got {} {:?}", value.kind(), value.to_string()),
                    )
                })?;
                Ok(Argument::Literal(if state { on } else { off }.to_string()))
            }
            Domain::Range { min, max } => {
                let n = integer(feature, value)?;
                check_range(feature, n, min, max)?;
                Ok(Argument::Literal(n.to_string()))
            }
            Domain::Choices(choices) => {
                let label = value.as_text().ok_or_else(|| {
                    ProjectorError::invalid(feature, format!("expected a label, got {}", value))
                })?;
                choices
                    .iter()
                    .find(|(name, _)| name.eq_ignore_ascii_case(label.trim()))
                    .map(|(_, code)| Argument::Literal(code.to_string()))
                    .ok_or_else(|| {
                        let names: Vec<&str> = choices.iter().map(|(name, _)| *name).collect();
                        ProjectorError::invalid(
                            feature,
                            format!("{:?} is not one of: {}", label, names.join(", ")),
                        )
                    })
            }
            Domain::Zoom(levels) => zoom_level(feature, value, levels)
                .map(|level| Argument::Literal(level.to_string())),
            Domain::Stepped { up, down, min, max } => {
                let target = integer(feature, value)?;
                check_range(feature, target, min, max)?;
                Ok(Argument::StepTo { target, up, down })
            }
        }
    }

    /// Short human description of accepted values
    pub fn describe(&self) -> String {
        match *self {
            Domain::Flag { .. } => "on|off".to_string(),
            Domain::Range { min, max } | Domain::Stepped { min, max, .. } => {
                format!("{}..{}", min, max)
            }
            Domain::Choices(choices) => choices
                .iter()
                .map(|(name, _)| *name)
                .collect::<Vec<_>>()
                .join(" | "),
            Domain::Zoom(levels) => format!(
                "0..{} or {}",
                levels.len().saturating_sub(1),
                levels.iter().map(|(_, l)| *l).collect::<Vec<_>>().join(" | ")
            ),
        }
    }
}

fn flag_state(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Int(1) => Some(true),
        Value::Int(0) => Some(false),
        Value::Text(s) => match s.trim().to_ascii_lowercase().as_str() {
            "on" | "true" | "yes" => Some(true),
            "off" | "false" | "no" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

fn integer(feature: &str, value: &Value) -> Result<i64> {
    match value {
        Value::Int(n) => Ok(*n),
        Value::Text(s) => s.trim().parse().map_err(|_| {
            ProjectorError::invalid(feature, format!("expected an integer, got {:?}", s))
        }),
        Value::Bool(_) => Err(ProjectorError::invalid(
            feature,
            "expected an integer, got boolean",
        )),
    }
}

fn check_range(feature: &str, n: i64, min: i64, max: i64) -> Result<()> {
    if n < min || n > max {
        return Err(ProjectorError::invalid(
            feature,
            format!("{} is outside {}..{}", n, min, max),
        ));
    }
    Ok(())
}

/// Level index from `3`, `125` or `"125%"`
fn zoom_level(feature: &str, value: &Value, levels: &[(u16, &str)]) -> Result<u16> {
    let by_label = |label: &str| {
        levels
            .iter()
            .find(|(_, l)| l.eq_ignore_ascii_case(label))
            .map(|(level, _)| *level)
    };

    let found = match value {
        Value::Int(n) => {
            let as_level = u16::try_from(*n)
                .ok()
                .filter(|n| levels.iter().any(|(level, _)| level == n));
            as_level.or_else(|| by_label(&format!("{}%", n)))
        }
        Value::Text(s) => by_label(s.trim()),
        Value::Bool(_) => None,
    };

    found.ok_or_else(|| {
        ProjectorError::invalid(
            feature,
            format!(
                "{} is not a zoom level (0..{}) or one of {}",
                value,
                levels.len().saturating_sub(1),
                levels.iter().map(|(_, l)| *l).collect::<Vec<_>>().join(", ")
            ),
        )
    })
}

