//! System information snapshot
//!
//! `~{id}150 1` answers with a fixed-width composite payload:
//!
//! ```text
//! Ok a bbbbb cc dddd [ee]
//!    │ │     │  │     └─ picture mode code (optional)
//!    │ │     │  └─────── firmware version
//!    │ │     └────────── input source code
//!    │ └──────────────── lamp hours
//!    └────────────────── power (1 = on)
//! ```
//! (spaces added for readability; the wire has none)

use std::fmt;

use serde::Serialize;

use crate::catalog::{lookup_label, INPUT_SOURCE_REPORTED, SYSTEM_INFO_PICTURE_MODES};
use crate::controller::Controller;
use crate::error::Result;
use crate::outcome::{Query, Unknown};
use crate::protocol::TransactionResult;
use crate::transport::Transport;

/// Minimum payload: power + hours + source + firmware
const MIN_LEN: usize = 12;

/// Payload length that includes the picture mode
const WITH_MODE_LEN: usize = 14;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SystemInfo {
    pub power: bool,
    pub lamp_hours: u32,
    pub input_source: String,
    pub firmware: String,
    pub picture_mode: Option<String>,
}

impl SystemInfo {
    /// Parse the payload after `Ok`. Short or non-ASCII payloads give `None`.
    pub fn parse(payload: &str) -> Option<Self> {
        if !payload.is_ascii() || payload.len() < MIN_LEN {
            return None;
        }

        let power = &payload[0..1] == "1";
        let lamp_hours = payload[1..6].parse().ok()?;
        let input_source = label_or_code(&payload[6..8], INPUT_SOURCE_REPORTED);
        let firmware = payload[8..12].to_string();
        let picture_mode = (payload.len() >= WITH_MODE_LEN)
            .then(|| label_or_code(&payload[12..14], SYSTEM_INFO_PICTURE_MODES));

        Some(Self {
            power,
            lamp_hours,
            input_source,
            firmware,
            picture_mode,
        })
    }
}

fn label_or_code(code: &str, table: &'static [(u16, &'static str)]) -> String {
    code.parse::<u16>()
        .ok()
        .and_then(|n| lookup_label(table, n))
        .map(str::to_string)
        .unwrap_or_else(|| format!("Unknown ({})", code))
}

impl fmt::Display for SystemInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Power:        {}", if self.power { "On" } else { "Off" })?;
        writeln!(f, "Lamp hours:   {}", self.lamp_hours)?;
        writeln!(f, "Input source: {}", self.input_source)?;
        write!(f, "Firmware:     {}", self.firmware)?;
        if let Some(mode) = &self.picture_mode {
            write!(f, "\nPicture mode: {}", mode)?;
        }
        Ok(())
    }
}

impl<T: Transport> Controller<T> {
    /// Composite status read in a single transaction
    pub fn system_info(&mut self) -> Result<Query<SystemInfo>> {
        let outcome = match self.execute("150", Some("1"))? {
            TransactionResult::SuccessWithData(payload) => match SystemInfo::parse(&payload) {
                Some(info) => Query::Known(info),
                None => {
                    tracing::warn!("Unparseable system info payload {:?}", payload);
                    Query::Unknown(Unknown::Undecodable(payload))
                }
            },
            other => Query::Unknown(Unknown::from(other)),
        };
        Ok(outcome)
    }
}

