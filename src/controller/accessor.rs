//! Catalog-driven accessors
//!
//! One dispatcher per direction: `query` decodes a reply through the
//! feature's [`Decoder`](crate::catalog::Decoder), `apply` validates against
//! its [`Domain`](crate::catalog::Domain) before anything is written.
//! Device-side outcomes never raise; misuse and link faults do.

use super::Controller;
use crate::catalog::{self, ActionSpec, Argument, CommandSpec, Domain, FeatureSpec};
use crate::error::{ProjectorError, Result};
use crate::outcome::{Ack, Query, Unknown};
use crate::protocol::TransactionResult;
use crate::transport::Transport;
use crate::value::Value;

impl<T: Transport> Controller<T> {
    // =========================================================================
    // Generic Dispatch
    // =========================================================================

    /// Read a feature
    pub fn query(&mut self, feature: &FeatureSpec) -> Result<Query<Value>> {
        let spec = feature.query.ok_or_else(|| ProjectorError::Unsupported {
            feature: feature.name.to_string(),
            op: "query",
        })?;

        let outcome = match self.execute(spec.opcode, Some(spec.arg))? {
            TransactionResult::SuccessWithData(payload) => match spec.decoder.decode(&payload) {
                Ok(value) => Query::Known(value),
                Err(reason) => {
                    tracing::warn!("{}: {}", feature.name, reason);
                    Query::Unknown(reason)
                }
            },
            other => Query::Unknown(Unknown::from(other)),
        };

        tracing::trace!("{} = {}", feature.name, outcome);
        Ok(outcome)
    }

    /// Write a feature
    ///
    /// Out-of-domain values fail with `InvalidArgument` before any byte is
    /// written.
    pub fn apply(&mut self, feature: &FeatureSpec, value: &Value) -> Result<Ack> {
        let spec = feature.command.ok_or_else(|| ProjectorError::Unsupported {
            feature: feature.name.to_string(),
            op: "set",
        })?;

        let ack = match spec.domain.validate(feature.name, value)? {
            Argument::Literal(arg) => {
                let result = self.execute(spec.opcode, Some(arg.as_str()))?;
                Ack::from(&result)
            }
            Argument::StepTo { target, up, down } => {
                self.step_to(feature, &spec, target, up, down)?
            }
        };

        if !ack.is_confirmed() {
            tracing::warn!("{} <- {}: {}", feature.name, value, ack);
        }
        Ok(ack)
    }

    /// Send a value-less command
    pub fn invoke(&mut self, action: &ActionSpec) -> Result<Ack> {
        let result = self.execute(action.opcode, Some(action.arg))?;
        Ok(Ack::from(&result))
    }

    /// Walk a feature without an absolute setter to `target` one key press at
    /// a time. Stops at the first press that is not confirmed.
    fn step_to(
        &mut self,
        feature: &FeatureSpec,
        spec: &CommandSpec,
        target: i64,
        up: &str,
        down: &str,
    ) -> Result<Ack> {
        let current = match self.query(feature)? {
            Query::Known(Value::Int(level)) => level,
            other => {
                tracing::warn!(
                    "{}: cannot step without the current level ({})",
                    feature.name,
                    other
                );
                return Ok(Ack::Unconfirmed);
            }
        };

        // The reported level bounds how many presses get sent
        if let Domain::Stepped { min, max, .. } = spec.domain {
            if !(min..=max).contains(&current) {
                tracing::warn!(
                    "{}: device reported {} outside {}..{}, not stepping",
                    feature.name,
                    current,
                    min,
                    max
                );
                return Ok(Ack::Unconfirmed);
            }
        }

        let key = if target > current { up } else { down };
        for _ in 0..target.abs_diff(current) {
            let ack = Ack::from(&self.execute(spec.opcode, Some(key))?);
            if !ack.is_confirmed() {
                return Ok(ack);
            }
        }
        Ok(Ack::Confirmed)
    }

    // =========================================================================
    // Typed Accessors
    // =========================================================================

    /// `~{id}124 1` - power state
    pub fn get_power_state(&mut self) -> Result<Query<bool>> {
        Ok(self.query(&catalog::POWER)?.and_then(expect_bool))
    }

    pub fn set_power(&mut self, on: bool) -> Result<Ack> {
        self.apply(&catalog::POWER, &Value::Bool(on))
    }

    pub fn get_brightness(&mut self) -> Result<Query<i64>> {
        Ok(self.query(&catalog::BRIGHTNESS)?.and_then(expect_int))
    }

    /// Brightness 0-10
    pub fn set_brightness(&mut self, level: i64) -> Result<Ack> {
        self.apply(&catalog::BRIGHTNESS, &Value::Int(level))
    }

    pub fn get_contrast(&mut self) -> Result<Query<i64>> {
        Ok(self.query(&catalog::CONTRAST)?.and_then(expect_int))
    }

    /// Contrast 0-10
    pub fn set_contrast(&mut self, level: i64) -> Result<Ack> {
        self.apply(&catalog::CONTRAST, &Value::Int(level))
    }

    pub fn get_input_source(&mut self) -> Result<Query<String>> {
        Ok(self.query(&catalog::INPUT_SOURCE)?.and_then(expect_text))
    }

    pub fn set_input_source(&mut self, label: &str) -> Result<Ack> {
        self.apply(&catalog::INPUT_SOURCE, &Value::from(label))
    }

    /// Zoom label such as `"125%"`
    pub fn get_digital_zoom(&mut self) -> Result<Query<String>> {
        Ok(self.query(&catalog::DIGITAL_ZOOM)?.and_then(expect_text))
    }

    /// Level 0-6, or a percentage from 50 to 200 in steps of 25
    pub fn set_digital_zoom(&mut self, level_or_percent: i64) -> Result<Ack> {
        self.apply(&catalog::DIGITAL_ZOOM, &Value::Int(level_or_percent))
    }

    pub fn get_keystone(&mut self) -> Result<Query<i64>> {
        Ok(self.query(&catalog::V_KEYSTONE)?.and_then(expect_int))
    }

    /// Vertical keystone -40..40
    pub fn set_keystone(&mut self, value: i64) -> Result<Ack> {
        self.apply(&catalog::V_KEYSTONE, &Value::Int(value))
    }

    pub fn get_volume(&mut self) -> Result<Query<i64>> {
        Ok(self.query(&catalog::VOLUME)?.and_then(expect_int))
    }

    /// Volume 0-10, reached by stepping from the current level
    pub fn set_volume(&mut self, level: i64) -> Result<Ack> {
        self.apply(&catalog::VOLUME, &Value::Int(level))
    }
}

fn expect_bool(value: Value) -> Query<bool> {
    match value {
        Value::Bool(b) => Query::Known(b),
        other => Query::Unknown(Unknown::Undecodable(other.to_string())),
    }
}

fn expect_int(value: Value) -> Query<i64> {
    match value {
        Value::Int(n) => Query::Known(n),
        other => Query::Unknown(Unknown::Undecodable(other.to_string())),
    }
}

fn expect_text(value: Value) -> Query<String> {
    match value {
        Value::Text(s) => Query::Known(s),
        other => Query::Unknown(Unknown::Undecodable(other.to_string())),
    }
}
