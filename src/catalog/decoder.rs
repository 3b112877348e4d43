//! Reply payload decoders

use crate::outcome::Unknown;
use crate::value::Value;

/// How to turn an `Ok{payload}` into a value
#[derive(Debug, Clone, Copy)]
pub enum Decoder {
    /// `1` on, `0` off
    Flag,

    /// Base-10 signed integer
    Integer,

    /// Numeric code looked up in a `(code, label)` table. `07` and `7` are
    /// the same code.
    Enumerated(&'static [(u16, &'static str)]),

    /// Payload kept as text
    Text,
}

impl Decoder {
    pub fn decode(&self, payload: &str) -> Result<Value, Unknown> {
        let payload = payload.trim();
        match *self {
            Decoder::Flag => match payload {
                "1" => Ok(Value::Bool(true)),
                "0" => Ok(Value::Bool(false)),
                other => Err(Unknown::Undecodable(other.to_string())),
            },
            Decoder::Integer => payload
                .parse::<i64>()
                .map(Value::Int)
                .map_err(|_| Unknown::Undecodable(payload.to_string())),
            Decoder::Enumerated(table) => {
                let code: u16 = payload
                    .parse()
                    .map_err(|_| Unknown::Undecodable(payload.to_string()))?;
                lookup_label(table, code)
                    .map(|label| Value::Text(label.to_string()))
                    .ok_or_else(|| Unknown::UnmappedCode(payload.to_string()))
            }
            Decoder::Text => Ok(Value::Text(payload.to_string())),
        }
    }
}

/// Label for `code`, if the table has one
pub fn lookup_label(table: &[(u16, &'static str)], code: u16) -> Option<&'static str> {
    table.iter().find(|(c, _)| *c == code).map(|(_, label)| *label)
}

