//! Command definitions
//!
//! Device addressing and the encoded command frame.

use std::fmt;
use std::str::FromStr;

use bytes::Bytes;

use crate::error::{ProjectorError, Result};

/// Two-digit projector address. `00` is broadcast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeviceId(u8);

impl DeviceId {
    /// Any listening projector
    pub const BROADCAST: DeviceId = DeviceId(0);

    /// Highest addressable unit
    pub const MAX: u8 = 99;

    pub fn new(id: u8) -> Result<Self> {
        if id > Self::MAX {
            return Err(ProjectorError::Config(format!(
                "device id must be 00-99, got {}",
                id
            )));
        }
        Ok(DeviceId(id))
    }
}

impl Default for DeviceId {
    fn default() -> Self {
        Self::BROADCAST
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

impl FromStr for DeviceId {
    type Err = ProjectorError;

    /// Accepts `"7"` as well as `"07"`
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() || s.len() > 2 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ProjectorError::Config(format!(
                "device id must be one or two digits, got {:?}",
                s
            )));
        }
        let id: u8 = s
            .parse()
            .map_err(|_| ProjectorError::Config(format!("bad device id {:?}", s)))?;
        DeviceId::new(id)
    }
}

/// An encoded, immutable command frame: `~{id}{opcode}[ {arg}]\r`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandFrame {
    bytes: Bytes,
}

impl CommandFrame {
    pub(crate) fn from_bytes(bytes: Bytes) -> Self {
        Self { bytes }
    }

    /// Raw bytes as written to the wire, terminator included
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Display for CommandFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&super::codec::escape_frame(&self.bytes))
    }
}
