//! Controller Module
//!
//! Owns the transport and runs transactions against one projector.
//!
//! ## Transaction
//! ```text
//!  discard stale input ─► write frame ─► read until '\r' or timeout ─► classify
//! ```
//! Exactly one reply is read per command written. Nothing is retried or
//! queued; callers needing several operations issue them one after another.

mod accessor;

use std::time::Duration;

use crate::config::Config;
use crate::error::{ProjectorError, Result};
use crate::protocol::{
    decode_reply, encode_command, escape_frame, hex_frame, read_reply, write_command, DeviceId,
    TransactionResult,
};
use crate::transport::{SerialTransport, Transport};

/// Command/response driver for a single projector
///
/// The transport is exclusively owned; `&mut self` on every call keeps one
/// transaction in flight at a time. Dropping the controller closes the port.
pub struct Controller<T: Transport = SerialTransport> {
    /// Duplex byte stream to the device
    transport: T,

    /// Address stamped into every frame
    device: DeviceId,

    /// Reply deadline per transaction
    timeout: Duration,
}

impl Controller<SerialTransport> {
    /// Open the serial port described by `config`
    pub fn open(config: &Config) -> Result<Self> {
        let transport = SerialTransport::open(config)?;
        Ok(Self::new(transport, config.device_id, config.read_timeout()))
    }
}

impl<T: Transport> Controller<T> {
    /// Wrap an already-open transport
    pub fn new(transport: T, device: DeviceId, timeout: Duration) -> Self {
        Self {
            transport,
            device,
            timeout,
        }
    }

    pub fn device_id(&self) -> DeviceId {
        self.device
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Close the link. The transport is dropped before this returns.
    pub fn close(self) {
        tracing::debug!("Releasing {}", self.transport.name());
        drop(self.transport);
    }

    /// Run one transaction: `~{id}{opcode}[ {argument}]\r` out, one reply in
    ///
    /// The argument must already be formatted; no domain checks happen here.
    /// Device outcomes (including timeout) come back as `Ok`; only faults on
    /// the link itself are `Err`.
    pub fn execute(&mut self, opcode: &str, argument: Option<&str>) -> Result<TransactionResult> {
        let frame = encode_command(self.device, opcode, argument)?;

        self.transport
            .discard_pending()
            .map_err(|e| ProjectorError::transport("discard", e))?;

        tracing::debug!(
            "TX {} [{}] on {}",
            frame,
            hex_frame(frame.as_bytes()),
            self.transport.name()
        );
        write_command(&mut self.transport, &frame)
            .map_err(|e| ProjectorError::transport("write", e))?;

        let reply = read_reply(&mut self.transport, self.timeout)
            .map_err(|e| ProjectorError::transport("read", e))?;

        let result = match reply {
            Some(bytes) => {
                tracing::debug!("RX {} [{}]", escape_frame(&bytes), hex_frame(&bytes));
                decode_reply(&bytes)
            }
            None => {
                tracing::debug!("RX timeout after {:?} for {}", self.timeout, frame);
                TransactionResult::Timeout
            }
        };

        if let TransactionResult::Failure { raw: Some(raw) } = &result {
            // Surfaced as a failure right away; not retried
            tracing::warn!(
                "Unrecognised reply to {}: \"{}\"",
                frame,
                escape_frame(raw)
            );
        }

        Ok(result)
    }
}

impl<T: Transport> std::fmt::Debug for Controller<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Controller")
            .field("transport", &self.transport.name())
            .field("device", &self.device)
            .field("timeout", &self.timeout)
            .finish()
    }
}
