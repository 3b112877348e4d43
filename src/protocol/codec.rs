//! Protocol codec
//!
//! Encoding and decoding functions for the wire protocol.
//!
//! ## Wire Format
//!
//! ### Command
//! ```text
//! ┌─────┬──────────┬──────────┬───────────────────┬──────┐
//! │ '~' │  Id (2)  │  Opcode  │ [' ' + Argument]  │ '\r' │
//! └─────┴──────────┴──────────┴───────────────────┴──────┘
//! ```
//!
//! ### Reply
//! ```text
//! P\r              accepted (set-style)
//! Ok{payload}\r    answered (get-style)
//! F\r              rejected
//! ```

use std::io::{ErrorKind, Read, Write};
use std::time::{Duration, Instant};

use bytes::{BufMut, BytesMut};

use super::{CommandFrame, DeviceId, TransactionResult};
use crate::error::{ProjectorError, Result};

/// Frame start marker
pub const START: u8 = b'~';

/// Frame terminator, both directions
pub const TERMINATOR: u8 = b'\r';

/// Upper bound on a reply before we give up looking for the terminator
pub const MAX_REPLY_SIZE: usize = 256;

// =============================================================================
// Command Encoding
// =============================================================================

/// Encode a command frame
///
/// Format: `~` + two-digit id + opcode + optional (`' '` + argument) + `\r`.
/// The argument is written verbatim; domain checks belong to the caller.
pub fn encode_command(
    device: DeviceId,
    opcode: &str,
    argument: Option<&str>,
) -> Result<CommandFrame> {
    if opcode.is_empty() {
        return Err(ProjectorError::invalid("opcode", "opcode is empty"));
    }
    if let Some(bad) = opcode
        .bytes()
        .chain(argument.unwrap_or("").bytes())
        .find(|b| !b.is_ascii_graphic() && *b != b' ')
    {
        return Err(ProjectorError::invalid(
            "opcode",
            format!("non-printable byte 0x{:02x} in command", bad),
        ));
    }

    let arg_len = argument.map(|a| a.len() + 1).unwrap_or(0);
    let mut frame = BytesMut::with_capacity(4 + opcode.len() + arg_len);
    frame.put_u8(START);
    frame.put_slice(device.to_string().as_bytes());
    frame.put_slice(opcode.as_bytes());
    if let Some(arg) = argument {
        frame.put_u8(b' ');
        frame.put_slice(arg.as_bytes());
    }
    frame.put_u8(TERMINATOR);

    Ok(CommandFrame::from_bytes(frame.freeze()))
}

// =============================================================================
// Reply Decoding
// =============================================================================

/// Classify one complete reply frame (terminator included)
pub fn decode_reply(bytes: &[u8]) -> TransactionResult {
    match bytes {
        b"P\r" => TransactionResult::Success,
        b"F\r" => TransactionResult::rejected(),
        [b'O', b'k', payload @ .., TERMINATOR] if !payload.contains(&TERMINATOR) => {
            match std::str::from_utf8(payload) {
                Ok(text) => TransactionResult::SuccessWithData(text.to_string()),
                Err(_) => TransactionResult::malformed(bytes),
            }
        }
        _ => TransactionResult::malformed(bytes),
    }
}

// =============================================================================
// Stream-based I/O helpers
// =============================================================================

/// Write a command frame in a single write and flush it
pub fn write_command<W: Write>(writer: &mut W, frame: &CommandFrame) -> std::io::Result<()> {
    writer.write_all(frame.as_bytes())?;
    writer.flush()
}

/// Read one reply frame
///
/// Returns `Ok(None)` when no terminator arrived within `timeout`. A reader
/// that reports `TimedOut`/`WouldBlock` is taken to have already waited its
/// own read timeout. End of stream is a transport fault, not a timeout, so a
/// closed link never looks like a silent device.
///
/// More than [`MAX_REPLY_SIZE`] bytes without a terminator are returned
/// unterminated, which [`decode_reply`] classifies as malformed.
pub fn read_reply<R: Read>(reader: &mut R, timeout: Duration) -> std::io::Result<Option<BytesMut>> {
    let started = Instant::now();
    let mut reply = BytesMut::with_capacity(32);
    let mut chunk = [0u8; 32];

    loop {
        match reader.read(&mut chunk) {
            Ok(0) => {
                return Err(std::io::Error::new(
                    ErrorKind::UnexpectedEof,
                    "transport closed while waiting for reply",
                ));
            }
            Ok(n) => {
                reply.extend_from_slice(&chunk[..n]);
                if let Some(end) = reply.iter().position(|&b| b == TERMINATOR) {
                    if end + 1 < reply.len() {
                        tracing::debug!(
                            "Discarding {} bytes after reply terminator",
                            reply.len() - end - 1
                        );
                    }
                    reply.truncate(end + 1);
                    return Ok(Some(reply));
                }
                if reply.len() > MAX_REPLY_SIZE {
                    tracing::warn!("Reply exceeded {} bytes without terminator", MAX_REPLY_SIZE);
                    return Ok(Some(reply));
                }
            }
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) if e.kind() == ErrorKind::TimedOut || e.kind() == ErrorKind::WouldBlock => {
                if !reply.is_empty() {
                    tracing::debug!("Partial reply before timeout: {}", escape_frame(&reply));
                }
                return Ok(None);
            }
            Err(e) => return Err(e),
        }

        if started.elapsed() >= timeout {
            return Ok(None);
        }
    }
}

/// Printable rendering of a frame for logs (`~00124 1\r`)
pub fn escape_frame(bytes: &[u8]) -> String {
    bytes.iter().flat_map(|&b| std::ascii::escape_default(b)).map(char::from).collect()
}

/// Space-separated hex rendering for wire-level debugging
pub fn hex_frame(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ")
}
