//! Scripted transport
//!
//! Plays back canned replies, one per flushed command, and records every
//! frame written. Lets controller code run without hardware.

use std::collections::VecDeque;
use std::io::{ErrorKind, Read, Write};

use super::Transport;

/// What the fake device does with the next command
#[derive(Debug, Clone)]
enum Step {
    Reply(Vec<u8>),
    Silence,
}

/// In-memory transport with a queue of scripted replies
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    /// Responses released one per flushed command
    script: VecDeque<Step>,

    /// Bytes the reader can currently see
    inbound: VecDeque<u8>,

    /// Bytes written since the last flush
    outbound: Vec<u8>,

    /// Completed frames, in write order
    frames: Vec<Vec<u8>>,

    /// Reads return end-of-stream, writes fail
    closed: bool,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer the next command with `reply` (bytes as sent, `\r` included)
    pub fn reply(mut self, reply: impl AsRef<[u8]>) -> Self {
        self.push_reply(reply);
        self
    }

    /// Leave the next command unanswered, so it times out
    pub fn silence(mut self) -> Self {
        self.script.push_back(Step::Silence);
        self
    }

    pub fn push_reply(&mut self, reply: impl AsRef<[u8]>) {
        self.script.push_back(Step::Reply(reply.as_ref().to_vec()));
    }

    /// Bytes that arrive without being asked for (late or unsolicited output)
    pub fn inject(&mut self, bytes: impl AsRef<[u8]>) {
        self.inbound.extend(bytes.as_ref());
    }

    /// Simulate the cable being pulled
    pub fn close(&mut self) {
        self.closed = true;
    }

    /// Every frame written so far
    pub fn frames(&self) -> &[Vec<u8>] {
        &self.frames
    }

    /// Frames rendered as strings, for readable assertions
    pub fn frames_as_text(&self) -> Vec<String> {
        self.frames
            .iter()
            .map(|f| String::from_utf8_lossy(f).into_owned())
            .collect()
    }

    /// Total bytes written
    pub fn bytes_written(&self) -> usize {
        self.frames.iter().map(Vec::len).sum::<usize>() + self.outbound.len()
    }

    /// Scripted steps not yet consumed
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl Read for ScriptedTransport {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        if self.closed {
            return Ok(0);
        }
        if self.inbound.is_empty() {
            return Err(std::io::Error::new(ErrorKind::TimedOut, "no scripted reply"));
        }
        let n = buf.len().min(self.inbound.len());
        for (slot, byte) in buf.iter_mut().zip(self.inbound.drain(..n)) {
            *slot = byte;
        }
        Ok(n)
    }
}

impl Write for ScriptedTransport {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        if self.closed {
            return Err(std::io::Error::new(ErrorKind::BrokenPipe, "transport closed"));
        }
        self.outbound.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        if self.closed {
            return Err(std::io::Error::new(ErrorKind::BrokenPipe, "transport closed"));
        }
        if self.outbound.is_empty() {
            return Ok(());
        }
        self.frames.push(std::mem::take(&mut self.outbound));
        if let Some(Step::Reply(reply)) = self.script.pop_front() {
            self.inbound.extend(reply);
        }
        Ok(())
    }
}

impl Transport for ScriptedTransport {
    fn discard_pending(&mut self) -> std::io::Result<()> {
        self.inbound.clear();
        self.outbound.clear();
        Ok(())
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

