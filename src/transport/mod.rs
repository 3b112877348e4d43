//! Transport Module
//!
//! The duplex byte stream a controller talks over.
//!
//! ## Implementations
//! - [`SerialTransport`]: a real RS-232 port (8N1, no flow control)
//! - [`ScriptedTransport`]: canned replies for tests

use std::io::{Read, Write};

mod scripted;
mod serial;

pub use scripted::ScriptedTransport;
pub use serial::SerialTransport;

/// A byte stream carrying one transaction at a time
///
/// Reads must honour a bounded timeout and report expiry as
/// `ErrorKind::TimedOut` (or `WouldBlock`); end of stream means the link is
/// gone.
pub trait Transport: Read + Write {
    /// Drop unread input and unsent output left over from earlier exchanges
    fn discard_pending(&mut self) -> std::io::Result<()>;

    /// Endpoint name for logs
    fn name(&self) -> &str;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn discard_pending(&mut self) -> std::io::Result<()> {
        (**self).discard_pending()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
