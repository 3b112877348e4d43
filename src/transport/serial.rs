//! Serial port transport

use std::io::{Read, Write};
use std::time::Duration;

use serialport::{ClearBuffer, DataBits, FlowControl, Parity, SerialPort, StopBits};

use super::Transport;
use crate::config::Config;
use crate::error::{ProjectorError, Result};

/// An open RS-232 port. Closed when dropped.
pub struct SerialTransport {
    port: Box<dyn SerialPort>,
    name: String,
}

impl SerialTransport {
    /// Open the port described by `config`
    ///
    /// Line settings are fixed at 8 data bits, no parity, one stop bit and no
    /// flow control; only the baud rate and timeout are configurable.
    pub fn open(config: &Config) -> Result<Self> {
        config.validate()?;

        let open_err = |source| ProjectorError::Open {
            port: config.port.clone(),
            source,
        };

        let mut port = serialport::new(config.port.as_str(), config.baud_rate)
            .data_bits(DataBits::Eight)
            .parity(Parity::None)
            .stop_bits(StopBits::One)
            .flow_control(FlowControl::None)
            .timeout(config.read_timeout())
            .open()
            .map_err(open_err)?;

        if config.assert_control_lines {
            port.write_request_to_send(true).map_err(open_err)?;
            port.write_data_terminal_ready(true).map_err(open_err)?;
        }

        if config.settle_delay_ms > 0 {
            std::thread::sleep(Duration::from_millis(config.settle_delay_ms));
        }

        tracing::info!(
            "Opened {} at {} baud (8N1, device {})",
            config.port,
            config.baud_rate,
            config.device_id
        );

        Ok(Self {
            port,
            name: config.port.clone(),
        })
    }
}

impl Read for SerialTransport {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.port.read(buf)
    }
}

impl Write for SerialTransport {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.port.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.port.flush()
    }
}

impl Transport for SerialTransport {
    fn discard_pending(&mut self) -> std::io::Result<()> {
        self.port.clear(ClearBuffer::All).map_err(Into::into)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Drop for SerialTransport {
    fn drop(&mut self) {
        tracing::debug!("Closing {}", self.name);
    }
}

impl std::fmt::Debug for SerialTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SerialTransport")
            .field("port", &self.name)
            .finish()
    }
}
