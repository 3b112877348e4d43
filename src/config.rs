//! Configuration for projctl
//!
//! Centralized configuration with sensible defaults.

use std::time::Duration;

use crate::error::{ProjectorError, Result};
use crate::protocol::DeviceId;

/// Main configuration for a projector connection
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Serial Line Configuration
    // -------------------------------------------------------------------------
    /// Serial port name (`/dev/ttyUSB0`, `COM10`, ...)
    pub port: String,

    /// Baud rate. The line is always 8N1 with no flow control.
    pub baud_rate: u32,

    /// Assert RTS and DTR after opening. Some USB adapters will not pass
    /// data until both lines are high.
    pub assert_control_lines: bool,

    /// Delay after opening before the first command (milliseconds)
    pub settle_delay_ms: u64,

    // -------------------------------------------------------------------------
    // Protocol Configuration
    // -------------------------------------------------------------------------
    /// Projector address, `00` broadcasts to any listening unit
    pub device_id: DeviceId,

    /// How long to wait for a reply terminator (milliseconds). The serial
    /// layer applies the same bound to writes.
    pub read_timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port().to_string(),
            baud_rate: 9600,
            assert_control_lines: true,
            settle_delay_ms: 200,
            device_id: DeviceId::BROADCAST,
            read_timeout_ms: 1000,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }

    /// Reject settings the serial layer would only fail on later
    pub fn validate(&self) -> Result<()> {
        if self.port.trim().is_empty() {
            return Err(ProjectorError::Config("serial port name is empty".into()));
        }
        if self.baud_rate == 0 {
            return Err(ProjectorError::Config("baud rate must be non-zero".into()));
        }
        if self.read_timeout_ms == 0 {
            return Err(ProjectorError::Config(
                "read timeout must be non-zero".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(windows)]
fn default_port() -> &'static str {
    "COM10"
}

#[cfg(not(windows))]
fn default_port() -> &'static str {
    "/dev/ttyUSB0"
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the serial port name
    pub fn port(mut self, port: impl Into<String>) -> Self {
        self.config.port = port.into();
        self
    }

    /// Set the baud rate
    pub fn baud_rate(mut self, baud: u32) -> Self {
        self.config.baud_rate = baud;
        self
    }

    /// Set the projector device id
    pub fn device_id(mut self, id: DeviceId) -> Self {
        self.config.device_id = id;
        self
    }

    /// Set the reply timeout (in milliseconds)
    pub fn read_timeout_ms(mut self, ms: u64) -> Self {
        self.config.read_timeout_ms = ms;
        self
    }

    /// Set the post-open settle delay (in milliseconds)
    pub fn settle_delay_ms(mut self, ms: u64) -> Self {
        self.config.settle_delay_ms = ms;
        self
    }

    /// Enable or disable raising RTS/DTR on open
    pub fn assert_control_lines(mut self, enabled: bool) -> Self {
        self.config.assert_control_lines = enabled;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

