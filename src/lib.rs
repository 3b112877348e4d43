//! # projctl
//!
//! RS-232 control for DDP projectors (ML1050STi / ML750i protocol):
//! - One-line command / one-line reply transactions with a bounded timeout
//! - Declarative catalog of readable and settable features
//! - Tri-state query results that never confuse "no reply" with "off"
//! - Settings capture and replay through JSON or TOML documents
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │              Settings capture / restore                     │
//! │            (fixed ordered feature lists)                    │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                 Controller accessors                        │
//! │        query / apply / invoke  ◄──  Catalog tables          │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                 Transaction primitive                       │
//! │          ~{id}{opcode}[ {arg}]\r  ──►  P | Ok… | F          │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │   Serial    │          │  Scripted   │
//!   │ (hardware)  │          │  (tests)    │
//!   └─────────────┘          └─────────────┘
//! ```
//!
//! ## Example
//! ```no_run
//! use projctl::{Config, Controller};
//!
//! # fn main() -> projctl::Result<()> {
//! let config = Config::builder().port("/dev/ttyUSB0").build();
//! let mut projector = Controller::open(&config)?;
//!
//! if let Some(true) = projector.get_power_state()?.known() {
//!     projector.set_brightness(8)?;
//! }
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;
pub mod value;
pub mod outcome;

pub mod transport;
pub mod protocol;
pub mod catalog;
pub mod controller;
pub mod status;
pub mod settings;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{ProjectorError, Result};
pub use config::Config;
pub use controller::Controller;
pub use outcome::{Ack, Query, Unknown};
pub use settings::{apply_config, capture_config, capture_snapshot, SettingsDocument};
pub use status::SystemInfo;
pub use value::Value;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of projctl
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
