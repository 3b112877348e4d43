//! Command Catalog
//!
//! Declarative description of every device feature: which opcode reads it,
//! which opcode writes it, what arguments are legal and how replies decode.
//! One generic dispatcher in [`crate::controller`] consumes these tables.
//!
//! ```text
//! FeatureSpec ─┬─ QuerySpec   (opcode, arg, Decoder)   get-style
//!              └─ CommandSpec (opcode, Domain)          set-style
//! ActionSpec   ── (opcode, arg)                         fire-and-forget
//! ```

mod decoder;
mod domain;
mod tables;

pub use decoder::{lookup_label, Decoder};
pub use domain::{Argument, Domain};
pub use tables::*;

/// How to read a feature
#[derive(Debug, Clone, Copy)]
pub struct QuerySpec {
    pub opcode: &'static str,
    pub arg: &'static str,
    pub decoder: Decoder,
}

/// How to write a feature
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    pub opcode: &'static str,
    pub domain: Domain,
}

/// One device feature
#[derive(Debug)]
pub struct FeatureSpec {
    /// Stable key, also used in settings documents
    pub name: &'static str,
    pub description: &'static str,
    pub query: Option<QuerySpec>,
    pub command: Option<CommandSpec>,
}

impl FeatureSpec {
    pub fn is_readable(&self) -> bool {
        self.query.is_some()
    }

    pub fn is_writable(&self) -> bool {
        self.command.is_some()
    }
}

/// A command without a value (remote keys, resets, ...)
#[derive(Debug)]
pub struct ActionSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub opcode: &'static str,
    pub arg: &'static str,
}

/// Find a feature by its key
pub fn feature(name: &str) -> Option<&'static FeatureSpec> {
    FEATURES.iter().copied().find(|f| f.name == name)
}

/// Find an action by name
pub fn action(name: &str) -> Option<&'static ActionSpec> {
    ACTIONS.iter().copied().find(|a| a.name == name)
}
