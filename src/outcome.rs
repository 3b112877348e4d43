//! Accessor outcomes
//!
//! Queries are tri-state: a confirmed value, or unknown with the reason.
//! "Unknown because the device timed out" is never collapsed into `false`.

use std::fmt;

use crate::protocol::{escape_frame, TransactionResult};

/// Result of a get-style accessor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query<T> {
    Known(T),
    Unknown(Unknown),
}

/// Why a query produced no value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unknown {
    /// No reply within the read timeout
    Timeout,

    /// Device answered `F`
    Rejected,

    /// Reply matched none of `P`, `Ok…`, `F`
    Malformed(Vec<u8>),

    /// Device answered `P` where data was expected
    NoData,

    /// Payload did not fit the expected shape (flag, integer, …)
    Undecodable(String),

    /// Enumerated payload with no label in the code table
    UnmappedCode(String),
}

impl<T> Query<T> {
    pub fn known(self) -> Option<T> {
        match self {
            Query::Known(v) => Some(v),
            Query::Unknown(_) => None,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Query::Known(_))
    }

    /// Chain a second decoding step that may itself leave the value unknown
    pub fn and_then<U, F: FnOnce(T) -> Query<U>>(self, f: F) -> Query<U> {
        match self {
            Query::Known(v) => f(v),
            Query::Unknown(u) => Query::Unknown(u),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Query<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Query::Known(v) => v.fmt(f),
            Query::Unknown(u) => write!(f, "unknown ({})", u),
        }
    }
}

impl fmt::Display for Unknown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unknown::Timeout => f.write_str("no reply"),
            Unknown::Rejected => f.write_str("rejected by device"),
            Unknown::Malformed(raw) => write!(f, "malformed reply \"{}\"", escape_frame(raw)),
            Unknown::NoData => f.write_str("reply carried no data"),
            Unknown::Undecodable(payload) => write!(f, "undecodable payload \"{}\"", payload),
            // Fallback label: the raw code survives for the caller to see
            Unknown::UnmappedCode(code) => write!(f, "Unknown ({})", code),
        }
    }
}

/// Result of a set-style accessor or action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ack {
    /// `P` (or `Ok…`)
    Confirmed,

    /// `F` or an unrecognised reply
    Rejected,

    /// No reply; the command may or may not have taken effect
    Unconfirmed,
}

impl Ack {
    pub fn is_confirmed(self) -> bool {
        self == Ack::Confirmed
    }
}

impl fmt::Display for Ack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ack::Confirmed => f.write_str("confirmed"),
            Ack::Rejected => f.write_str("rejected by device"),
            Ack::Unconfirmed => f.write_str("unconfirmed (no reply)"),
        }
    }
}

impl From<&TransactionResult> for Ack {
    fn from(result: &TransactionResult) -> Self {
        match result {
            TransactionResult::Success | TransactionResult::SuccessWithData(_) => Ack::Confirmed,
            TransactionResult::Failure { .. } => Ack::Rejected,
            TransactionResult::Timeout => Ack::Unconfirmed,
        }
    }
}

impl From<TransactionResult> for Unknown {
    /// Reason a query got no data. Only meaningful for replies other than
    /// `Ok{payload}`.
    fn from(result: TransactionResult) -> Self {
        match result {
            TransactionResult::Timeout => Unknown::Timeout,
            TransactionResult::Failure { raw: None } => Unknown::Rejected,
            TransactionResult::Failure { raw: Some(raw) } => Unknown::Malformed(raw),
            TransactionResult::Success => Unknown::NoData,
            TransactionResult::SuccessWithData(payload) => Unknown::Undecodable(payload),
        }
    }
}
