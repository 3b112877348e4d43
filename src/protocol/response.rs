//! Response definitions
//!
//! Classified outcome of one command/reply exchange.

/// Outcome of a single transaction.
///
/// Transport faults never appear here; they are the `Err` side of
/// [`crate::controller::Controller::execute`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionResult {
    /// `P\r` - set-style command accepted
    Success,

    /// `Ok{payload}\r` - query answered
    SuccessWithData(String),

    /// `F\r`, or a reply of no known shape (`raw` holds it for diagnostics)
    Failure { raw: Option<Vec<u8>> },

    /// No terminator within the read timeout
    Timeout,
}

impl TransactionResult {
    /// Explicit `F` reply
    pub fn rejected() -> Self {
        TransactionResult::Failure { raw: None }
    }

    /// Reply bytes that matched none of `P`, `Ok…`, `F`
    pub fn malformed(raw: impl Into<Vec<u8>>) -> Self {
        TransactionResult::Failure {
            raw: Some(raw.into()),
        }
    }
}
