//! Protocol Module
//!
//! Defines the RS-232 text protocol spoken by the projector.
//!
//! ## Protocol Format
//!
//! One command line out, one reply line back, both terminated by `\r`.
//! There is no pipelining: the link is half-duplex per transaction.
//!
//! ### Command
//! ```text
//! ~{id:02}{opcode}[ {argument}]\r
//! ```
//! - `id`: `00` broadcast, `01`-`99` a specific unit
//! - `opcode`: feature code from the catalog (`124`, `21`, ...)
//! - `argument`: only for parameterized operations
//!
//! ### Reply
//! - `P\r`: accepted
//! - `Ok{payload}\r`: answered, payload decoding is per feature
//! - `F\r`: rejected
//!
//! ### Example
//! ```text
//! TX ~00124 1\r   (query power)
//! RX Ok1\r        (power on)
//! ```

mod command;
mod response;
mod codec;

pub use command::{CommandFrame, DeviceId};
pub use response::TransactionResult;
pub use codec::{
    decode_reply, encode_command, escape_frame, hex_frame, read_reply, write_command,
    MAX_REPLY_SIZE, TERMINATOR,
};
