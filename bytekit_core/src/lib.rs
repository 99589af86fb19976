//! Small binary-data utilities.
//!
//! - [`hex`]: byte sequence to/from hexadecimal text, with optional `0x`
//!   leader and eight-digit grouping. Malformed hex decodes to `None`.
//! - [`structured`]: JSON object bytes to a generic
//!   [`KeyValueMapping`](structured::KeyValueMapping). Malformed input fails
//!   with a [`ParseError`](structured::ParseError).
//! - [`data`]: the byte-array view and the [`DataExt`] extension trait that
//!   exposes all of the above as methods on byte slices.
//!
//! Every operation is pure and synchronous.

pub mod data;
pub mod hex;
pub mod structured;

pub use data::{DataExt, bytes_array};
pub use hex::HexOptions;
pub use structured::{KeyValueMapping, ParseError, Value};
