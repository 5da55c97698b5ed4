//! Cursor-based UTF-8 decoding and encoding.
//!
//! Every operation is a pure function of a caller-owned byte slice and a byte
//! offset into it. Nothing is buffered between calls and nothing reads past
//! the bounds the caller supplies.
//!
//! ```rust
//! use utf8cursor::{TO_TERMINATOR, count_code_points, decode_next};
//!
//! let text = "h\u{20AC}llo".as_bytes();
//! assert_eq!(count_code_points(text, TO_TERMINATOR), 5);
//!
//! let step = decode_next(text, 1, text.len()).unwrap();
//! assert_eq!(step.code_point, Ok(0x20AC));
//! assert_eq!(step.next, 4);
//! ```
//!
//! Malformed input never stops a traversal: [`decode_next`] reports a
//! [`MalformedSequence`] and moves forward by a single byte.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod code_points;
mod cursor;
mod decode;
mod encode;
mod error;
mod options;

#[cfg(test)]
mod tests;

pub use code_points::{CodePoints, count_code_points, count_code_points_with};
pub use cursor::{Step, TO_TERMINATOR, advance_one, decode_next, decode_next_with, retreat_one};
pub use decode::{Scalar, decode_one, decode_one_with, is_lead_byte};
pub use encode::{encode_into, encode_one, encoded_len, push_code_point};
pub use error::{EncodeError, Malformation, MalformedSequence, SequenceBytes};
pub use options::DecodeOptions;
