use core::fmt;

use bstr::BStr;
use thiserror::Error;

/// A decode failure: the bytes at the read position do not form a sequence
/// the decoder accepts.
///
/// This is the only error a decode operation reports. It never consumes
/// input; cursor-level operations recover from it by skipping one byte.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("malformed UTF-8 sequence [{bytes}]: {reason}")]
pub struct MalformedSequence {
    pub(crate) bytes: SequenceBytes,
    pub(crate) reason: Malformation,
}

impl MalformedSequence {
    /// The code point that legacy callers receive in place of a decode
    /// failure. It is also the valid noncharacter U+FFFF, so it cannot tell
    /// the two apart; prefer matching on the `Result`.
    pub const SENTINEL: u32 = 0xFFFF;

    pub(crate) fn new(bytes: &[u8], reason: Malformation) -> Self {
        Self {
            bytes: SequenceBytes::new(bytes),
            reason,
        }
    }

    /// Why the sequence was rejected.
    #[must_use]
    pub fn reason(&self) -> Malformation {
        self.reason
    }

    /// The bytes that were examined before the sequence was rejected.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.bytes.as_bytes()
    }

    /// Collapses the error into [`MalformedSequence::SENTINEL`].
    #[must_use]
    pub fn to_sentinel(self) -> u32 {
        Self::SENTINEL
    }
}

/// The reason a sequence was rejected by the decoder.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Malformation {
    /// A continuation byte (`10xxxxxx`) appeared where a lead byte was
    /// expected.
    #[error("unexpected continuation byte")]
    UnexpectedContinuation,
    /// The lead byte is `0xF8..=0xFF`, which starts no UTF-8 sequence.
    #[error("invalid lead byte")]
    InvalidLead,
    /// The byte at `offset` within the sequence is not a continuation byte.
    #[error("expected continuation byte at offset {offset}")]
    InvalidContinuation {
        /// Offset from the lead byte.
        offset: usize,
    },
    /// The input ended before the sequence was complete.
    #[error("truncated sequence: needed {needed} bytes, {available} available")]
    Truncated {
        /// Length announced by the lead byte.
        needed: usize,
        /// Bytes left before the end bound.
        available: usize,
    },
    /// The value fits in a shorter encoding.
    #[error("overlong encoding of U+{value:04X}")]
    Overlong {
        /// The decoded value.
        value: u32,
    },
    /// The value is a UTF-16 surrogate half. Only reported in strict mode.
    #[error("surrogate U+{value:04X}")]
    Surrogate {
        /// The decoded value.
        value: u32,
    },
    /// The value exceeds U+10FFFF. Only reported in strict mode.
    #[error("U+{value:X} is beyond U+10FFFF")]
    OutOfRange {
        /// The decoded value.
        value: u32,
    },
}

/// Up to four bytes of a rejected sequence.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct SequenceBytes {
    buf: [u8; 4],
    len: u8,
}

impl SequenceBytes {
    #[allow(clippy::cast_possible_truncation)]
    fn new(bytes: &[u8]) -> Self {
        let len = bytes.len().min(4);
        let mut buf = [0; 4];
        buf[..len].copy_from_slice(&bytes[..len]);
        Self {
            buf,
            len: len as u8,
        }
    }

    /// The stored bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..usize::from(self.len)]
    }
}

impl fmt::Display for SequenceBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.as_bytes().iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{byte:02X}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for SequenceBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(BStr::new(self.as_bytes()), f)
    }
}

/// Errors from encoding into a caller-sized buffer.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// The destination cannot hold the encoded sequence.
    #[error("destination holds {capacity} bytes but the encoding needs {needed}")]
    BufferTooSmall {
        /// Bytes the encoding needs.
        needed: usize,
        /// Bytes the destination provides.
        capacity: usize,
    },
}
