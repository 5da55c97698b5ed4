//! Decoding of a single UTF-8 sequence.
//!
//! The input slice is the whole readable window: its first byte is the read
//! position and its length is the end bound. Nothing past the slice is ever
//! inspected, so a truncated sequence at the end of the window is reported as
//! malformed rather than completed from adjacent memory.

use crate::{
    error::{Malformation, MalformedSequence},
    options::DecodeOptions,
};

/// A successfully decoded code point and the number of bytes it occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scalar {
    /// The decoded value. Not necessarily a valid `char` unless decoded with
    /// [`DecodeOptions::strict`].
    pub value: u32,
    /// Encoded length in bytes, `1..=4`.
    pub len: usize,
}

impl Scalar {
    /// Sequence length announced by `lead`, or `None` if `lead` cannot start a
    /// sequence.
    #[must_use]
    pub const fn len_for_lead(lead: u8) -> Option<usize> {
        match lead {
            0x00..=0x7F => Some(1),
            0xC0..=0xDF => Some(2),
            0xE0..=0xEF => Some(3),
            0xF0..=0xF7 => Some(4),
            0x80..=0xBF | 0xF8..=0xFF => None,
        }
    }
}

/// Returns `true` unless `byte` is a continuation byte (`10xxxxxx`).
#[must_use]
pub const fn is_lead_byte(byte: u8) -> bool {
    byte & 0xC0 != 0x80
}

/// Decodes the sequence at the start of `bytes` with the default (lenient)
/// options.
///
/// Returns `None` when `bytes` is empty. A failure consumes nothing.
///
/// ```rust
/// use utf8cursor::{Scalar, decode_one};
///
/// assert_eq!(decode_one(b"\xE2\x82\xACrest"), Some(Ok(Scalar { value: 0x20AC, len: 3 })));
/// assert!(decode_one(b"\xC0\x80").unwrap().is_err());
/// assert_eq!(decode_one(b""), None);
/// ```
#[must_use]
pub fn decode_one(bytes: &[u8]) -> Option<Result<Scalar, MalformedSequence>> {
    decode_one_with(bytes, &DecodeOptions::default())
}

/// Decodes the sequence at the start of `bytes`.
#[must_use]
pub fn decode_one_with(
    bytes: &[u8],
    options: &DecodeOptions,
) -> Option<Result<Scalar, MalformedSequence>> {
    let &lead = bytes.first()?;
    Some(decode_sequence(bytes, lead, *options))
}

fn decode_sequence(
    bytes: &[u8],
    lead: u8,
    options: DecodeOptions,
) -> Result<Scalar, MalformedSequence> {
    let Some(len) = Scalar::len_for_lead(lead) else {
        let reason = if is_lead_byte(lead) {
            Malformation::InvalidLead
        } else {
            Malformation::UnexpectedContinuation
        };
        return Err(MalformedSequence::new(&bytes[..1], reason));
    };
    let (min, payload) = match len {
        1 => {
            return Ok(Scalar {
                value: u32::from(lead),
                len,
            });
        }
        2 => (0x80, lead & 0x1F),
        3 => (0x800, lead & 0x0F),
        _ => (0x1_0000, lead & 0x07),
    };

    let mut value = u32::from(payload);
    for offset in 1..len {
        let Some(&byte) = bytes.get(offset) else {
            return Err(MalformedSequence::new(
                bytes,
                Malformation::Truncated {
                    needed: len,
                    available: bytes.len(),
                },
            ));
        };
        if is_lead_byte(byte) {
            return Err(MalformedSequence::new(
                &bytes[..=offset],
                Malformation::InvalidContinuation { offset },
            ));
        }
        value = (value << 6) | u32::from(byte & 0x3F);
    }

    let sequence = &bytes[..len];
    if value < min {
        return Err(MalformedSequence::new(
            sequence,
            Malformation::Overlong { value },
        ));
    }
    if options.reject_surrogates && (0xD800..=0xDFFF).contains(&value) {
        return Err(MalformedSequence::new(
            sequence,
            Malformation::Surrogate { value },
        ));
    }
    if options.reject_out_of_range && value > 0x10_FFFF {
        return Err(MalformedSequence::new(
            sequence,
            Malformation::OutOfRange { value },
        ));
    }

    Ok(Scalar { value, len })
}
