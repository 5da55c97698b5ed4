//! Cursor movement over a byte buffer.
//!
//! A cursor is a byte offset into the buffer. The operations here take the
//! cursor by value and return the new position; callers that share a cursor
//! across threads must synchronize it themselves.

use crate::{
    decode::{decode_one_with, is_lead_byte},
    error::MalformedSequence,
    options::DecodeOptions,
};

/// A limit that reads up to the end of the buffer.
///
/// Counting stops at the first NUL byte, so a NUL-terminated buffer can be
/// walked without knowing its length.
pub const TO_TERMINATOR: usize = usize::MAX;

/// One decode step: the decoded value and where the cursor moves next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Cursor position after this step. Always greater than the position the
    /// step started from.
    pub next: usize,
    /// The decoded code point, or the reason decoding failed.
    pub code_point: Result<u32, MalformedSequence>,
}

impl Step {
    /// The decoded value, with failures collapsed into
    /// [`MalformedSequence::SENTINEL`].
    #[must_use]
    pub fn code_point_or_sentinel(&self) -> u32 {
        self.code_point.unwrap_or_else(MalformedSequence::to_sentinel)
    }
}

/// Decodes the code point at `cursor` with the default options.
///
/// `limit` is the exclusive end offset; it is clamped to the buffer length,
/// so [`TO_TERMINATOR`] reads to the end of `buf`. Returns `None` when the
/// cursor is already at or past the end.
///
/// On success the cursor moves past the sequence. On failure it moves forward
/// by exactly one byte, so a loop over `decode_next` always terminates.
#[must_use]
pub fn decode_next(buf: &[u8], cursor: usize, limit: usize) -> Option<Step> {
    decode_next_with(buf, cursor, limit, &DecodeOptions::default())
}

/// Like [`decode_next`], with explicit decode options.
#[must_use]
pub fn decode_next_with(
    buf: &[u8],
    cursor: usize,
    limit: usize,
    options: &DecodeOptions,
) -> Option<Step> {
    let end = limit.min(buf.len());
    let window = buf.get(cursor..end)?;
    let step = match decode_one_with(window, options)? {
        Ok(scalar) => Step {
            next: cursor + scalar.len,
            code_point: Ok(scalar.value),
        },
        Err(err) => Step {
            next: cursor + 1,
            code_point: Err(err),
        },
    };
    Some(step)
}

fn is_boundary(buf: &[u8], at: usize) -> bool {
    buf.get(at).is_none_or(|&b| is_lead_byte(b))
}

/// Moves `cursor` forward past one code point without decoding it.
///
/// Steps over at most three continuation bytes and never moves past `limit`
/// (clamped to the buffer length). The result is structural only: malformed
/// input is skipped, not reported.
///
/// ```rust
/// use utf8cursor::{TO_TERMINATOR, advance_one, retreat_one};
///
/// let text = "a€b".as_bytes();
/// assert_eq!(advance_one(text, 1, TO_TERMINATOR), 4);
/// assert_eq!(retreat_one(text, 4), 1);
/// ```
#[must_use]
pub fn advance_one(buf: &[u8], cursor: usize, limit: usize) -> usize {
    let limit = limit.min(buf.len());
    let mut cursor = cursor.min(buf.len());
    for _ in 0..3 {
        if cursor >= limit {
            return cursor;
        }
        cursor += 1;
        if is_boundary(buf, cursor) {
            return cursor;
        }
    }
    if cursor < limit {
        cursor += 1;
    }
    cursor
}

/// Moves `cursor` back to the start of the previous code point without
/// decoding it.
///
/// Steps back over at most three continuation bytes and stops at offset 0.
#[must_use]
pub fn retreat_one(buf: &[u8], cursor: usize) -> usize {
    let mut cursor = cursor.min(buf.len());
    for _ in 0..3 {
        if cursor == 0 {
            return cursor;
        }
        cursor -= 1;
        if is_boundary(buf, cursor) {
            return cursor;
        }
    }
    cursor.saturating_sub(1)
}
