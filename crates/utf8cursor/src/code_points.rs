use core::iter::FusedIterator;

use crate::{cursor::decode_next_with, error::MalformedSequence, options::DecodeOptions};

/// Iterator over the code points of a byte buffer, yielding each one with the
/// offset it starts at.
///
/// Malformed sequences are yielded as errors and skipped one byte at a time,
/// so the iterator visits every byte and always terminates.
///
/// ```rust
/// use utf8cursor::CodePoints;
///
/// let mut it = CodePoints::new(b"a\xFFb");
/// assert_eq!(it.next(), Some((0, Ok(0x61))));
/// assert!(it.next().unwrap().1.is_err());
/// assert_eq!(it.next(), Some((2, Ok(0x62))));
/// assert_eq!(it.next(), None);
/// ```
#[derive(Debug, Clone)]
pub struct CodePoints<'a> {
    buf: &'a [u8],
    cursor: usize,
    options: DecodeOptions,
}

impl<'a> CodePoints<'a> {
    /// Iterates over all of `buf` with the default options.
    #[must_use]
    pub fn new(buf: &'a [u8]) -> Self {
        Self::with_options(buf, DecodeOptions::default())
    }

    /// Iterates over all of `buf` with the given options.
    #[must_use]
    pub fn with_options(buf: &'a [u8], options: DecodeOptions) -> Self {
        Self {
            buf,
            cursor: 0,
            options,
        }
    }

    /// Offset of the next code point to be yielded.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.cursor
    }

    /// The bytes not yet visited.
    #[must_use]
    pub fn as_bytes(&self) -> &'a [u8] {
        &self.buf[self.cursor..]
    }
}

impl Iterator for CodePoints<'_> {
    type Item = (usize, Result<u32, MalformedSequence>);

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.cursor;
        let step = decode_next_with(self.buf, start, self.buf.len(), &self.options)?;
        self.cursor = step.next;
        Some((start, step.code_point))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.buf.len() - self.cursor;
        (remaining.div_ceil(4), Some(remaining))
    }
}

impl FusedIterator for CodePoints<'_> {}

/// Counts the code points in `buf[..limit]` with the default options.
///
/// Counting stops early at the first NUL byte, which is not counted. Each
/// malformed byte counts as one code point.
///
/// ```rust
/// use utf8cursor::{TO_TERMINATOR, count_code_points};
///
/// assert_eq!(count_code_points(b"hello", TO_TERMINATOR), 5);
/// assert_eq!(count_code_points(b"hello", 2), 2);
/// assert_eq!(count_code_points(b"hi\0there", TO_TERMINATOR), 2);
/// ```
#[must_use]
pub fn count_code_points(buf: &[u8], limit: usize) -> usize {
    count_code_points_with(buf, limit, &DecodeOptions::default())
}

/// Like [`count_code_points`], with explicit decode options.
#[must_use]
pub fn count_code_points_with(buf: &[u8], limit: usize, options: &DecodeOptions) -> usize {
    let end = limit.min(buf.len());
    CodePoints::with_options(&buf[..end], *options)
        .take_while(|(_, code_point)| *code_point != Ok(0))
        .count()
}
