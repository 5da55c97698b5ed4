use alloc::vec::Vec;

use crate::error::EncodeError;

const TAG_CONT: u8 = 0b1000_0000;
const TAG_TWO_B: u8 = 0b1100_0000;
const TAG_THREE_B: u8 = 0b1110_0000;
const TAG_FOUR_B: u8 = 0b1111_0000;

/// Written in place of any value above U+10FFFF.
const OUT_OF_RANGE: [u8; 3] = [0xEF, 0xBF, 0xBF];

/// Number of bytes [`encode_one`] writes for `code_point`.
#[must_use]
pub const fn encoded_len(code_point: u32) -> usize {
    match code_point {
        0..0x80 => 1,
        0x80..0x800 => 2,
        0x800..0x1_0000 => 3,
        0x1_0000..=0x10_FFFF => 4,
        _ => OUT_OF_RANGE.len(),
    }
}

/// Encodes `code_point` into `dst` and returns the number of bytes written.
///
/// Values above U+10FFFF are written as the encoding of U+FFFF. Surrogate
/// values are packed like any other 3-byte value.
///
/// ```rust
/// use utf8cursor::encode_one;
///
/// let mut buf = [0; 4];
/// assert_eq!(encode_one(0x20AC, &mut buf), 3);
/// assert_eq!(&buf[..3], b"\xE2\x82\xAC");
/// assert_eq!(encode_one(0x11_0000, &mut buf), 3);
/// assert_eq!(&buf[..3], b"\xEF\xBF\xBF");
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn encode_one(code_point: u32, dst: &mut [u8; 4]) -> usize {
    let cp = code_point;
    match (encoded_len(cp), &mut *dst) {
        (_, [a, b, c, _]) if cp > 0x10_FFFF => {
            [*a, *b, *c] = OUT_OF_RANGE;
        }
        (1, [a, ..]) => {
            *a = cp as u8;
        }
        (2, [a, b, ..]) => {
            *a = (cp >> 6 & 0x1F) as u8 | TAG_TWO_B;
            *b = (cp & 0x3F) as u8 | TAG_CONT;
        }
        (3, [a, b, c, _]) => {
            *a = (cp >> 12 & 0x0F) as u8 | TAG_THREE_B;
            *b = (cp >> 6 & 0x3F) as u8 | TAG_CONT;
            *c = (cp & 0x3F) as u8 | TAG_CONT;
        }
        (_, [a, b, c, d]) => {
            *a = (cp >> 18 & 0x07) as u8 | TAG_FOUR_B;
            *b = (cp >> 12 & 0x3F) as u8 | TAG_CONT;
            *c = (cp >> 6 & 0x3F) as u8 | TAG_CONT;
            *d = (cp & 0x3F) as u8 | TAG_CONT;
        }
    }
    encoded_len(cp)
}

/// Encodes `code_point` into the front of `dst`.
///
/// # Errors
///
/// Returns [`EncodeError::BufferTooSmall`] without touching `dst` when the
/// encoding does not fit.
pub fn encode_into(code_point: u32, dst: &mut [u8]) -> Result<usize, EncodeError> {
    let needed = encoded_len(code_point);
    let Some(dst) = dst.get_mut(..needed) else {
        return Err(EncodeError::BufferTooSmall {
            needed,
            capacity: dst.len(),
        });
    };
    let mut buf = [0; 4];
    let written = encode_one(code_point, &mut buf);
    dst.copy_from_slice(&buf[..written]);
    Ok(written)
}

/// Appends the encoding of `code_point` to `dst` and returns the number of
/// bytes appended.
pub fn push_code_point(code_point: u32, dst: &mut Vec<u8>) -> usize {
    let mut buf = [0; 4];
    let written = encode_one(code_point, &mut buf);
    dst.extend_from_slice(&buf[..written]);
    written
}
