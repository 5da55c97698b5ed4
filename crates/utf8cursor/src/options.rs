/// Validation options for the decoder.
///
/// The defaults are lenient: any well-formed bit pattern of the right length
/// decodes, including UTF-16 surrogate halves and 4-byte values above
/// U+10FFFF. Overlong encodings are always rejected.
///
/// # Examples
///
/// ```rust
/// use utf8cursor::{DecodeOptions, decode_one_with};
///
/// let surrogate = b"\xED\xA0\x80";
/// assert!(decode_one_with(surrogate, &DecodeOptions::default()).unwrap().is_ok());
/// assert!(decode_one_with(surrogate, &DecodeOptions::strict()).unwrap().is_err());
/// ```
///
/// # Default
///
/// All options default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Whether to reject 3-byte sequences that decode to a surrogate
    /// (U+D800..=U+DFFF).
    ///
    /// # Default
    ///
    /// `false`
    pub reject_surrogates: bool,

    /// Whether to reject 4-byte sequences that decode above U+10FFFF.
    ///
    /// # Default
    ///
    /// `false`
    pub reject_out_of_range: bool,
}

impl DecodeOptions {
    /// Options that accept exactly the sequences RFC 3629 calls valid.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            reject_surrogates: true,
            reject_out_of_range: true,
        }
    }
}
