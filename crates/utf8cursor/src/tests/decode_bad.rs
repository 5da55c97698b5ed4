use rstest::rstest;

use crate::{DecodeOptions, Malformation, Scalar, decode_one, decode_one_with};

#[rstest]
#[case(b"\x80", Malformation::UnexpectedContinuation, b"\x80")]
#[case(b"\xBFabc", Malformation::UnexpectedContinuation, b"\xBF")]
#[case(b"\xF8\x88\x80\x80\x80", Malformation::InvalidLead, b"\xF8")]
#[case(b"\xFF", Malformation::InvalidLead, b"\xFF")]
#[case(b"\xC3A", Malformation::InvalidContinuation { offset: 1 }, b"\xC3A")]
#[case(b"\xE2\x82A", Malformation::InvalidContinuation { offset: 2 }, b"\xE2\x82A")]
#[case(b"\xF0\x9F\x91\xC3", Malformation::InvalidContinuation { offset: 3 }, b"\xF0\x9F\x91\xC3")]
#[case(b"\xF0", Malformation::Truncated { needed: 4, available: 1 }, b"\xF0")]
#[case(b"\xE2\x82", Malformation::Truncated { needed: 3, available: 2 }, b"\xE2\x82")]
#[case(b"\xF0\x9F\x91", Malformation::Truncated { needed: 4, available: 3 }, b"\xF0\x9F\x91")]
#[case(b"\xC0\x80", Malformation::Overlong { value: 0 }, b"\xC0\x80")]
#[case(b"\xC1\xBF", Malformation::Overlong { value: 0x7F }, b"\xC1\xBF")]
#[case(b"\xE0\x80\x80", Malformation::Overlong { value: 0 }, b"\xE0\x80\x80")]
#[case(b"\xE0\x9F\xBF", Malformation::Overlong { value: 0x7FF }, b"\xE0\x9F\xBF")]
#[case(b"\xF0\x80\x80\x80", Malformation::Overlong { value: 0 }, b"\xF0\x80\x80\x80")]
#[case(b"\xF0\x8F\xBF\xBF", Malformation::Overlong { value: 0xFFFF }, b"\xF0\x8F\xBF\xBF")]
fn rejects_malformed(#[case] input: &[u8], #[case] reason: Malformation, #[case] bytes: &[u8]) {
    let err = decode_one(input).unwrap().unwrap_err();
    assert_eq!(err.reason(), reason);
    assert_eq!(err.bytes(), bytes);
    assert_eq!(err.to_sentinel(), 0xFFFF);
}

#[test]
fn truncation_never_reads_past_window() {
    let backing = b"\xF0\x9F\x91\x8D";
    for end in 1..backing.len() {
        let err = decode_one(&backing[..end]).unwrap().unwrap_err();
        assert_eq!(
            err.reason(),
            Malformation::Truncated {
                needed: 4,
                available: end
            }
        );
    }
}

#[rstest]
#[case(b"\xED\xA0\x80", Malformation::Surrogate { value: 0xD800 })]
#[case(b"\xED\xBF\xBF", Malformation::Surrogate { value: 0xDFFF })]
#[case(b"\xF4\x90\x80\x80", Malformation::OutOfRange { value: 0x11_0000 })]
#[case(b"\xF5\x80\x80\x80", Malformation::OutOfRange { value: 0x14_0000 })]
fn strict_rejections(#[case] input: &[u8], #[case] reason: Malformation) {
    let err = decode_one_with(input, &DecodeOptions::strict())
        .unwrap()
        .unwrap_err();
    assert_eq!(err.reason(), reason);
    assert_eq!(err.bytes(), input);
}

#[test]
fn options_are_independent() {
    let surrogates_only = DecodeOptions {
        reject_surrogates: true,
        ..Default::default()
    };
    assert!(
        decode_one_with(b"\xED\xA0\x80", &surrogates_only)
            .unwrap()
            .is_err()
    );
    assert!(
        decode_one_with(b"\xF4\x90\x80\x80", &surrogates_only)
            .unwrap()
            .is_ok()
    );
}

#[test]
fn lone_lead_agrees_with_lead_length() {
    for lead in 0..=u8::MAX {
        let decoded = decode_one(&[lead]).unwrap();
        match Scalar::len_for_lead(lead) {
            None => assert!(matches!(
                decoded.unwrap_err().reason(),
                Malformation::UnexpectedContinuation | Malformation::InvalidLead
            )),
            Some(1) => assert_eq!(decoded.unwrap().len, 1),
            Some(needed) => assert_eq!(
                decoded.unwrap_err().reason(),
                Malformation::Truncated {
                    needed,
                    available: 1
                }
            ),
        }
    }
}
