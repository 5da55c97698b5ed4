#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use utf8cursor::{
    DecodeOptions, advance_one, count_code_points_with, decode_next_with, decode_one_with,
    encode_one, retreat_one,
};

#[derive(Debug, Arbitrary)]
struct Input {
    strict: bool,
    limit: usize,
    bytes: Vec<u8>,
}

fuzz_target!(|input: Input| {
    let Input {
        strict,
        limit,
        bytes,
    } = input;
    let options = if strict {
        DecodeOptions::strict()
    } else {
        DecodeOptions::default()
    };
    // Keep the limit interesting: mostly inside the buffer, sometimes huge.
    let limit = if limit % 8 == 0 {
        limit
    } else {
        limit % (bytes.len() + 1)
    };
    let end = limit.min(bytes.len());

    // Every step moves forward and stays inside the window.
    let mut cursor = 0;
    let mut calls = 0;
    while let Some(step) = decode_next_with(&bytes, cursor, limit, &options) {
        assert!(step.next > cursor && step.next <= end);
        if let Ok(value) = step.code_point {
            // Whatever decodes must re-encode to the same bytes, unless it is
            // beyond the range the encoder accepts.
            if value <= 0x10_FFFF {
                let mut buf = [0; 4];
                let len = encode_one(value, &mut buf);
                assert_eq!(&buf[..len], &bytes[cursor..step.next]);
            }
        }
        cursor = step.next;
        calls += 1;
    }
    assert_eq!(cursor, end);
    assert!(calls <= end);
    assert!(count_code_points_with(&bytes, limit, &options) <= calls);

    // Strict decoding agrees with the standard library on the first scalar.
    if strict {
        if let Some(Ok(scalar)) = decode_one_with(&bytes, &options) {
            let text = core::str::from_utf8(&bytes[..scalar.len]).unwrap();
            assert_eq!(text.chars().next().map(u32::from), Some(scalar.value));
        }
    }

    // Structural moves stay in bounds and always make progress.
    let mut cursor = 0;
    while cursor < end {
        let next = advance_one(&bytes, cursor, limit);
        assert!(next > cursor && next <= end);
        cursor = next;
    }
    let mut cursor = bytes.len();
    while cursor > 0 {
        let prev = retreat_one(&bytes, cursor);
        assert!(prev < cursor);
        cursor = prev;
    }
});
