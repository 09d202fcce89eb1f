#![no_main]

use arbitrary::Arbitrary;
use decbytes::{ChunkedSource, DecodeError, FormatError, Strategy, decode_with};
use libfuzzer_sys::fuzz_target;

/// Bytes that make up well-formed input, weighted toward digits.
const ALPHABET: &[u8] = b"0123456789 0123456789 ";

#[derive(Debug, Arbitrary)]
struct Case {
    /// Raw payload; bytes outside the alphabet are kept one time in eight
    /// so malformed input is exercised too.
    payload: Vec<u8>,
    /// Read sizes for the chunked source.
    sizes: Vec<u8>,
}

fn normalize(payload: &[u8]) -> Vec<u8> {
    payload
        .iter()
        .map(|&b| {
            if b % 8 == 0 {
                b
            } else {
                ALPHABET[usize::from(b) % ALPHABET.len()]
            }
        })
        .collect()
}

fn summarize(result: Result<Vec<u8>, DecodeError>) -> Result<Vec<u8>, Option<FormatError>> {
    result.map_err(|err| {
        assert!(!matches!(err, DecodeError::Io(_)), "in-memory source failed: {err}");
        err.as_format().copied()
    })
}

fuzz_target!(|case: Case| {
    let input = normalize(&case.payload);
    let sizes: Vec<usize> = case.sizes.iter().map(|&s| usize::from(s)).collect();

    let mut whole = input.as_slice();
    let expected = summarize(decode_with(Strategy::WholeInput, &mut whole));

    for strategy in Strategy::ALL {
        let actual = if strategy.reads_to_end() {
            let mut source = ChunkedSource::with_sizes(&input, sizes.clone());
            summarize(decode_with(strategy, &mut source))
        } else if input.len() < decbytes::SHARED_INPUT_CAPACITY {
            let mut source = input.as_slice();
            summarize(decode_with(strategy, &mut source))
        } else {
            continue;
        };

        match (&expected, &actual) {
            // Overflow needs more than 4096 tokens, i.e. at least 8193 bytes.
            (_, Err(None)) if strategy.has_fixed_output() => {
                assert!(input.len() > 2 * 4096, "{strategy} overflowed on short input");
            }
            _ => assert_eq!(expected, actual, "{strategy} disagrees on {input:?}"),
        }
    }
});
