#![allow(missing_docs)]

use std::io;

use decbytes::{
    AcquireError, DecodeError, DecoderFactory, DecoderOptions, OptionsError, Strategy, decode_with,
};

fn render(strategy: Strategy, input: &[u8]) -> String {
    let mut source = input;
    match decode_with(strategy, &mut source) {
        Ok(output) => format!("ok: {output:?}"),
        Err(err) => err.to_string(),
    }
}

#[test]
fn snapshot_format_errors() {
    insta::assert_snapshot!(render(Strategy::WholeInput, b"1 2x"), @"format error: invalid digit 'x' at byte 3");
    insta::assert_snapshot!(render(Strategy::StreamingFixed, b"12\n"), @r"format error: invalid digit '\n' at byte 2");
    insta::assert_snapshot!(render(Strategy::SharedBuffer, b"1 256"), @"format error: value exceeds 255 at byte 4");
    insta::assert_snapshot!(render(Strategy::StreamingDynamic, b"1  2"), @"format error: empty token at byte 2");
    insta::assert_snapshot!(render(Strategy::Concurrent, b"0 "), @"ok: [0]");
}

#[test]
fn snapshot_overflow_error() {
    let factory = DecoderFactory::new(DecoderOptions {
        output_capacity: 4,
        ..Default::default()
    })
    .unwrap();
    let mut decoder = factory.decoder();
    let mut input: &[u8] = b"1 2 3 4 5";
    let err = decbytes::Decode::decode(&mut decoder, &mut input).unwrap_err();
    insta::assert_snapshot!(err, @"output exceeds buffer capacity of 4 bytes");
}

#[test]
fn snapshot_io_error() {
    let err = DecodeError::from(io::Error::new(io::ErrorKind::ConnectionReset, "connection reset"));
    insta::assert_snapshot!(err, @"read error: connection reset");
}

#[test]
fn snapshot_configuration_errors() {
    insta::assert_snapshot!(AcquireError::Busy, @"shared arena is held by another owner");
    insta::assert_snapshot!(OptionsError::ZeroInputCapacity, @"input capacity must be non-zero");
    insta::assert_snapshot!(OptionsError::ZeroOutputCapacity, @"output capacity must be non-zero");
}
