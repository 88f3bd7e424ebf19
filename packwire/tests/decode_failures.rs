//! Decode failure table: truncation, oversized counts, partial trailing
//! elements, and leftover bytes. On failure nothing outside the supplied
//! buffer is touched and no partial value escapes.

use packwire::{Decode, Encode, Error, Greedy, Limited, Pretty};
use rstest::rstest;

#[derive(Debug, Default, PartialEq, Encode, Decode, Pretty)]
struct Pair {
    x: u32,
    y: u32,
}

#[derive(Debug, Default, PartialEq, Encode, Decode, Pretty)]
struct Samples {
    values: Vec<u32>,
}

#[derive(Debug, Default, PartialEq, Encode, Decode, Pretty)]
struct Window {
    values: Limited<u32, 2>,
}

#[derive(Debug, Default, PartialEq, Encode, Decode, Pretty)]
struct Tail {
    header: u16,
    rest: Greedy<u32>,
}

#[test]
fn every_truncation_of_a_scalar_message_fails() {
    let wire = Pair { x: 1, y: 2 }.to_bytes();
    for len in 0..wire.len() {
        assert_eq!(Pair::from_bytes(&wire[..len]), Err(Error::BufferTooShort));
    }
}

#[rstest]
#[case(0)]
#[case(3)]
#[case(5)]
#[case(11)]
fn truncated_dynamic_payload_fails(#[case] len: usize) {
    let wire = Samples { values: vec![1, 2] }.to_bytes();
    assert_eq!(wire.len(), 12);
    assert_eq!(
        Samples::from_bytes(&wire[..len]),
        Err(Error::BufferTooShort)
    );
}

#[test]
fn count_demanding_more_than_the_buffer_fails() {
    assert_eq!(
        Samples::from_bytes(b"\x03\x00\x00\x00\x01\x00\x00\x00\x02\x00\x00\x00"),
        Err(Error::BufferTooShort)
    );
}

#[test]
fn pathological_count_fails_without_allocating() {
    assert_eq!(
        Samples::from_bytes(b"\xff\xff\xff\xff\x01\x00\x00\x00"),
        Err(Error::BufferTooShort)
    );
}

#[rstest]
#[case(3)]
#[case(8)]
#[case(11)]
fn truncated_limited_region_fails(#[case] len: usize) {
    let wire = Window {
        values: vec![1].into(),
    }
    .to_bytes();
    assert_eq!(wire.len(), 12);
    assert_eq!(Window::from_bytes(&wire[..len]), Err(Error::BufferTooShort));
}

#[test]
fn oversized_limited_count_is_clamped_not_failed() {
    let decoded =
        Window::from_bytes(b"\x07\x00\x00\x00\x01\x00\x00\x00\x02\x00\x00\x00").unwrap();
    assert_eq!(decoded.values.as_slice(), &[1, 2]);
}

#[rstest]
#[case(3)]
#[case(5)]
#[case(9)]
fn greedy_partial_trailing_element_fails(#[case] len: usize) {
    // Two bytes of header, then whole u32 elements; any other length
    // leaves a fractional element behind.
    let wire = Tail {
        header: 1,
        rest: vec![2, 3].into(),
    }
    .to_bytes();
    assert_eq!(wire.len(), 10);
    assert_eq!(Tail::from_bytes(&wire[..len]), Err(Error::BufferTooShort));
}

#[test]
fn whole_buffer_decode_rejects_trailing_bytes() {
    let mut wire = Pair { x: 1, y: 2 }.to_bytes();
    wire.push(0);
    assert_eq!(Pair::from_bytes(&wire), Err(Error::TrailingBytes));
}

#[test]
fn encode_into_undersized_destination_fails() {
    let pair = Pair { x: 1, y: 2 };
    let mut dst = [0xffu8; 7];
    assert_eq!(pair.encode_into(&mut dst), Err(Error::BufferTooShort));
    // The destination is left untouched.
    assert_eq!(dst, [0xff; 7]);
}
