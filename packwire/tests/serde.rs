#![cfg(feature = "serde")]

//! The array wrappers stay plain data under serde, independent of the wire
//! codec.

use packwire::{Greedy, Limited};

#[test]
fn limited_bincode_roundtrip() {
    let value: Limited<u32, 4> = vec![1, 2, 3].into();
    let serialized = bincode::serialize(&value).expect("Failed to serialize limited array");
    let deserialized: Limited<u32, 4> =
        bincode::deserialize(&serialized).expect("Failed to deserialize limited array");
    assert_eq!(value, deserialized);
}

#[test]
fn greedy_bincode_roundtrip() {
    let value: Greedy<u8> = vec![1, 2, 3].into();
    let serialized = bincode::serialize(&value).expect("Failed to serialize greedy array");
    let deserialized: Greedy<u8> =
        bincode::deserialize(&serialized).expect("Failed to deserialize greedy array");
    assert_eq!(value, deserialized);
}
