//! Packed little-endian message codec for schemas fixed at build time.
//!
//! A message is a struct of public fields: fixed-width scalars, fixed
//! arrays (`[T; N]`), dynamic arrays (`Vec<T>`), capacity-limited arrays
//! ([`Limited`]), a trailing greedy array ([`Greedy`]), enumerations
//! (declared with [`enumeration!`]), and nested messages. Deriving
//! [`Encode`], [`Decode`] and [`Pretty`] produces the codec surface the
//! schema compiler would emit: `encode_into`, `byte_size`, `from_bytes` and
//! `print`.
//!
//! The wire layout is byte-packed with no padding; multi-byte values are
//! little-endian and counts are 32-bit.
//!
//! ```
//! use packwire::{Decode, Encode, Pretty, Print};
//!
//! #[derive(Debug, Default, PartialEq, Encode, Decode, Pretty)]
//! struct Heartbeat {
//!     sequence: u32,
//!     payload: Vec<u8>,
//! }
//!
//! let beat = Heartbeat { sequence: 7, payload: vec![0xaa, 0xbb] };
//! assert_eq!(beat.byte_size(), 10);
//! assert_eq!(
//!     beat.to_bytes(),
//!     b"\x07\x00\x00\x00\x02\x00\x00\x00\xaa\xbb"
//! );
//! assert_eq!(Heartbeat::from_bytes(&beat.to_bytes()).unwrap(), beat);
//! assert_eq!(beat.print(), "sequence: 7\npayload: 170\npayload: 187\n");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

extern crate alloc;

mod arrays;
mod codec;
mod enumeration;
mod pretty;

pub use arrays::{Greedy, Limited, COUNT_SIZE};
pub use codec::{Decode, Encode, Error, FixedSize, Input, Output, SizeCounter};
pub use pretty::{Pretty, Print, Printer};

pub use packwire_derive::{Decode, Encode, FixedSize, Pretty};
