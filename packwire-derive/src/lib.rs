//! Derive macros for the packwire message codec.
//!
//! The derives compose a message's codec field by field in declaration
//! order, which is exactly the wire layout: fields back-to-back with no
//! padding. They are re-exported from the `packwire` crate; depend on that
//! crate, not on this one.

#![deny(unused_must_use, unsafe_code, unused_crate_dependencies, missing_docs)]

extern crate proc_macro;

mod decode;
mod encode;
mod fixed_size;
mod pretty;

use self::{
    decode::decode_derive,
    encode::encode_derive,
    fixed_size::fixed_size_derive,
    pretty::pretty_derive,
};

synstructure::decl_derive!(
    [Encode] =>
    /// Derives `Encode` for the given message `struct`.
    encode_derive
);
synstructure::decl_derive!(
    [Decode] =>
    /// Derives `Decode` for the given message `struct`.
    decode_derive
);
synstructure::decl_derive!(
    [FixedSize] =>
    /// Derives `FixedSize` for a `struct` whose fields are all fixed-size.
    fixed_size_derive
);
synstructure::decl_derive!(
    [Pretty] =>
    /// Derives `Pretty` and `Print` for the given message `struct` with
    /// named fields.
    pretty_derive
);
