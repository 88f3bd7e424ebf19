//! Wire enumerations.

/// Declares a wire enumeration.
///
/// Enumerations travel as 32-bit signed little-endian values regardless of
/// the storage width a schema declares for them. The generated type is an
/// open newtype over `i32`: decoding stores any raw value, and checking that
/// a value names a legal enumerator is left to the consumer. The declared
/// enumerators become associated constants and feed the symbolic
/// pretty-print rendering.
///
/// ```
/// packwire::enumeration! {
///     /// Link state reported by a node.
///     pub enum LinkState {
///         Down = 0,
///         Up = 1,
///     }
/// }
///
/// assert_eq!(LinkState::Up.raw(), 1);
/// assert_eq!(LinkState::Up.symbol(), Some("Up"));
/// assert_eq!(LinkState::from(7).symbol(), None);
/// ```
#[macro_export]
macro_rules! enumeration {
    (
        $(#[$attr:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$enumerator_attr:meta])*
                $enumerator:ident = $value:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        $vis struct $name(pub i32);

        impl $name {
            $(
                $(#[$enumerator_attr])*
                #[allow(non_upper_case_globals)]
                pub const $enumerator: Self = Self($value);
            )+

            /// The raw wire value.
            pub const fn raw(self) -> i32 {
                self.0
            }

            /// The symbolic name, when the value maps to a declared
            /// enumerator.
            pub fn symbol(self) -> ::core::option::Option<&'static str> {
                #[allow(unreachable_patterns)]
                match self.0 {
                    $($value => ::core::option::Option::Some(stringify!($enumerator)),)+
                    _ => ::core::option::Option::None,
                }
            }
        }

        impl $crate::FixedSize for $name {
            const SIZE: usize = ::core::mem::size_of::<i32>();
        }

        impl $crate::Encode for $name {
            fn encode<O: $crate::Output + ?Sized>(
                &self,
                buffer: &mut O,
            ) -> ::core::result::Result<(), $crate::Error> {
                $crate::Encode::encode(&self.0, buffer)
            }
        }

        impl $crate::Decode for $name {
            fn decode<I: $crate::Input + ?Sized>(
                buffer: &mut I,
            ) -> ::core::result::Result<Self, $crate::Error> {
                ::core::result::Result::Ok(Self(<i32 as $crate::Decode>::decode(buffer)?))
            }
        }

        impl $crate::Pretty for $name {
            fn pretty(&self, name: &str, out: &mut $crate::Printer) {
                match self.symbol() {
                    ::core::option::Option::Some(symbol) => out.field(name, symbol),
                    ::core::option::Option::None => out.field(name, self.0),
                }
            }
        }

        impl ::core::convert::From<i32> for $name {
            fn from(raw: i32) -> Self {
                Self(raw)
            }
        }

        impl ::core::convert::From<$name> for i32 {
            fn from(value: $name) -> i32 {
                value.0
            }
        }
    };
}
