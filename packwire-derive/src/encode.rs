use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

fn encode_struct(s: &synstructure::Structure) -> TokenStream2 {
    assert_eq!(s.variants().len(), 1, "structs must have one variant");

    let variant: &synstructure::VariantInfo = &s.variants()[0];
    let encode_fields = variant.each(|binding| {
        quote! {
            packwire::Encode::encode(#binding, buffer)?;
        }
    });

    s.gen_impl(quote! {
        gen impl packwire::Encode for @Self {
            fn encode<O: packwire::Output + ?Sized>(&self, buffer: &mut O) -> ::core::result::Result<(), packwire::Error> {
                match self {
                    #encode_fields
                };

                ::core::result::Result::Ok(())
            }
        }
    })
}

/// Derives `Encode` for the given message `struct`.
pub fn encode_derive(mut s: synstructure::Structure) -> TokenStream2 {
    s.add_bounds(synstructure::AddBounds::Fields)
        .underscore_const(true);
    match s.ast().data {
        syn::Data::Struct(_) => encode_struct(&s),
        _ => panic!(
            "`Encode` is derived for message `struct`s; wire enumerations use the `enumeration!` macro"
        ),
    }
}
