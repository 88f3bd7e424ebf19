use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

fn decode_struct(s: &synstructure::Structure) -> TokenStream2 {
    assert_eq!(s.variants().len(), 1, "structs must have one variant");

    let variant: &synstructure::VariantInfo = &s.variants()[0];
    let decode_fields = variant.construct(|field, _| {
        let ty = &field.ty;
        quote! {
            <#ty as packwire::Decode>::decode(buffer)?
        }
    });

    s.gen_impl(quote! {
        gen impl packwire::Decode for @Self {
            fn decode<I: packwire::Input + ?Sized>(buffer: &mut I) -> ::core::result::Result<Self, packwire::Error> {
                ::core::result::Result::Ok(#decode_fields)
            }
        }
    })
}

/// Derives `Decode` for the given message `struct`.
pub fn decode_derive(mut s: synstructure::Structure) -> TokenStream2 {
    s.add_bounds(synstructure::AddBounds::Fields)
        .underscore_const(true);
    match s.ast().data {
        syn::Data::Struct(_) => decode_struct(&s),
        _ => panic!(
            "`Decode` is derived for message `struct`s; wire enumerations use the `enumeration!` macro"
        ),
    }
}
