use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

fn fixed_size_struct(s: &synstructure::Structure) -> TokenStream2 {
    assert_eq!(s.variants().len(), 1, "structs must have one variant");

    // Packed layout: the wire size of a composite is the plain sum of its
    // field sizes. Does not compile when a field has no constant size.
    let size = s.variants()[0]
        .bindings()
        .iter()
        .fold(quote! { 0usize }, |sum, binding| {
            let ty = &binding.ast().ty;
            quote! { #sum + <#ty as packwire::FixedSize>::SIZE }
        });

    s.gen_impl(quote! {
        gen impl packwire::FixedSize for @Self {
            const SIZE: usize = #size;
        }
    })
}

/// Derives `FixedSize` for a `struct` whose fields are all fixed-size.
pub fn fixed_size_derive(mut s: synstructure::Structure) -> TokenStream2 {
    s.add_bounds(synstructure::AddBounds::Fields)
        .underscore_const(true);
    match s.ast().data {
        syn::Data::Struct(_) => fixed_size_struct(&s),
        _ => panic!("`FixedSize` is derived for message `struct`s"),
    }
}
