use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

fn pretty_struct(s: &synstructure::Structure) -> TokenStream2 {
    assert_eq!(s.variants().len(), 1, "structs must have one variant");

    let variant: &synstructure::VariantInfo = &s.variants()[0];
    let print_fields = variant.each(|binding| {
        let name = binding
            .ast()
            .ident
            .as_ref()
            .expect("`Pretty` is derived for structs with named fields")
            .to_string();
        quote! {
            packwire::Pretty::pretty(#binding, #name, out);
        }
    });

    let print_impl = s.gen_impl(quote! {
        gen impl packwire::Print for @Self {
            fn print_fields(&self, out: &mut packwire::Printer) {
                match self {
                    #print_fields
                };
            }
        }
    });

    // As a field of an enclosing message the struct renders as a block;
    // element renderings reuse the field's name.
    let pretty_impl = s.gen_impl(quote! {
        gen impl packwire::Pretty for @Self {
            fn pretty(&self, name: &str, out: &mut packwire::Printer) {
                out.open(name);
                packwire::Print::print_fields(self, out);
                out.close();
            }
        }
    });

    quote! {
        #print_impl
        #pretty_impl
    }
}

/// Derives `Pretty` and `Print` for the given message `struct`.
pub fn pretty_derive(mut s: synstructure::Structure) -> TokenStream2 {
    s.add_bounds(synstructure::AddBounds::Fields)
        .underscore_const(true);
    match s.ast().data {
        syn::Data::Struct(_) => pretty_struct(&s),
        _ => panic!("`Pretty` is derived for message `struct`s with named fields"),
    }
}
