mod declare;

use syn::{parse_macro_input, Item};

#[proc_macro_derive(ChoiceEnum, attributes(choice))]
pub fn derive_choice_enum(item: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(item as Item);

    declare::derive_choice_enum_impl(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
