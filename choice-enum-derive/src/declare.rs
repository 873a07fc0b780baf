use std::collections::HashSet;

use darling::FromAttributes;
use heck::ToShoutySnakeCase;
use proc_macro2::{Ident, TokenStream};
use quote::quote;
use syn::{ext::IdentExt, spanned::Spanned, Field, Fields, Item, ItemStruct, LitStr};

// Kept in sync with `choice_enum::RESERVED_NAMES`.
const RESERVED_NAMES: [&str; 4] = ["ALL_OPTIONS", "CHOICES", "CHOICES_DICT", "DEFAULT"];

pub fn derive_choice_enum_impl(item: Item) -> syn::Result<TokenStream> {
    match item {
        Item::Struct(item) => for_struct(item),
        _ => Err(syn::Error::new_spanned(
            &item,
            "ChoiceEnum can only be derived for structs",
        )),
    }
}

fn for_struct(item: ItemStruct) -> syn::Result<TokenStream> {
    if !item.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &item.generics,
            "ChoiceEnum cannot be derived for generic structs",
        ));
    }
    let Fields::Named(fields) = &item.fields else {
        return Err(syn::Error::new_spanned(
            &item.ident,
            "ChoiceEnum can only be derived for structs with named fields",
        ));
    };

    let mut seen_names = HashSet::new();
    for field in &fields.named {
        if let Some(field_name) = &field.ident {
            let name = member_name(field_name);
            if RESERVED_NAMES.contains(&name.as_str()) {
                return Err(syn::Error::new(
                    field_name.span(),
                    format!("member name `{name}` is reserved for a derived collection"),
                ));
            }
            if !seen_names.insert(name.clone()) {
                return Err(syn::Error::new(
                    field_name.span(),
                    format!("member name `{name}` is declared twice"),
                ));
            }
        }
    }

    let members = fields
        .named
        .iter()
        .map(Member::new)
        .collect::<syn::Result<Vec<_>>>()?;

    let mut default: Option<&Member> = None;
    for member in &members {
        if member.choice.as_ref().map_or(false, |choice| choice.default) {
            if let Some(first) = default {
                return Err(syn::Error::new(
                    member.field_name.span(),
                    format!(
                        "only one default option allowed (`{}` is already the default)",
                        first.field_name
                    ),
                ));
            }
            default = Some(member);
        }
    }

    let mut initializers = vec![];
    let mut member_entries = vec![];
    for member in &members {
        let field_name = &member.field_name;
        let member_name = LitStr::new(&member.name, field_name.span());
        if let Some(ChoiceAttrs {
            value,
            display,
            default,
        }) = &member.choice
        {
            initializers.push(quote! {
                #field_name: ::choice_enum::ChoiceOption::new(#value, #display, #default),
            });
            member_entries.push(quote! {
                (#member_name, ::std::option::Option::Some(&self.#field_name)),
            });
        } else {
            initializers.push(quote! {
                #field_name: ::std::default::Default::default(),
            });
            member_entries.push(quote! {
                (#member_name, ::std::option::Option::None),
            });
        }
    }

    let vis = &item.vis;
    let type_name = &item.ident;
    let enum_name = LitStr::new(&type_name.unraw().to_string(), type_name.span());
    let initializers = TokenStream::from_iter(initializers);
    let member_entries = TokenStream::from_iter(member_entries);

    Ok(quote! {
        impl ::choice_enum::ChoiceEnum for #type_name {
            const NAME: &'static str = #enum_name;

            fn declare() -> Self {
                Self {
                    #initializers
                }
            }

            fn members(&self) -> ::std::vec::Vec<(
                &'static str,
                ::std::option::Option<&::choice_enum::ChoiceOption>,
            )> {
                ::std::vec![#member_entries]
            }
        }

        impl #type_name {
            /// The declared choice enumeration, derived on first use.
            #vis fn declared() -> &'static ::choice_enum::Declared<#type_name> {
                static DECLARED: ::choice_enum::once_cell::sync::OnceCell<
                    ::choice_enum::Declared<#type_name>,
                > = ::choice_enum::once_cell::sync::OnceCell::new();
                DECLARED.get_or_init(::choice_enum::Declared::load)
            }
        }
    })
}

struct Member {
    field_name: Ident,
    /// The field name in SCREAMING_SNAKE_CASE.
    name: String,
    choice: Option<ChoiceAttrs>,
}

impl Member {
    fn new(field: &Field) -> syn::Result<Self> {
        let field_name = field
            .ident
            .clone()
            .ok_or_else(|| syn::Error::new(field.span(), "field must be named"))?;
        let name = member_name(&field_name);
        let choice = if field.attrs.iter().any(|attr| attr.path.is_ident("choice")) {
            Some(ChoiceAttrs::from_attributes(&field.attrs)?)
        } else {
            None
        };
        Ok(Self {
            field_name,
            name,
            choice,
        })
    }
}

fn member_name(field_name: &Ident) -> String {
    field_name.unraw().to_string().to_shouty_snake_case()
}

#[derive(Debug, FromAttributes)]
#[darling(attributes(choice))]
struct ChoiceAttrs {
    value: String,
    display: String,
    #[darling(default)]
    default: bool,
}
