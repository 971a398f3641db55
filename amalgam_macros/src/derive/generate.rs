//! Token generation for the `Reflect` implementation.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Generics, parse_quote};

use super::parse::{RecordField, RecordInput};

/// Add a `Reflect` bound to every type parameter.
fn bounded_generics(generics: &Generics, krate: &TokenStream) -> Generics {
    let mut bounded = generics.clone();
    for param in bounded.type_params_mut() {
        param.bounds.push(parse_quote!(#krate::Reflect));
    }
    bounded
}

fn field_entry(field: &RecordField, krate: &TokenStream) -> TokenStream {
    let RecordField {
        member,
        name,
        ty,
        exported,
    } = field;
    quote! {
        #krate::Field::new(
            #name,
            <#ty as #krate::Reflect>::value_type(),
            #krate::Reflect::into_value(self.#member),
        )
        .with_exported(#exported)
    }
}

fn field_init(field: &RecordField, krate: &TokenStream) -> TokenStream {
    let RecordField {
        member, name, ty, ..
    } = field;
    quote! {
        #member: <#ty as #krate::Reflect>::from_value(record.take_field(#name)?)?
    }
}

/// Generate `impl Reflect for <struct>`.
pub(crate) fn reflect_impl(input: &RecordInput, krate: &TokenStream) -> TokenStream {
    let ident = &input.ident;
    let display = ident.to_string();
    let generics = bounded_generics(&input.generics, krate);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let entries = input.fields.iter().map(|field| field_entry(field, krate));
    let record_type = quote! { #krate::RecordType::of::<Self>(#display) };

    let rebuild = if input.fields.is_empty() {
        quote! {
            #krate::Record::expect(value, #record_type)?;
            ::core::result::Result::Ok(Self {})
        }
    } else {
        let inits = input.fields.iter().map(|field| field_init(field, krate));
        quote! {
            let mut record = #krate::Record::expect(value, #record_type)?;
            ::core::result::Result::Ok(Self { #( #inits, )* })
        }
    };

    quote! {
        #[automatically_derived]
        impl #impl_generics #krate::Reflect for #ident #ty_generics #where_clause {
            fn value_type() -> #krate::ValueType {
                #krate::ValueType::Record(#record_type)
            }

            fn into_value(self) -> #krate::Value {
                #krate::Value::Record(#krate::Record::new(
                    #record_type,
                    ::std::vec![ #( #entries ),* ],
                ))
            }

            fn from_value(value: #krate::Value) -> #krate::MergeResult<Self> {
                #rebuild
            }
        }
    }
}
