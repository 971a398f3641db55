//! Parsing of the derive input and its `#[merge(...)]` attributes.

use syn::ext::IdentExt;
use syn::spanned::Spanned;
use syn::meta::ParseNestedMeta;
use syn::{Attribute, Data, DeriveInput, Fields, Generics, Ident, Member, Type, Visibility};

mod literals;

use literals::lit_path;

/// Struct-level attributes recognised by `#[derive(Record)]`.
#[derive(Default)]
pub(crate) struct StructAttrs {
    /// Overrides the generated crate path for dependency aliasing.
    ///
    /// When set via `#[merge(crate = "my_alias")]`, generated code references
    /// types through `my_alias::` instead of `::amalgam::`.
    pub crate_path: Option<syn::Path>,
}

/// Field-level attributes: an explicit exportedness override.
#[derive(Default)]
pub(crate) struct FieldAttrs {
    pub exported: Option<bool>,
}

/// A struct field as the generator needs it.
pub(crate) struct RecordField {
    pub member: Member,
    pub name: String,
    pub ty: Type,
    pub exported: bool,
}

/// Parsed derive input.
pub(crate) struct RecordInput {
    pub ident: Ident,
    pub generics: Generics,
    pub attrs: StructAttrs,
    pub fields: Vec<RecordField>,
}

/// Visit every nested meta item of each `#[merge(...)]` attribute.
fn parse_merge_attrs<F>(attrs: &[Attribute], mut visit: F) -> syn::Result<()>
where
    F: FnMut(&ParseNestedMeta) -> syn::Result<()>,
{
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("merge")) {
        attr.parse_nested_meta(|meta| visit(&meta))?;
    }
    Ok(())
}

pub(crate) fn parse_struct_attrs(attrs: &[Attribute]) -> syn::Result<StructAttrs> {
    let mut out = StructAttrs::default();
    parse_merge_attrs(attrs, |meta| {
        if meta.path.is_ident("crate") {
            out.crate_path = Some(lit_path(meta, "crate")?);
            Ok(())
        } else {
            Err(meta.error("unsupported struct attribute; expected `crate = \"...\"`"))
        }
    })?;
    Ok(out)
}

pub(crate) fn parse_field_attrs(attrs: &[Attribute]) -> syn::Result<FieldAttrs> {
    let mut out = FieldAttrs::default();
    parse_merge_attrs(attrs, |meta| {
        let exported = if meta.path.is_ident("exported") {
            true
        } else if meta.path.is_ident("unexported") {
            false
        } else {
            return Err(meta.error("unsupported field attribute; expected `exported` or `unexported`"));
        };
        if out.exported.replace(exported).is_some() {
            return Err(meta.error("exportedness may only be set once per field"));
        }
        Ok(())
    })?;
    Ok(out)
}

/// Parse a `DeriveInput` into the fields and attributes the generator uses.
pub(crate) fn parse_input(input: &DeriveInput) -> syn::Result<RecordInput> {
    let data = match &input.data {
        Data::Struct(data) => data,
        Data::Enum(data) => {
            return Err(syn::Error::new(
                data.enum_token.span(),
                "Record can only be derived for structs",
            ));
        }
        Data::Union(data) => {
            return Err(syn::Error::new(
                data.union_token.span(),
                "Record can only be derived for structs",
            ));
        }
    };
    let attrs = parse_struct_attrs(&input.attrs)?;
    let declared = match &data.fields {
        Fields::Named(named) => named.named.iter().collect::<Vec<_>>(),
        Fields::Unnamed(unnamed) => unnamed.unnamed.iter().collect(),
        Fields::Unit => Vec::new(),
    };
    let fields = declared
        .into_iter()
        .enumerate()
        .map(|(index, field)| {
            let (member, name) = field.ident.as_ref().map_or_else(
                || (Member::from(index), index.to_string()),
                |ident| (Member::Named(ident.clone()), ident.unraw().to_string()),
            );
            let field_attrs = parse_field_attrs(&field.attrs)?;
            let exported = field_attrs
                .exported
                .unwrap_or_else(|| matches!(field.vis, Visibility::Public(_)));
            Ok(RecordField {
                member,
                name,
                ty: field.ty.clone(),
                exported,
            })
        })
        .collect::<syn::Result<Vec<_>>>()?;
    Ok(RecordInput {
        ident: input.ident.clone(),
        generics: input.generics.clone(),
        attrs,
        fields,
    })
}
