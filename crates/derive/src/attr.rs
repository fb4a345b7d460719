use binpack_core::{ByteOrder, FieldAnnotation, PrefixKind};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Field, LitStr};

/// Parse the `#[binpack("...")]` attributes of a field.
///
/// Several attributes are read in order, as if joined with commas, so a later
/// option overrides an earlier one.
pub(crate) fn parse_field_annotation(field: &Field) -> syn::Result<FieldAnnotation> {
    let mut raw = Vec::new();

    for attr in &field.attrs {
        if attr.path().is_ident("binpack") {
            let lit: LitStr = attr.parse_args()?;
            raw.push(lit.value());
        }
    }

    let annotation = FieldAnnotation::parse(&raw.join(","));

    if let Some(kind) = annotation.length_prefix.as_deref() {
        if !kind.is_empty() && PrefixKind::from_name(kind).is_none() {
            let expected: Vec<&str> = PrefixKind::ALL.iter().map(|k| k.name()).collect();
            return Err(syn::Error::new_spanned(
                field,
                format!("unknown lenprefix kind `{}`, expected one of {}", kind, expected.join(", ")),
            ));
        }
    }

    Ok(annotation)
}

/// Tokens constructing `annotation` in a const context.
pub(crate) fn annotation_tokens(annotation: &FieldAnnotation) -> TokenStream {
    let skip = annotation.skip;
    let length_prefix = match annotation.length_prefix.as_deref() {
        Some(kind) => quote!(::std::option::Option::Some(::std::borrow::Cow::Borrowed(#kind))),
        None => quote!(::std::option::Option::None),
    };
    let byte_order = match annotation.byte_order {
        Some(ByteOrder::Big) => quote!(::std::option::Option::Some(::binpack::ByteOrder::Big)),
        Some(ByteOrder::Little) => quote!(::std::option::Option::Some(::binpack::ByteOrder::Little)),
        None => quote!(::std::option::Option::None),
    };

    quote! {
        ::binpack::FieldAnnotation {
            skip: #skip,
            length_prefix: #length_prefix,
            byte_order: #byte_order,
        }
    }
}
