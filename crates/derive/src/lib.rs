//! Derive macro for binpack composites

mod attr;

use attr::{annotation_tokens, parse_field_annotation};
use binpack_core::is_placeholder;
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, parse_quote, Data, DeriveInput, Fields, GenericParam, Index, Type};

/// One struct field as the generated code sees it
struct MemberField {
    /// Wire name: the identifier, or the position for tuple structs
    name: String,
    /// `self.<access>`
    access: TokenStream2,
    ty: Type,
    skipped: bool,
    annotation: TokenStream2,
}

/// Derive `binpack::Pack` for a struct.
///
/// Members are encoded in declaration order with no padding. Each field may
/// carry one or more `#[binpack("...")]` attributes holding an annotation
/// string:
///
/// ```ignore
/// use binpack::Pack;
///
/// #[derive(Pack, Default)]
/// struct Frame {
///     #[binpack("lenprefix=uint16,endian=little")]
///     samples: Vec<u16>,
///     checksum: u32,
///     #[binpack("-")]
///     cached: Option<String>,
///     _reserved: bool,
/// }
/// ```
///
/// Skipped fields and fields whose name starts with `_` are left out of the
/// generated traversal, so their types do not need to implement `Pack`.
///
/// # Limitations
///
/// - Only structs (named, tuple, unit); enums and unions are rejected
/// - An unknown `lenprefix` kind is a compile error
/// - A variable sequence field without `lenprefix` fails at encode/decode time
#[proc_macro_derive(Pack, attributes(binpack))]
pub fn derive_pack(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(input).unwrap_or_else(syn::Error::into_compile_error).into()
}

fn expand(mut input: DeriveInput) -> syn::Result<TokenStream2> {
    let fields = match &input.data {
        Data::Struct(data) => collect_fields(&data.fields)?,
        Data::Enum(data) => {
            return Err(syn::Error::new_spanned(
                data.enum_token,
                "Pack can only be derived for structs",
            ))
        }
        Data::Union(data) => {
            return Err(syn::Error::new_spanned(
                data.union_token,
                "Pack can only be derived for structs",
            ))
        }
    };

    // Every type parameter must itself be packable.
    let type_params: Vec<_> = input
        .generics
        .params
        .iter()
        .filter_map(|p| match p {
            GenericParam::Type(t) => Some(t.ident.clone()),
            _ => None,
        })
        .collect();
    let where_clause = input.generics.make_where_clause();
    for ident in type_params {
        where_clause.predicates.push(parse_quote!(#ident: ::binpack::Pack));
    }

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let count = fields.len();
    let member_entries = fields.iter().map(|f| {
        let name = &f.name;
        let annotation = &f.annotation;
        quote!(::binpack::Member::new(#name, #annotation))
    });
    let members = quote! {
        #[allow(dead_code)]
        const MEMBERS: [::binpack::Member; #count] = [#(#member_entries),*];
    };

    let shapes = fields.iter().enumerate().map(|(i, f)| {
        let ty = &f.ty;
        if f.skipped {
            let ty_name = quote!(#ty).to_string().replace(' ', "");
            quote! {
                ::binpack::FieldShape::new(
                    MEMBERS[#i].name,
                    MEMBERS[#i].annotation.clone(),
                    ::binpack::Shape::Opaque(::std::string::String::from(#ty_name)),
                )
            }
        } else {
            quote!(MEMBERS[#i].shape::<#ty>())
        }
    });

    let active: Vec<_> = fields
        .iter()
        .enumerate()
        .filter(|(_, f)| !f.skipped)
        .collect();
    let encodes = active.iter().map(|(i, f)| {
        let access = &f.access;
        quote!(::binpack::encode_member(&self.#access, __w, __cfg, &MEMBERS[#i])?;)
    });
    let decodes = active.iter().map(|(i, f)| {
        let access = &f.access;
        quote!(::binpack::decode_member(&mut self.#access, __r, __cfg, &MEMBERS[#i])?;)
    });

    Ok(quote! {
        impl #impl_generics ::binpack::Pack for #name #ty_generics #where_clause {
            const KIND: ::binpack::ShapeKind = ::binpack::ShapeKind::Composite;

            fn shape() -> ::binpack::Shape {
                #members
                ::binpack::Shape::Composite(::std::vec![#(#shapes),*])
            }

            fn encode_value<__W: ::std::io::Write + ?Sized>(
                &self,
                __w: &mut __W,
                __cfg: ::binpack::Config,
            ) -> ::binpack::Result<()> {
                #members
                #(#encodes)*
                ::std::result::Result::Ok(())
            }

            fn decode_value<__R: ::std::io::Read + ?Sized>(
                &mut self,
                __r: &mut __R,
                __cfg: ::binpack::Config,
            ) -> ::binpack::Result<()> {
                #members
                #(#decodes)*
                ::std::result::Result::Ok(())
            }
        }
    })
}

fn collect_fields(fields: &Fields) -> syn::Result<Vec<MemberField>> {
    let mut out = Vec::with_capacity(fields.len());

    for (i, field) in fields.iter().enumerate() {
        let annotation = parse_field_annotation(field)?;
        let (name, access) = match &field.ident {
            Some(ident) => (ident.to_string(), quote!(#ident)),
            None => {
                let index = Index::from(i);
                (i.to_string(), quote!(#index))
            }
        };

        out.push(MemberField {
            skipped: annotation.skip || is_placeholder(&name),
            annotation: annotation_tokens(&annotation),
            ty: field.ty.clone(),
            access,
            name,
        });
    }

    Ok(out)
}
