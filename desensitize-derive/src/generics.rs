//! Generic type parameter handling and trait bound management.
//!
//! Bounds are added only for generics that appear in rendered members or
//! in the parent field.
//!
//! `PhantomData<T>` is skipped when collecting generics, so a marker
//! parameter never has to implement `ToRenderValue`:
//!
//! ```ignore
//! struct TypedId<T> {
//!     id: String,
//!     _marker: PhantomData<T>,
//! }
//! ```

use syn::parse_quote;

use crate::crate_path;

fn is_type_param(ident: &syn::Ident, generics: &syn::Generics) -> bool {
    generics.type_params().any(|param| param.ident == *ident)
}

fn push_unique(result: &mut Vec<syn::Type>, ty: &syn::Type) {
    if !result.contains(ty) {
        result.push(ty.clone());
    }
}

/// Collects the types that need a bound for `ty` to render.
///
/// A bare parameter `T` is collected as is. A projection such as `T::Id` or
/// `<T as Trait>::Id` is collected whole, since the bound belongs on the
/// associated type rather than on `T`.
pub(crate) fn collect_generics_from_type(
    ty: &syn::Type,
    generics: &syn::Generics,
    result: &mut Vec<syn::Type>,
) {
    match ty {
        syn::Type::Path(path) => {
            if let Some(qself) = &path.qself {
                let mut inner = Vec::new();
                collect_generics_from_type(&qself.ty, generics, &mut inner);
                if !inner.is_empty() {
                    push_unique(result, ty);
                }
                return;
            }
            let Some(first) = path.path.segments.first() else {
                return;
            };
            if path.path.leading_colon.is_none() && is_type_param(&first.ident, generics) {
                push_unique(result, ty);
                return;
            }
            let Some(segment) = path.path.segments.last() else {
                return;
            };
            if segment.ident == "PhantomData" {
                return;
            }
            if let syn::PathArguments::AngleBracketed(args) = &segment.arguments {
                for arg in &args.args {
                    if let syn::GenericArgument::Type(inner_ty) = arg {
                        collect_generics_from_type(inner_ty, generics, result);
                    }
                }
            }
        }
        syn::Type::Reference(reference) => {
            collect_generics_from_type(&reference.elem, generics, result);
        }
        syn::Type::Array(array) => collect_generics_from_type(&array.elem, generics, result),
        syn::Type::Slice(slice) => collect_generics_from_type(&slice.elem, generics, result),
        syn::Type::Paren(paren) => collect_generics_from_type(&paren.elem, generics, result),
        syn::Type::Group(group) => collect_generics_from_type(&group.elem, generics, result),
        syn::Type::Tuple(tuple) => {
            for elem in &tuple.elems {
                collect_generics_from_type(elem, generics, result);
            }
        }
        _ => {}
    }
}

/// Adds `ToRenderValue` where-predicates for the types rendered by members.
pub(crate) fn add_render_value_bounds(
    mut generics: syn::Generics,
    used_types: &[syn::Type],
) -> syn::Generics {
    if used_types.is_empty() {
        return generics;
    }
    let render_value_path = crate_path("ToRenderValue");
    let where_clause = generics.make_where_clause();
    for ty in used_types {
        where_clause
            .predicates
            .push(parse_quote!(#ty: #render_value_path));
    }
    generics
}

/// Adds `Display` where-predicates for the types of parent fields.
pub(crate) fn add_display_bounds(
    mut generics: syn::Generics,
    used_types: &[syn::Type],
) -> syn::Generics {
    if used_types.is_empty() {
        return generics;
    }
    let where_clause = generics.make_where_clause();
    for ty in used_types {
        where_clause
            .predicates
            .push(parse_quote!(#ty: ::core::fmt::Display));
    }
    generics
}

#[cfg(test)]
mod tests {
    use quote::quote;

    use super::*;

    fn generics() -> syn::Generics {
        syn::parse2::<syn::DeriveInput>(quote! { struct S<T, U, V> { a: T } })
            .expect("should parse as DeriveInput")
            .generics
    }

    fn collect(tokens: proc_macro2::TokenStream) -> Vec<String> {
        let ty: syn::Type = syn::parse2(tokens).expect("should parse as Type");
        let mut result = Vec::new();
        collect_generics_from_type(&ty, &generics(), &mut result);
        result.iter().map(|ty| quote!(#ty).to_string()).collect()
    }

    #[test]
    fn bare_and_nested_parameters_are_found() {
        assert_eq!(collect(quote! { T }), ["T"]);
        assert_eq!(collect(quote! { Option<Vec<U>> }), ["U"]);
        assert_eq!(collect(quote! { [V; 3] }), ["V"]);
        assert_eq!(collect(quote! { &'a [T] }), ["T"]);
    }

    #[test]
    fn phantom_data_is_skipped() {
        assert!(collect(quote! { PhantomData<T> }).is_empty());
        assert!(collect(quote! { std::marker::PhantomData<U> }).is_empty());
    }

    #[test]
    fn each_parameter_is_collected_once() {
        assert_eq!(collect(quote! { (T, Vec<T>, U) }), ["T", "U"]);
    }

    #[test]
    fn concrete_types_collect_nothing() {
        assert!(collect(quote! { Vec<String> }).is_empty());
        assert!(collect(quote! { <String as IntoIterator>::Item }).is_empty());
    }

    #[test]
    fn associated_types_are_collected_whole() {
        assert_eq!(collect(quote! { T::Id }), ["T :: Id"]);
        assert_eq!(collect(quote! { Vec<U::Item> }), ["U :: Item"]);
        assert_eq!(
            collect(quote! { <V as Iterator>::Item }),
            ["< V as Iterator > :: Item"]
        );
    }

    #[test]
    fn bounds_land_in_the_where_clause() {
        let used: Vec<syn::Type> = vec![parse_quote!(T), parse_quote!(T::Id)];
        let bounded = add_render_value_bounds(generics(), &used);
        let bounded = add_display_bounds(bounded, &[parse_quote!(U)]);
        let where_clause = bounded.where_clause.as_ref().expect("where clause");
        let predicates: Vec<String> = where_clause
            .predicates
            .iter()
            .map(|predicate| quote!(#predicate).to_string())
            .collect();
        assert_eq!(
            predicates,
            [
                "T : :: desensitize :: ToRenderValue",
                "T :: Id : :: desensitize :: ToRenderValue",
                "U : :: core :: fmt :: Display",
            ]
        );
        assert!(bounded.type_params().all(|param| param.bounds.is_empty()));
    }
}
