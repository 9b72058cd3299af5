//! Type utilities for the derive macro.

use desensitize_core::ValueCategory;

/// Checks if a type is a recognized scalar primitive.
///
/// Returns `true` for bare primitive type names like `i32`, `bool`, `f64`, etc.
/// Returns `false` for qualified paths, generic types, or type aliases.
pub(crate) fn is_scalar_type(ty: &syn::Type) -> bool {
    let syn::Type::Path(path) = ty else {
        return false;
    };
    if path.qself.is_some() || path.path.leading_colon.is_some() || path.path.segments.len() != 1
    {
        return false;
    }
    let Some(segment) = path.path.segments.last() else {
        return false;
    };
    if !segment.arguments.is_empty() {
        return false;
    }
    matches!(
        segment.ident.to_string().as_str(),
        "i8" | "i16"
            | "i32"
            | "i64"
            | "i128"
            | "isize"
            | "u8"
            | "u16"
            | "u32"
            | "u64"
            | "u128"
            | "usize"
            | "f32"
            | "f64"
            | "bool"
            | "char"
    )
}

/// Returns the single type argument of `Name<T>` when the last path segment is `Name`.
fn single_type_argument<'a>(ty: &'a syn::Type, names: &[&str]) -> Option<&'a syn::Type> {
    let syn::Type::Path(path) = ty else {
        return None;
    };
    let segment = path.path.segments.last()?;
    if !names.iter().any(|name| segment.ident == *name) {
        return None;
    }
    let syn::PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    let mut types = args.args.iter().filter_map(|arg| match arg {
        syn::GenericArgument::Type(inner) => Some(inner),
        _ => None,
    });
    let first = types.next()?;
    types.next().is_none().then_some(first)
}

fn element_category(element: &syn::Type) -> ValueCategory {
    if is_scalar_type(element) {
        ValueCategory::PrimitiveArray
    } else {
        ValueCategory::ObjectArray
    }
}

/// Classifies a field type from its syntax alone.
///
/// Fixed arrays, slices, `Vec` and `VecDeque` are arrays. References,
/// `Box`, `Rc`, `Arc` and `Option` are looked through. Anything else,
/// including type aliases of arrays, is a scalar.
pub(crate) fn value_category(ty: &syn::Type) -> ValueCategory {
    match ty {
        syn::Type::Array(array) => element_category(&array.elem),
        syn::Type::Slice(slice) => element_category(&slice.elem),
        syn::Type::Reference(reference) => value_category(&reference.elem),
        syn::Type::Paren(paren) => value_category(&paren.elem),
        syn::Type::Group(group) => value_category(&group.elem),
        syn::Type::Path(_) => {
            if let Some(element) = single_type_argument(ty, &["Vec", "VecDeque"]) {
                element_category(element)
            } else if let Some(inner) = single_type_argument(ty, &["Box", "Rc", "Arc", "Option"]) {
                value_category(inner)
            } else {
                ValueCategory::Scalar
            }
        }
        _ => ValueCategory::Scalar,
    }
}

#[cfg(test)]
mod tests {
    use desensitize_core::ValueCategory;
    use quote::quote;

    use super::*;

    fn parse_type(tokens: proc_macro2::TokenStream) -> syn::Type {
        syn::parse2(tokens).expect("should parse as Type")
    }

    #[test]
    fn scalar_i32_detected() {
        assert!(is_scalar_type(&parse_type(quote! { i32 })));
    }

    #[test]
    fn string_is_not_scalar() {
        assert!(!is_scalar_type(&parse_type(quote! { String })));
    }

    #[test]
    fn qualified_path_is_not_scalar() {
        assert!(!is_scalar_type(&parse_type(quote! { std::primitive::i32 })));
    }

    #[test]
    fn plain_types_are_scalars() {
        for tokens in [quote! { String }, quote! { u64 }, quote! { Option<String> }, quote! { Address }] {
            assert_eq!(value_category(&parse_type(tokens)), ValueCategory::Scalar);
        }
    }

    #[test]
    fn primitive_element_arrays() {
        for tokens in [
            quote! { [u8; 4] },
            quote! { Vec<i32> },
            quote! { &'a [char] },
            quote! { Box<[bool]> },
            quote! { std::collections::VecDeque<f64> },
            quote! { Option<Vec<u16>> },
        ] {
            assert_eq!(
                value_category(&parse_type(tokens)),
                ValueCategory::PrimitiveArray
            );
        }
    }

    #[test]
    fn object_element_arrays() {
        for tokens in [
            quote! { Vec<String> },
            quote! { [Address; 2] },
            quote! { Vec<Vec<u8>> },
            quote! { Arc<[Option<i32>]> },
        ] {
            assert_eq!(value_category(&parse_type(tokens)), ValueCategory::ObjectArray);
        }
    }

    #[test]
    fn maps_are_scalars() {
        let ty = parse_type(quote! { HashMap<String, u8> });
        assert_eq!(value_category(&ty), ValueCategory::Scalar);
    }
}
