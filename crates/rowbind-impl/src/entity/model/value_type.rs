// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Supported field value types.
//!
//! | Rust type | Cursor getter | Constraint parameter |
//! |-----------|---------------|----------------------|
//! | `i16` | `get_i16` | `i16` |
//! | `i32` | `get_i32` | `i32` |
//! | `i64` | `get_i64` | `i64` |
//! | `f32` | `get_f32` | `f32` |
//! | `f64` | `get_f64` | `f64` |
//! | `String` | `get_text` | `impl Into<String>` |
//!
//! Each may be wrapped in `Option<_>`, which makes the field nullable.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{GenericArgument, Ident, PathArguments, Type};

/// Value type of a mapped field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    /// `i16`
    I16,
    /// `i32`
    I32,
    /// `i64`
    I64,
    /// `f32`
    F32,
    /// `f64`
    F64,
    /// `String`
    Text
}

/// Result of classifying a declared field type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classified {
    /// Supported value type, `None` if unsupported.
    pub value:    Option<ValueType>,
    /// Declared as `Option<_>`.
    pub nullable: bool
}

impl ValueType {
    /// Classify a declared field type.
    #[must_use]
    pub fn classify(ty: &Type) -> Classified {
        match option_inner(ty) {
            Some(inner) => Classified {
                value:    Self::from_type(inner),
                nullable: true
            },
            None => Classified {
                value:    Self::from_type(ty),
                nullable: false
            }
        }
    }

    fn from_type(ty: &Type) -> Option<Self> {
        let Type::Path(path) = ty else {
            return None;
        };
        if path.qself.is_some() {
            return None;
        }
        let segment = path.path.segments.last()?;
        if !segment.arguments.is_none() {
            return None;
        }
        match segment.ident.to_string().as_str() {
            "i16" => Some(Self::I16),
            "i32" => Some(Self::I32),
            "i64" => Some(Self::I64),
            "f32" => Some(Self::F32),
            "f64" => Some(Self::F64),
            "String" => Some(Self::Text),
            _ => None
        }
    }

    /// Cursor method reading this type.
    #[must_use]
    pub fn getter(&self) -> Ident {
        let name = match self {
            Self::I16 => "get_i16",
            Self::I32 => "get_i32",
            Self::I64 => "get_i64",
            Self::F32 => "get_f32",
            Self::F64 => "get_f64",
            Self::Text => "get_text"
        };
        Ident::new(name, Span::call_site())
    }

    /// Type of the value parameter of a constraint method.
    #[must_use]
    pub fn param_type(&self) -> TokenStream {
        match self {
            Self::I16 => quote! { i16 },
            Self::I32 => quote! { i32 },
            Self::I64 => quote! { i64 },
            Self::F32 => quote! { f32 },
            Self::F64 => quote! { f64 },
            Self::Text => quote! { impl ::core::convert::Into<::std::string::String> }
        }
    }

    /// Expression turning a constraint parameter into its argument string.
    #[must_use]
    pub fn stringify(&self, value: &Ident) -> TokenStream {
        match self {
            Self::Text => quote! { #value.into() },
            _ => quote! { ::std::string::ToString::to_string(&#value) }
        }
    }
}

/// Inner type of `Option<T>`.
fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(path) = ty else {
        return None;
    };
    let segment = path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first()? {
        GenericArgument::Type(inner) if args.args.len() == 1 => Some(inner),
        _ => None
    }
}
