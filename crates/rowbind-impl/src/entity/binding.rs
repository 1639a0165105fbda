// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Row binding.
//!
//! Generates the private `bind` function of a collection, which reads the
//! cursor's current row into an entity. Column `i` of the projection is
//! always field `i`:
//!
//! ```rust,ignore
//! fn bind<C: RowCursor + ?Sized>(entity: &mut Contact, cursor: &C) -> Result<()> {
//!     entity.id = RowCursor::get_i64(cursor, 0)?;
//!     entity.name = RowCursor::get_text(cursor, 1)?;
//!     entity.nickname = if RowCursor::is_null(cursor, 2)? {
//!         None
//!     } else {
//!         Some(RowCursor::get_text(cursor, 2)?)
//!     };
//!     Ok(())
//! }
//! ```
//!
//! Fields of an unsupported type keep their column in the projection but get
//! no binding statement; each one is reported as a schema error.

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

use super::{context::Context, diagnostics::Diagnostics, model::Field};

/// Generate the `bind` function.
pub fn generate(ctx: &Context<'_>, diagnostics: &mut Diagnostics) -> TokenStream {
    let krate = ctx.krate;
    let entity_name = ctx.entity_name;

    let statements: Vec<TokenStream> = ctx
        .entity
        .fields
        .iter()
        .enumerate()
        .filter_map(|(index, field)| statement(ctx, field, index, diagnostics))
        .collect();

    let allow = statements
        .is_empty()
        .then(|| quote! { #[allow(unused_variables)] });

    quote! {
        #allow
        fn bind<C: #krate::RowCursor + ?::core::marker::Sized>(
            entity: &mut #entity_name,
            cursor: &C
        ) -> #krate::Result<()> {
            #(#statements)*
            ::core::result::Result::Ok(())
        }
    }
}

fn statement(
    ctx: &Context<'_>,
    field: &Field,
    index: usize,
    diagnostics: &mut Diagnostics
) -> Option<TokenStream> {
    let Some(value_type) = field.value_type else {
        let ty = field.ty.to_token_stream().to_string().replace(' ', "");
        diagnostics.report(
            darling::Error::custom(format!(
                "field `{}` has unsupported type `{ty}`; expected i16, i32, i64, f32, f64 or String, optionally in Option",
                field.qualified()
            ))
            .with_span(&field.ty)
        );
        return None;
    };

    let krate = ctx.krate;
    let ident = &field.ident;
    let getter = value_type.getter();
    let read = quote! { #krate::RowCursor::#getter(cursor, #index)? };

    Some(if field.is_nullable {
        quote! {
            entity.#ident = if #krate::RowCursor::is_null(cursor, #index)? {
                ::core::option::Option::None
            } else {
                ::core::option::Option::Some(#read)
            };
        }
    } else {
        quote! { entity.#ident = #read; }
    })
}
