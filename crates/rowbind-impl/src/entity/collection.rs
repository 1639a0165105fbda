// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Collection type generation.
//!
//! Each entity gets one unit struct named after its `collection`, holding the
//! projection, the row binding, and the query entry points:
//!
//! ```rust,ignore
//! pub struct Contacts;
//!
//! impl Contacts {
//!     const PROJECTION: &'static [&'static str] = &["_id", "display_name"];
//!     fn bind<C: RowCursor + ?Sized>(entity: &mut Contact, cursor: &C) -> Result<()>;
//!
//!     // constant locator
//!     pub fn filter() -> ContactsQuery<state::Constrainable>;
//!     pub fn sort_by() -> ContactsQuery<state::Sortable>;
//!     pub fn get<B: Backend>(backend: &B) -> Result<ContactsList<B::Cursor>>;
//!     pub fn count<B: Backend>(backend: &B) -> Result<i64>;
//!     pub fn get_by_id<B: Backend>(backend: &B, id: i64) -> Result<Option<Contact>>;
//! }
//!
//! impl Messages {
//!     // parameterized locator
//!     pub fn with_locator(thread_id: i64) -> MessagesQuery<state::Root>;
//! }
//! ```
//!
//! An entity whose locator could not be resolved keeps the projection, the
//! binding and the list type, but gets no builder and no entry points.

use proc_macro2::TokenStream;
use quote::quote;

use super::{
    binding, builder,
    context::Context,
    diagnostics::Diagnostics,
    list,
    model::Uri,
    protocol::{Method, ProtocolState}
};

/// Generate everything for one entity.
pub fn generate(ctx: &Context<'_>, diagnostics: &mut Diagnostics) -> TokenStream {
    let vis = &ctx.entity.vis;
    let entity_name = ctx.entity_name;
    let collection = ctx.collection;
    let columns = ctx.entity.projection();
    let bind = binding::generate(ctx, diagnostics);
    let list = list::generate(ctx);
    let doc = format!("Queries over [`{entity_name}`] rows.");

    let (builder, entry_points) = match &ctx.entity.uri {
        Some(uri) => (builder::generate(ctx), entry_points(ctx, uri)),
        None => (TokenStream::new(), TokenStream::new())
    };

    quote! {
        #[doc = #doc]
        #[derive(Debug, Clone, Copy)]
        #vis struct #collection;

        impl #collection {
            /// Columns read for each row, in field order.
            const PROJECTION: &'static [&'static str] = &[#(#columns),*];

            #bind
            #entry_points
        }

        #list
        #builder
    }
}

fn entry_points(ctx: &Context<'_>, uri: &Uri) -> TokenStream {
    let root = ctx.query_in(ProtocolState::Root);
    let query = &ctx.query;
    let locator = uri.expression(ctx.entity_name, ctx.krate);

    if uri.needs_parameters() {
        let params = uri.params().iter().map(|p| {
            let ident = &p.ident;
            let ty = &p.ty;
            quote! { #ident: #ty }
        });
        return quote! {
            /// Start a query against the locator built from these arguments.
            pub fn with_locator(#(#params),*) -> #root {
                #query::new(#locator)
            }
        };
    }

    let methods = ctx
        .protocol
        .interface(ProtocolState::Root)
        .map(|iface| iface.methods.iter().map(|m| forward(ctx, m)).collect::<Vec<_>>())
        .unwrap_or_default();

    quote! {
        fn query() -> #root {
            #query::new(#locator)
        }

        #(#methods)*
    }
}

/// Static shortcut for a root method.
fn forward(ctx: &Context<'_>, method: &Method<'_>) -> TokenStream {
    let krate = ctx.krate;
    let entity_name = ctx.entity_name;
    let list = &ctx.list;

    match method {
        Method::Filter => {
            let ret = ctx.query_in(ProtocolState::Constrainable);
            quote! {
                /// Start constraining a query.
                pub fn filter() -> #ret {
                    Self::query().filter()
                }
            }
        }
        Method::SortBy => {
            let ret = ctx.query_in(ProtocolState::Sortable);
            quote! {
                /// Start an ordered query.
                pub fn sort_by() -> #ret {
                    Self::query().sort_by()
                }
            }
        }
        Method::Get => {
            let doc = format!("Fetch every [`{entity_name}`] row.");
            quote! {
                #[doc = #doc]
                ///
                /// # Errors
                ///
                /// Returns any error reported by the backend.
                pub fn get<B: #krate::Backend + ?::core::marker::Sized>(
                    backend: &B
                ) -> #krate::Result<#list<B::Cursor>> {
                    Self::query().get(backend)
                }
            }
        }
        Method::Count => {
            let doc = format!("Count every [`{entity_name}`] row.");
            quote! {
                #[doc = #doc]
                ///
                /// # Errors
                ///
                /// Returns any error reported by the backend.
                pub fn count<B: #krate::Backend + ?::core::marker::Sized>(
                    backend: &B
                ) -> #krate::Result<i64> {
                    Self::query().count(backend)
                }
            }
        }
        Method::GetById(field) => {
            let param = field
                .value_type
                .map(|v| v.param_type())
                .unwrap_or_else(|| quote! { i64 });
            let doc = format!(
                "Fetch the [`{entity_name}`] whose `{}` equals `id`, if exactly one row matches.",
                field.column
            );
            quote! {
                #[doc = #doc]
                ///
                /// # Errors
                ///
                /// Returns any error reported by the backend.
                pub fn get_by_id<B: #krate::Backend + ?::core::marker::Sized>(
                    backend: &B,
                    id: #param
                ) -> #krate::Result<::core::option::Option<#entity_name>> {
                    Self::query().get_by_id(backend, id)
                }
            }
        }
        _ => TokenStream::new()
    }
}
