// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Query builder generation.
//!
//! Renders the [`Protocol`](super::protocol::Protocol) table as one
//! typestate builder:
//!
//! ```rust,ignore
//! pub struct ContactsQuery<S> {
//!     selection: String,
//!     selection_args: Vec<String>,
//!     sort_order: String,
//!     locator: Locator,
//!     state: PhantomData<S>,
//! }
//!
//! impl ContactsQuery<state::Root> { /* filter, sort_by, get, count, get_by_id */ }
//! impl ContactsQuery<state::Constrainable> { /* name(op, value), nickname_is_null(bool) */ }
//! impl ContactsQuery<state::Constrained> { /* and, or, sort_by, get, count */ }
//! impl ContactsQuery<state::Sortable> { /* name(direction) */ }
//! impl ContactsQuery<state::Sorted> { /* then_by, get, count */ }
//! ```
//!
//! # Accumulated Query
//!
//! | Call | `selection` | `selection_args` | `sort_order` |
//! |------|-------------|------------------|--------------|
//! | `.name(Operator::Eq, "Ann")` | `name=?` | `["Ann"]` | |
//! | `.and()` | ` AND ` | | |
//! | `.nickname_is_null(true)` | `nickname IS NULL` | | |
//! | `.name(SortDirection::Asc)` | | | `name ASC` |
//! | `.then_by()` | | | `,` |
//!
//! Buffers left empty are sent as `None`.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use super::{
    context::Context,
    model::Field,
    protocol::{Interface, Method, ProtocolState}
};

/// Generate the builder type and all its impl blocks.
pub fn generate(ctx: &Context<'_>) -> TokenStream {
    let definition = definition(ctx);
    let shared = shared(ctx);
    let states = ctx
        .protocol
        .interfaces()
        .iter()
        .map(|iface| state_impl(ctx, iface));

    quote! {
        #definition
        #shared
        #(#states)*
    }
}

fn definition(ctx: &Context<'_>) -> TokenStream {
    let krate = ctx.krate;
    let vis = &ctx.entity.vis;
    let query = &ctx.query;
    let doc = format!(
        "Query over [`{}`] values, in protocol state `S` (see `{}::state`).",
        ctx.entity_name,
        quote!(#krate).to_string().replace(' ', "")
    );

    quote! {
        #[doc = #doc]
        #[derive(Debug)]
        #[must_use]
        #vis struct #query<S> {
            selection: ::std::string::String,
            selection_args: ::std::vec::Vec<::std::string::String>,
            sort_order: ::std::string::String,
            locator: #krate::Locator,
            state: ::core::marker::PhantomData<S>
        }
    }
}

/// State-independent plumbing: transitions and execution.
fn shared(ctx: &Context<'_>) -> TokenStream {
    let krate = ctx.krate;
    let query = &ctx.query;
    let collection = ctx.collection;
    let list = &ctx.list;

    quote! {
        #[allow(dead_code)]
        impl<S> #query<S> {
            fn __transition<T>(self) -> #query<T> {
                #query {
                    selection: self.selection,
                    selection_args: self.selection_args,
                    sort_order: self.sort_order,
                    locator: self.locator,
                    state: ::core::marker::PhantomData
                }
            }

            fn __execute<B: #krate::Backend + ?::core::marker::Sized>(
                &self,
                backend: &B,
                projection: ::core::option::Option<&[&str]>
            ) -> #krate::Result<B::Cursor> {
                let request = #krate::QueryRequest {
                    locator: &self.locator,
                    projection,
                    selection: (!self.selection.is_empty()).then_some(self.selection.as_str()),
                    selection_args: (!self.selection_args.is_empty())
                        .then_some(self.selection_args.as_slice()),
                    sort_order: (!self.sort_order.is_empty()).then_some(self.sort_order.as_str())
                };
                #krate::execute(backend, &request)
            }

            fn __get<B: #krate::Backend + ?::core::marker::Sized>(
                self,
                backend: &B
            ) -> #krate::Result<#list<B::Cursor>> {
                let cursor = self.__execute(
                    backend,
                    ::core::option::Option::Some(#collection::PROJECTION)
                )?;
                #list::new(cursor)
            }

            fn __count<B: #krate::Backend + ?::core::marker::Sized>(
                self,
                backend: &B
            ) -> #krate::Result<i64> {
                let mut cursor = #krate::CursorGuard::new(
                    self.__execute(backend, ::core::option::Option::None)?
                );
                if #krate::RowCursor::row_count(&*cursor) == 0 {
                    return ::core::result::Result::Err(#krate::Error::EmptyCount);
                }
                #krate::RowCursor::move_to(&mut *cursor, 0)?;
                #krate::RowCursor::get_i64(&*cursor, 0)
            }
        }
    }
}

fn state_impl(ctx: &Context<'_>, iface: &Interface<'_>) -> TokenStream {
    let ty = ctx.query_in(iface.state);
    let constructor = (iface.state == ProtocolState::Root).then(|| root_constructor(ctx));
    let methods = iface.methods.iter().map(|m| method(ctx, iface.state, m));

    quote! {
        impl #ty {
            #constructor
            #(#methods)*
        }
    }
}

fn root_constructor(ctx: &Context<'_>) -> TokenStream {
    let krate = ctx.krate;
    quote! {
        fn new(locator: #krate::Locator) -> Self {
            Self {
                selection: ::std::string::String::new(),
                selection_args: ::std::vec::Vec::new(),
                sort_order: ::std::string::String::new(),
                locator,
                state: ::core::marker::PhantomData
            }
        }
    }
}

fn method(ctx: &Context<'_>, state: ProtocolState, method: &Method<'_>) -> TokenStream {
    let krate = ctx.krate;
    let entity_name = ctx.entity_name;
    let list = &ctx.list;
    let ret = method.target().map(|target| ctx.query_in(target));

    match method {
        Method::Filter => {
            quote! {
                /// Start constraining the query.
                pub fn filter(self) -> #ret {
                    self.__transition()
                }
            }
        }
        Method::SortBy => {
            quote! {
                /// Start ordering the results.
                pub fn sort_by(self) -> #ret {
                    self.__transition()
                }
            }
        }
        Method::And => keyword(method, ret, " AND "),
        Method::Or => keyword(method, ret, " OR "),
        Method::ThenBy => {
            quote! {
                /// Add another sort criterion.
                pub fn then_by(mut self) -> #ret {
                    self.sort_order.push(',');
                    self.__transition()
                }
            }
        }
        Method::Get => {
            let doc = format!("Run the query and return the matching [`{entity_name}`] rows.");
            quote! {
                #[doc = #doc]
                ///
                /// # Errors
                ///
                /// Returns any error reported by the backend or while
                /// positioning the cursor.
                pub fn get<B: #krate::Backend + ?::core::marker::Sized>(
                    self,
                    backend: &B
                ) -> #krate::Result<#list<B::Cursor>> {
                    self.__get(backend)
                }
            }
        }
        Method::Count => {
            let doc = if state == ProtocolState::Root {
                format!("Count all [`{entity_name}`] rows.")
            } else {
                format!("Count the [`{entity_name}`] rows matching the query.")
            };
            quote! {
                #[doc = #doc]
                ///
                /// # Errors
                ///
                /// Returns `Error::EmptyCount` when the backend produces no
                /// row to read the count from, or any backend error.
                pub fn count<B: #krate::Backend + ?::core::marker::Sized>(
                    self,
                    backend: &B
                ) -> #krate::Result<i64> {
                    self.__count(backend)
                }
            }
        }
        Method::GetById(field) => get_by_id(ctx, field),
        Method::Constrain(field) => constrain(ctx, field, ret),
        Method::IsNull(field) => is_null(method, field, ret),
        Method::Order(field) => order(ctx, field, ret)
    }
}

fn keyword(method: &Method<'_>, ret: Option<TokenStream>, sql: &str) -> TokenStream {
    let ident = format_ident!("{}", method.name());
    let doc = format!("Join the next constraint with `{}`.", sql.trim());
    quote! {
        #[doc = #doc]
        pub fn #ident(mut self) -> #ret {
            self.selection.push_str(#sql);
            self.__transition()
        }
    }
}

fn get_by_id(ctx: &Context<'_>, field: &Field) -> TokenStream {
    let krate = ctx.krate;
    let entity_name = ctx.entity_name;
    let ident = &field.ident;
    let param = field
        .value_type
        .map(|v| v.param_type())
        .unwrap_or_else(|| quote! { i64 });
    let doc = format!(
        "Fetch the [`{entity_name}`] whose `{}` equals `id`.\n\nReturns `None` unless exactly one row matches.",
        field.column
    );

    quote! {
        #[doc = #doc]
        ///
        /// # Errors
        ///
        /// Returns any error reported by the backend or while binding the row.
        pub fn get_by_id<B: #krate::Backend + ?::core::marker::Sized>(
            self,
            backend: &B,
            id: #param
        ) -> #krate::Result<::core::option::Option<#entity_name>> {
            let mut list = self.filter().#ident(#krate::Operator::Eq, id).get(backend)?;
            let found = if list.len() == 1 {
                list.get(0).map(::core::option::Option::Some)
            } else {
                ::core::result::Result::Ok(::core::option::Option::None)
            };
            list.close();
            found
        }
    }
}

fn constrain(ctx: &Context<'_>, field: &Field, ret: Option<TokenStream>) -> TokenStream {
    let krate = ctx.krate;
    let ident = &field.ident;
    let column = &field.column;
    let Some(value_type) = field.value_type else {
        return TokenStream::new();
    };
    let param = value_type.param_type();
    let value = format_ident!("value");
    let stringify = value_type.stringify(&value);
    let doc = format!("Constrain column `{column}` with `op` against `value`.");

    quote! {
        #[doc = #doc]
        pub fn #ident(mut self, op: #krate::Operator, #value: #param) -> #ret {
            self.selection.push_str(#column);
            self.selection.push_str(op.as_sql());
            self.selection.push('?');
            self.selection_args.push(#stringify);
            self.__transition()
        }
    }
}

fn is_null(method: &Method<'_>, field: &Field, ret: Option<TokenStream>) -> TokenStream {
    let ident = format_ident!("{}", method.name());
    let column = &field.column;
    let doc = format!("Require column `{column}` to be `NULL` (`true`) or not `NULL` (`false`).");

    quote! {
        #[doc = #doc]
        pub fn #ident(mut self, is_null: bool) -> #ret {
            self.selection.push_str(#column);
            self.selection.push_str(if is_null { " IS NULL" } else { " IS NOT NULL" });
            self.__transition()
        }
    }
}

fn order(ctx: &Context<'_>, field: &Field, ret: Option<TokenStream>) -> TokenStream {
    let krate = ctx.krate;
    let ident = &field.ident;
    let column = &field.column;
    let doc = format!("Order by column `{column}`.");

    quote! {
        #[doc = #doc]
        pub fn #ident(mut self, direction: #krate::SortDirection) -> #ret {
            self.sort_order.push_str(#column);
            self.sort_order.push(' ');
            self.sort_order.push_str(direction.as_sql());
            self.__transition()
        }
    }
}
