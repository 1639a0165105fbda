// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Result list generation.
//!
//! `get()` returns a `{Collection}List<C>` that owns the backend cursor and
//! binds entities on demand:
//!
//! | Method | Behavior |
//! |--------|----------|
//! | `len()` / `is_empty()` | row count of the cursor |
//! | `get(i)` | bind row `i` into a fresh entity |
//! | `get_into(i, &mut e)` | bind row `i` into an existing entity |
//! | `iter()` | bind every row in order |
//! | `close(self)` | close the cursor |
//!
//! Dropping the list also closes the cursor. The entity type must implement
//! `Default`, which provides the slots `get` binds into.

use proc_macro2::TokenStream;
use quote::quote;

use super::context::Context;

/// Generate the list type.
pub fn generate(ctx: &Context<'_>) -> TokenStream {
    let krate = ctx.krate;
    let vis = &ctx.entity.vis;
    let entity_name = ctx.entity_name;
    let collection = ctx.collection;
    let list = &ctx.list;
    let doc = format!("Rows of a [`{entity_name}`] query, bound on access.");
    let get_doc = format!("Bind row `index` into a new [`{entity_name}`].");

    quote! {
        #[doc = #doc]
        #[derive(Debug)]
        #vis struct #list<C: #krate::RowCursor> {
            cursor: #krate::CursorGuard<C>
        }

        impl<C: #krate::RowCursor> #list<C> {
            fn new(cursor: C) -> #krate::Result<Self> {
                let mut cursor = #krate::CursorGuard::new(cursor);
                if #krate::RowCursor::row_count(&*cursor) > 0 {
                    #krate::RowCursor::move_to(&mut *cursor, 0)?;
                }
                ::core::result::Result::Ok(Self { cursor })
            }

            /// Number of rows.
            #[must_use]
            pub fn len(&self) -> usize {
                #krate::RowCursor::row_count(&*self.cursor)
            }

            /// `true` if the query matched no row.
            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.len() == 0
            }

            #[doc = #get_doc]
            ///
            /// # Errors
            ///
            /// Returns `Error::IndexOutOfBounds` if `index >= len()`, or any
            /// error raised while reading the row.
            pub fn get(&mut self, index: usize) -> #krate::Result<#entity_name> {
                let mut entity = <#entity_name as ::core::default::Default>::default();
                self.get_into(index, &mut entity)?;
                ::core::result::Result::Ok(entity)
            }

            /// Bind row `index` into `entity`, overwriting its mapped fields.
            ///
            /// # Errors
            ///
            /// Returns `Error::IndexOutOfBounds` if `index >= len()`, or any
            /// error raised while reading the row.
            pub fn get_into(
                &mut self,
                index: usize,
                entity: &mut #entity_name
            ) -> #krate::Result<()> {
                let len = self.len();
                if index >= len {
                    return ::core::result::Result::Err(
                        #krate::Error::IndexOutOfBounds { index, len }
                    );
                }
                #krate::RowCursor::move_to(&mut *self.cursor, index)?;
                #collection::bind(entity, &*self.cursor)
            }

            /// Bind every row in order.
            pub fn iter(&mut self) -> impl ::core::iter::Iterator<Item = #krate::Result<#entity_name>> + '_ {
                (0..self.len()).map(move |index| self.get(index))
            }

            /// Close the underlying cursor.
            pub fn close(self) {
                ::core::mem::drop(self);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::test_support::contact;

    fn render() -> String {
        let entity = contact();
        let krate: syn::Path = syn::parse_quote!(::rowbind);
        let ctx = Context::new(&entity, &krate);
        generate(&ctx).to_string()
    }

    #[test]
    fn list_owns_guarded_cursor() {
        let tokens = render();
        assert!(tokens.contains("pub struct ContactsList < C : :: rowbind :: RowCursor >"));
        assert!(tokens.contains("cursor : :: rowbind :: CursorGuard < C >"));
    }

    #[test]
    fn positional_access_is_bounds_checked() {
        let tokens = render();
        assert!(tokens.contains("if index >= len"));
        assert!(tokens.contains(":: rowbind :: Error :: IndexOutOfBounds { index , len }"));
        assert!(tokens.contains("Contacts :: bind (entity , & * self . cursor)"));
    }

    #[test]
    fn fresh_entities_come_from_default() {
        let tokens = render();
        assert!(tokens.contains("< Contact as :: core :: default :: Default > :: default ()"));
    }
}
