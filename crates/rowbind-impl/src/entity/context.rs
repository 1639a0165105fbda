// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generation context for one entity.
//!
//! Contains the [`Context`] struct that precomputes all identifiers needed by
//! the generators, so every generator names things the same way.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::Ident;

use super::{
    model::Entity,
    protocol::{Protocol, ProtocolState}
};

/// Context for code generation.
///
/// # Fields
///
/// | Field | Description |
/// |-------|-------------|
/// | `entity` | Normalized entity model |
/// | `krate` | Runtime crate path (e.g., `::rowbind`) |
/// | `entity_name` | Entity struct name (e.g., `Contact`) |
/// | `collection` | Collection type name (e.g., `Contacts`) |
/// | `query` | Builder type name (e.g., `ContactsQuery`) |
/// | `list` | Result list type name (e.g., `ContactsList`) |
/// | `protocol` | Protocol table |
pub struct Context<'a> {
    /// Normalized entity model.
    pub entity: &'a Entity,

    /// Runtime crate path.
    pub krate: &'a syn::Path,

    /// Entity struct name.
    pub entity_name: &'a Ident,

    /// Collection type name.
    pub collection: &'a Ident,

    /// Builder type name.
    pub query: Ident,

    /// Result list type name.
    pub list: Ident,

    /// Protocol table.
    pub protocol: Protocol<'a>
}

impl<'a> Context<'a> {
    /// Create a new generation context.
    pub fn new(entity: &'a Entity, krate: &'a syn::Path) -> Self {
        Self {
            entity,
            krate,
            entity_name: &entity.ident,
            collection: &entity.collection,
            query: format_ident!("{}Query", entity.collection),
            list: format_ident!("{}List", entity.collection),
            protocol: Protocol::synthesize(entity)
        }
    }

    /// Builder type in a given state, e.g. `ContactsQuery<::rowbind::state::Root>`.
    #[must_use]
    pub fn query_in(&self, state: ProtocolState) -> TokenStream {
        let query = &self.query;
        let marker = self.state(state);
        quote! { #query<#marker> }
    }

    /// Path of a state marker, e.g. `::rowbind::state::Sorted`.
    #[must_use]
    pub fn state(&self, state: ProtocolState) -> TokenStream {
        let krate = self.krate;
        let marker = format_ident!("{}", state.marker());
        quote! { #krate::state::#marker }
    }
}
