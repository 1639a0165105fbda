// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Entity-level attribute parsing.
//!
//! This module handles parsing of entity-level attributes using darling,
//! and provides the [`EntityDef`] structure consumed by model extraction.
//!
//! # Module Structure
//!
//! ```text
//! entity/
//! ├── mod.rs    — EntityDef definition and parsing
//! ├── attrs.rs  — EntityAttrs (darling parsing struct)
//! └── tests.rs  — parsing tests
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::entity::parse::EntityDef;
//!
//! let entity = EntityDef::from_item(&item)?;
//! let base = entity.extends.as_ref();
//! ```

mod attrs;

pub use attrs::EntityAttrs;
use convert_case::{Case, Casing};
use darling::FromDeriveInput;
use syn::{DeriveInput, Field, Ident, ItemStruct, Visibility};

use super::field::{FieldDef, is_field_marker};

/// Parsed `#[entity]` struct.
///
/// Holds the declaration as written. Inherited fields are not resolved
/// here; see [`Hierarchy`](crate::entity::model::Hierarchy).
#[derive(Debug, Clone)]
pub struct EntityDef {
    /// Struct identifier (e.g., `Contact`).
    pub ident: Ident,

    /// Struct visibility.
    ///
    /// Propagated to all generated types so they have the same
    /// visibility as the source entity.
    pub vis: Visibility,

    /// Generated collection type name, PascalCase.
    pub collection: Ident,

    /// Declared supertype.
    pub extends: Option<Ident>,

    /// Parsed field definitions in declaration order.
    pub fields: Vec<FieldDef>,

    /// Declared fields with all field markers removed.
    ///
    /// Used to inject inherited fields into subtypes.
    pub raw_fields: Vec<Field>
}

impl EntityDef {
    /// Parse entity definition from an `#[entity]` struct.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the struct is a tuple or unit struct
    /// - the struct is generic
    /// - `collection` is missing or does not form a valid identifier
    /// - any field carries a malformed marker
    pub fn from_item(item: &ItemStruct) -> darling::Result<Self> {
        let input = DeriveInput::from(item.clone());
        let attrs = EntityAttrs::from_derive_input(&input)?;

        let mut errors = darling::Error::accumulator();

        if !attrs.generics.params.is_empty() || attrs.generics.where_clause.is_some() {
            errors.push(
                darling::Error::custom("entities cannot be generic").with_span(&attrs.generics)
            );
        }

        let collection = errors.handle(collection_ident(&attrs.collection, &attrs.ident));

        let fields: Vec<FieldDef> = item
            .fields
            .iter()
            .filter_map(|field| errors.handle(FieldDef::from_field(field)))
            .collect();

        let raw_fields = item
            .fields
            .iter()
            .cloned()
            .map(|mut field| {
                field.attrs.retain(|attr| !is_field_marker(attr));
                field
            })
            .collect();

        errors.finish()?;

        let Some(collection) = collection else {
            return Err(darling::Error::custom("invalid collection name").with_span(&attrs.ident));
        };

        Ok(Self {
            ident: attrs.ident,
            vis: attrs.vis,
            collection,
            extends: attrs.extends,
            fields,
            raw_fields
        })
    }

    /// Get the entity name as a string.
    #[must_use]
    pub fn name_str(&self) -> String {
        self.ident.to_string()
    }
}

/// Normalize a collection name to a PascalCase identifier.
fn collection_ident(name: &str, span: &Ident) -> darling::Result<Ident> {
    let pascal = name.to_case(Case::Pascal);
    if pascal.is_empty() {
        return Err(darling::Error::custom("collection name must not be empty").with_span(span));
    }
    let mut ident = syn::parse_str::<Ident>(&pascal).map_err(|_| {
        darling::Error::custom(format!(
            "collection name `{name}` does not form a valid type name"
        ))
        .with_span(span)
    })?;
    ident.set_span(span.span());
    Ok(ident)
}
