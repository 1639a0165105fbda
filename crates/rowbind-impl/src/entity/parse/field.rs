// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field-level attribute parsing.
//!
//! A field takes part in the schema only when it carries `#[column]`.
//! Capability markers refine a mapped field:
//!
//! | Marker | Effect |
//! |--------|--------|
//! | `#[column]` | Field is read from the row store |
//! | `#[id]` | Identifier, enables `get_by_id` (implies `#[filter]`) |
//! | `#[filter]` | Field can be constrained |
//! | `#[sort]` | Field can be used as a sort criterion |
//!
//! # Architecture
//!
//! ```text
//! field.rs (coordinator)
//! └── column.rs  - column name resolution
//! ```

mod column;

pub use column::ColumnConfig;
use syn::{Attribute, Field, Ident, Type, Visibility};

/// Attribute names consumed from fields.
pub const FIELD_MARKERS: [&str; 4] = ["column", "id", "filter", "sort"];

/// Returns `true` if the attribute is one of the field markers.
pub fn is_field_marker(attr: &Attribute) -> bool {
    FIELD_MARKERS.iter().any(|name| attr.path().is_ident(name))
}

/// Field definition with all parsed markers.
///
/// # Example
///
/// ```rust,ignore
/// #[column("_id")]
/// #[id]                 // is_id = true
/// pub id: i64,
///
/// #[column("name")]
/// #[filter]             // is_filter = true
/// #[sort]               // is_sort = true
/// pub name: String,
/// ```
#[derive(Debug, Clone)]
pub struct FieldDef {
    /// Field identifier.
    pub ident: Ident,

    /// Declared visibility.
    pub vis: Visibility,

    /// Declared type.
    pub ty: Type,

    /// Column mapping. `None` for fields outside the schema.
    pub column: Option<ColumnConfig>,

    /// `#[id]` present.
    pub is_id: bool,

    /// `#[filter]` present.
    pub is_filter: bool,

    /// `#[sort]` present.
    pub is_sort: bool,

    /// Span of the first capability marker, for diagnostics.
    pub marker_span: Option<proc_macro2::Span>
}

impl FieldDef {
    /// Parse field definition from syn's `Field`.
    ///
    /// # Errors
    ///
    /// Returns an error for tuple fields and malformed `#[column]` attributes.
    pub fn from_field(field: &Field) -> darling::Result<Self> {
        let ident = field
            .ident
            .clone()
            .ok_or_else(|| darling::Error::custom("tuple structs are not supported"))?;

        let mut column = None;
        let mut is_id = false;
        let mut is_filter = false;
        let mut is_sort = false;
        let mut marker_span = None;

        for attr in &field.attrs {
            if attr.path().is_ident("column") {
                column = Some(ColumnConfig::from_attr(attr, &ident)?);
                continue;
            }
            let flag = if attr.path().is_ident("id") {
                &mut is_id
            } else if attr.path().is_ident("filter") {
                &mut is_filter
            } else if attr.path().is_ident("sort") {
                &mut is_sort
            } else {
                continue;
            };
            attr.meta.require_path_only().map_err(darling::Error::from)?;
            *flag = true;
            marker_span.get_or_insert(syn::spanned::Spanned::span(attr));
        }

        Ok(Self {
            ident,
            vis: field.vis.clone(),
            ty: field.ty.clone(),
            column,
            is_id,
            is_filter,
            is_sort,
            marker_span
        })
    }

    /// Check if any capability marker is present.
    #[must_use]
    pub fn has_markers(&self) -> bool {
        self.is_id || self.is_filter || self.is_sort
    }
}
