// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Schema model extraction.
//!
//! Turns a parsed [`EntityDef`](super::parse::EntityDef), its supertype
//! chain and its locator into the normalized [`Entity`] every generator
//! works from.
//!
//! # Architecture
//!
//! ```text
//! model.rs (Entity, Field, extraction)
//! ├── hierarchy.rs  - supertype chain resolution
//! ├── uri.rs        - locator resolution
//! └── value_type.rs - supported field types
//! ```
//!
//! # Extraction Rules
//!
//! | Rule | On violation |
//! |------|--------------|
//! | mapped field is `pub` | schema error, field dropped |
//! | mapped field owns its value (no `&T`) | schema error, field dropped |
//! | one field per column | schema error, later field dropped |
//! | capability markers need `#[column]` | schema error |
//! | at most one `#[id]` | schema error, no `get_by_id` |
//! | `<field>_is_null` free for the null check | schema error, field not constrainable |
//! | exactly one locator | schema error, no entry points |
//! | locator shape | structural error, entity aborted |
//!
//! Fields are ordered from the most general supertype to the entity. A field
//! redeclared with the same name replaces the inherited one in place. An
//! unmapped redeclaration removes the inherited mapping.

mod hierarchy;
mod uri;
mod value_type;

pub use hierarchy::Hierarchy;
use syn::{Ident, Type, Visibility, ext::IdentExt};
pub use uri::Uri;
pub use value_type::{Classified, ValueType};

use super::{
    diagnostics::{Diagnostics, error_at},
    parse::{FieldDef, LocatorDef}
};

/// Mapped field after extraction.
#[derive(Debug, Clone)]
pub struct Field {
    /// Field identifier.
    pub ident: Ident,

    /// Struct that declared the field.
    pub owner: Ident,

    /// Column name.
    pub column: String,

    /// Declared type.
    pub ty: Type,

    /// Supported value type, `None` if unsupported.
    pub value_type: Option<ValueType>,

    /// Declared as `Option<_>`.
    pub is_nullable: bool,

    /// Carries `#[id]`.
    pub is_identifier: bool,

    /// Can be constrained: `#[filter]` or `#[id]` on a supported type.
    pub is_constrainable: bool,

    /// Can be used as a sort criterion.
    pub is_sortable: bool
}

impl Field {
    fn from_def(def: &FieldDef, owner: &Ident, column: String) -> Self {
        let Classified {
            value,
            nullable
        } = ValueType::classify(&def.ty);
        Self {
            ident: def.ident.clone(),
            owner: owner.clone(),
            column,
            ty: def.ty.clone(),
            value_type: value,
            is_nullable: nullable,
            is_identifier: def.is_id,
            is_constrainable: (def.is_filter || def.is_id) && value.is_some(),
            is_sortable: def.is_sort
        }
    }

    /// Qualified name used in diagnostics, e.g. `Contact::name`.
    #[must_use]
    pub fn qualified(&self) -> String {
        format!("{}::{}", self.owner, self.ident)
    }
}

/// Normalized entity.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Struct identifier.
    pub ident: Ident,

    /// Struct visibility.
    pub vis: Visibility,

    /// Generated collection type name.
    pub collection: Ident,

    /// Mapped fields, most general supertype first.
    pub fields: Vec<Field>,

    /// Resolved locator. `None` after a schema error.
    pub uri: Option<Uri>,

    identifier: Option<usize>
}

impl Entity {
    /// Extract the model of `hierarchy.entity()`.
    ///
    /// Schema errors are reported to `diagnostics` and extraction continues.
    ///
    /// # Errors
    ///
    /// Returns a structural error when the locator has an illegal shape.
    pub fn extract(
        hierarchy: &Hierarchy<'_>,
        locators: &[LocatorDef],
        diagnostics: &mut Diagnostics
    ) -> darling::Result<Self> {
        let decl = hierarchy.entity();
        let uri = Uri::resolve(&decl.ident, locators, diagnostics)?;

        let mut fields: Vec<Field> = Vec::new();
        for def in hierarchy.chain() {
            for field in &def.fields {
                let candidate = eligible(field, &def.ident, diagnostics);
                merge(&mut fields, &field.ident, candidate, diagnostics);
            }
        }
        reserve_null_checks(&mut fields, diagnostics);

        let ids: Vec<&Field> = fields.iter().filter(|f| f.is_identifier).collect();
        let identifier = match ids.as_slice() {
            [] => None,
            [id] => fields
                .iter()
                .position(|f| f.ident == id.ident)
                .filter(|&i| fields[i].is_constrainable),
            many => {
                let names: Vec<String> = many.iter().map(|f| format!("`{}`", f.ident)).collect();
                diagnostics.report(
                    darling::Error::custom(format!(
                        "entity `{}` has more than one #[id] field: {}",
                        decl.ident,
                        names.join(", ")
                    ))
                    .with_span(&decl.ident)
                );
                None
            }
        };

        Ok(Self {
            ident: decl.ident.clone(),
            vis: decl.vis.clone(),
            collection: decl.collection.clone(),
            fields,
            uri,
            identifier
        })
    }

    /// The single identifier field usable by `get_by_id`.
    #[must_use]
    pub fn identifier(&self) -> Option<&Field> {
        self.identifier.map(|i| &self.fields[i])
    }

    /// Fields accepted by constraint methods.
    pub fn constrainable_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.is_constrainable)
    }

    /// Fields that can be tested for `NULL`.
    pub fn nullable_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.is_nullable)
    }

    /// Fields accepted by sort methods.
    pub fn sortable_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.is_sortable)
    }

    /// Column names in field order.
    #[must_use]
    pub fn projection(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.column.as_str()).collect()
    }
}

/// Check one declared field, reporting every independent problem.
fn eligible(field: &FieldDef, owner: &Ident, diagnostics: &mut Diagnostics) -> Option<Field> {
    let Some(column) = &field.column else {
        if field.has_markers() {
            diagnostics.report(error_at(
                field.marker_span.unwrap_or_else(|| field.ident.span()),
                format!(
                    "field `{owner}::{}` has #[id], #[filter] or #[sort] but no #[column]",
                    field.ident
                )
            ));
        }
        return None;
    };

    let mut ok = true;
    if !matches!(field.vis, Visibility::Public(_)) {
        diagnostics.report(
            darling::Error::custom(format!(
                "field `{owner}::{}` is mapped with #[column] but is not `pub`",
                field.ident
            ))
            .with_span(&field.ident)
        );
        ok = false;
    }
    if matches!(field.ty, Type::Reference(_)) {
        diagnostics.report(
            darling::Error::custom(format!(
                "field `{owner}::{}` is mapped with #[column] but borrows its value; mapped fields must own it",
                field.ident
            ))
            .with_span(&field.ty)
        );
        ok = false;
    }

    ok.then(|| Field::from_def(field, owner, column.name.clone()))
}

/// Apply one declared field on top of the inherited ones.
///
/// The declaration takes over any inherited mapping of the same name. When
/// it is not mapped itself (or cannot be) the inherited mapping is dropped,
/// since the struct field now has the declared type.
fn merge(
    fields: &mut Vec<Field>,
    ident: &Ident,
    candidate: Option<Field>,
    diagnostics: &mut Diagnostics
) {
    let replaced = fields.iter().position(|f| f.ident == *ident);
    let Some(candidate) = candidate else {
        if let Some(i) = replaced {
            fields.remove(i);
        }
        return;
    };

    let conflict = fields
        .iter()
        .enumerate()
        .find(|(i, f)| Some(*i) != replaced && f.column == candidate.column);
    if let Some((_, existing)) = conflict {
        diagnostics.report(
            darling::Error::custom(format!(
                "column `{}` of field `{}` is already mapped to field `{}`",
                candidate.column,
                candidate.qualified(),
                existing.qualified()
            ))
            .with_span(&candidate.ident)
        );
        if let Some(i) = replaced {
            fields.remove(i);
        }
        return;
    }

    match replaced {
        Some(i) => fields[i] = candidate,
        None => fields.push(candidate)
    }
}

/// Keep `<field>_is_null` names free for the null checks of nullable fields.
///
/// A constrainable field whose constraint method would take such a name
/// loses its constraint capability.
fn reserve_null_checks(fields: &mut [Field], diagnostics: &mut Diagnostics) {
    let checks: Vec<(String, String)> = fields
        .iter()
        .filter(|f| f.is_nullable)
        .map(|f| (format!("{}_is_null", f.ident.unraw()), f.qualified()))
        .collect();

    for field in fields.iter_mut().filter(|f| f.is_constrainable) {
        let name = field.ident.unraw().to_string();
        if let Some((_, nullable)) = checks.iter().find(|(check, _)| *check == name) {
            diagnostics.report(
                darling::Error::custom(format!(
                    "constraint method `{name}` of field `{}` collides with the null check of field `{nullable}`",
                    field.qualified()
                ))
                .with_span(&field.ident)
            );
            field.is_constrainable = false;
        }
    }
}
