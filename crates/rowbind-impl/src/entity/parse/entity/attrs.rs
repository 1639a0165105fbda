// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Entity-level attribute parsing with darling.
//!
//! This module defines the internal [`EntityAttrs`] structure used for
//! parsing `#[entity(...)]` attributes. This is an implementation detail;
//! the public API uses [`EntityDef`](super::EntityDef).
//!
//! # Supported Attributes
//!
//! | Attribute | Required | Default | Description |
//! |-----------|----------|---------|-------------|
//! | `collection` | Yes | — | Name of the generated collection type |
//! | `extends` | No | — | Schema-marked supertype declared in the same module |

use darling::FromDeriveInput;
use syn::{Generics, Ident, Visibility};

/// Entity-level attributes parsed from `#[entity(...)]`.
///
/// # Example
///
/// ```rust,ignore
/// #[entity(collection = "Employees", extends = "Person")]
/// pub struct Employee { /* ... */ }
/// ```
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(entity), supports(struct_named))]
pub struct EntityAttrs {
    /// Struct identifier (e.g., `Contact`).
    pub ident: Ident,

    /// Struct visibility, propagated to every generated type.
    pub vis: Visibility,

    /// Struct generics. Entities must not have any.
    pub generics: Generics,

    /// Name of the generated collection type.
    ///
    /// Normalized to PascalCase, so `collection = "contacts"` generates
    /// `Contacts`.
    pub collection: String,

    /// Supertype whose mapped fields this entity inherits.
    #[darling(default)]
    pub extends: Option<Ident>
}
