// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

//! # Attribute Quick Reference
//!
//! ## Module-Level `#[rowbind::schema(...)]`
//!
//! ```rust,ignore
//! #[rowbind::schema]                       // generated code uses ::rowbind
//! #[rowbind::schema(crate = "my::rowbind")] // re-exported runtime
//! mod schema { /* ... */ }
//! ```
//!
//! ## Entity-Level `#[entity(...)]`
//!
//! ```rust,ignore
//! #[entity(
//!     collection = "Contacts", // Required: name of the generated collection type
//!     extends = "Person"       // Optional: inherit mapped fields of another entity
//! )]
//! #[derive(Default)]           // Required by the result list
//! pub struct Contact { /* ... */ }
//! ```
//!
//! ## Field-Level Attributes
//!
//! ```rust,ignore
//! pub struct Contact {
//!     #[column("_id")]   // Mapped to column `_id`
//!     #[id]              // Identifier: enables get_by_id, implies #[filter]
//!     pub id: i64,
//!
//!     #[column]          // Mapped to column `name`
//!     #[filter]          // name(Operator, value) on the constraint builder
//!     #[sort]            // name(SortDirection) on the order builder
//!     pub name: String,
//!
//!     #[column(name = "photo_uri")]
//!     pub photo: Option<String>, // nullable: photo_is_null(bool)
//!
//!     pub cache: Vec<u8>,        // not mapped
//! }
//! ```
//!
//! ## Locator
//!
//! ```rust,ignore
//! impl Contact {
//!     #[locator]
//!     pub const URI: &'static str = "content://contacts";
//! }
//!
//! #[locator(Message)]
//! pub fn thread(thread_id: i64) -> Locator { /* ... */ }
//! ```
//!
//! # Generated Code Overview
//!
//! For a `Contact` entity with `collection = "Contacts"`:
//!
//! | Generated Type | Description |
//! |----------------|-------------|
//! | `Contacts` | Entry points: `filter()`, `sort_by()`, `get()`, `count()`, `get_by_id()` or `with_locator(..)` |
//! | `ContactsQuery<S>` | Typestate query builder |
//! | `ContactsList<C>` | Result list owning the backend cursor |
//!
//! # Supported Field Types
//!
//! | Rust Type | Cursor Getter |
//! |-----------|---------------|
//! | `i16`, `i32`, `i64` | `get_i16`, `get_i32`, `get_i64` |
//! | `f32`, `f64` | `get_f32`, `get_f64` |
//! | `String` | `get_text` |
//! | `Option<T>` of the above | `is_null`, then the getter |

mod entity;

use proc_macro::TokenStream;

/// Generate typed query APIs for the entities of a module.
///
/// # Overview
///
/// Applied to an inline module. Every struct marked `#[entity(...)]` gets a
/// collection type, a typestate query builder and a result list, appended to
/// the module. All marker attributes are removed from the output.
///
/// # Example
///
/// ```rust,ignore
/// #[rowbind::schema]
/// mod contacts {
///     #[entity(collection = "Contacts")]
///     #[derive(Debug, Default)]
///     pub struct Contact {
///         #[column("_id")]
///         #[id]
///         pub id: i64,
///
///         #[column("display_name")]
///         #[filter]
///         #[sort]
///         pub name: String,
///     }
///
///     impl Contact {
///         #[locator]
///         pub const URI: &'static str = "content://contacts";
///     }
/// }
///
/// use contacts::Contacts;
/// use rowbind::{Operator, SortDirection};
///
/// let mut adults = Contacts::filter()
///     .name(Operator::Like, "A%")
///     .sort_by()
///     .name(SortDirection::Asc)
///     .get(&backend)?;
///
/// for contact in adults.iter() {
///     println!("{:?}", contact?);
/// }
/// ```
///
/// # Errors
///
/// Problems in the schema are reported as compile errors pointing at the
/// offending declaration. Generation continues for the rest of the module.
#[proc_macro_attribute]
pub fn schema(args: TokenStream, input: TokenStream) -> TokenStream {
    entity::expand(args.into(), input.into()).into()
}
