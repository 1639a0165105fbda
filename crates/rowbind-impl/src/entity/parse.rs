// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Attribute parsing for the schema macro.
//!
//! This module turns the annotated module into schema declarations. It uses
//! [`darling`] for the macro arguments and entity-level attributes, and
//! manual parsing for field markers and locators (which use marker-style
//! syntax).
//!
//! # Architecture
//!
//! ```text
//! parse.rs (coordinator)
//! ├── args.rs     - #[rowbind::schema(crate = "...")]
//! ├── module.rs   - one pass over the module items (SchemaModule)
//! ├── entity/     - #[entity(...)] structs (EntityDef)
//! ├── field.rs    - #[column], #[id], #[filter], #[sort] (FieldDef)
//! │   └── column.rs
//! └── locator.rs  - #[locator] items (LocatorDef)
//! ```
//!
//! # Data Structures
//!
//! ```text
//! SchemaModule
//! ├── entities: Vec<EntityDef>
//! │   └── EntityDef
//! │       ├── ident: Ident          (struct name, e.g., "Contact")
//! │       ├── vis: Visibility
//! │       ├── collection: Ident     (e.g., "Contacts")
//! │       ├── extends: Option<Ident>
//! │       └── fields: Vec<FieldDef>
//! │           └── FieldDef
//! │               ├── ident, vis, ty
//! │               ├── column: Option<ColumnConfig>
//! │               └── is_id, is_filter, is_sort
//! └── locators: entity name → Vec<LocatorDef>
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! #[rowbind::schema]
//! mod schema {
//!     use rowbind::Locator;
//!
//!     #[entity(collection = "Contacts")]
//!     pub struct Contact {
//!         #[column("_id")]
//!         #[id]
//!         pub id: i64,
//!
//!         #[column("display_name")]
//!         #[filter]
//!         #[sort]
//!         pub name: String,
//!
//!         #[column]
//!         pub nickname: Option<String>
//!     }
//!
//!     impl Contact {
//!         #[locator]
//!         pub const URI: &'static str = "content://contacts";
//!     }
//! }
//! ```

mod args;
mod entity;
mod field;
mod locator;
mod module;

pub use args::SchemaArgs;
pub use entity::EntityDef;
pub use field::{FieldDef, is_field_marker};
pub use locator::{LocatorDef, LocatorKind, LocatorScope, strip_locator_marker};
pub use module::{Declared, SchemaModule};
