// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

//! # rowbind
//!
//! One crate, all features. Re-exports:
//! - [`schema`] attribute macro from `rowbind-impl`
//! - All types from `rowbind-core` ([`Backend`], [`RowCursor`],
//!   [`Operator`], [`SortDirection`], [`Locator`], [`state`])
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use rowbind::{Operator, SortDirection};
//!
//! #[rowbind::schema]
//! mod contacts {
//!     #[entity(collection = "Contacts")]
//!     #[derive(Debug, Default)]
//!     pub struct Contact {
//!         #[column("_id")]
//!         #[id]
//!         pub id: i64,
//!
//!         #[column("display_name")]
//!         #[filter]
//!         #[sort]
//!         pub name: String
//!     }
//!
//!     impl Contact {
//!         #[locator]
//!         pub const URI: &'static str = "content://contacts";
//!     }
//! }
//!
//! let total = contacts::Contacts::count(&backend)?;
//! let ann = contacts::Contacts::get_by_id(&backend, 7)?;
//! let list = contacts::Contacts::filter()
//!     .name(Operator::Like, "A%")
//!     .sort_by()
//!     .name(SortDirection::Desc)
//!     .get(&backend)?;
//! ```
//!
//! # Illegal Chains
//!
//! The builder only exposes the calls the current state allows, so a
//! malformed query does not compile.
//!
//! A dangling `filter()` has no terminal:
//!
//! ```rust,compile_fail
//! #[rowbind::schema]
//! mod contacts {
//!     #[entity(collection = "Contacts")]
//!     #[derive(Default)]
//!     pub struct Contact {
//!         #[column]
//!         #[filter]
//!         pub name: String
//!     }
//!
//!     impl Contact {
//!         #[locator]
//!         pub const URI: &'static str = "content://contacts";
//!     }
//! }
//!
//! fn run<B: rowbind::Backend>(backend: &B) {
//!     let _ = contacts::Contacts::filter().get(backend);
//! }
//!
//! fn main() {}
//! ```
//!
//! Two constraints need a connective between them:
//!
//! ```rust,compile_fail
//! use rowbind::Operator;
//!
//! #[rowbind::schema]
//! mod contacts {
//!     #[entity(collection = "Contacts")]
//!     #[derive(Default)]
//!     pub struct Contact {
//!         #[column]
//!         #[filter]
//!         pub name: String
//!     }
//!
//!     impl Contact {
//!         #[locator]
//!         pub const URI: &'static str = "content://contacts";
//!     }
//! }
//!
//! fn main() {
//!     let _ = contacts::Contacts::filter()
//!         .name(Operator::Eq, "a")
//!         .name(Operator::Eq, "b");
//! }
//! ```
//!
//! Fields without `#[sort]` cannot order a query:
//!
//! ```rust,compile_fail
//! use rowbind::SortDirection;
//!
//! #[rowbind::schema]
//! mod contacts {
//!     #[entity(collection = "Contacts")]
//!     #[derive(Default)]
//!     pub struct Contact {
//!         #[column]
//!         #[sort]
//!         pub name: String,
//!
//!         #[column]
//!         pub age: i32
//!     }
//!
//!     impl Contact {
//!         #[locator]
//!         pub const URI: &'static str = "content://contacts";
//!     }
//! }
//!
//! fn main() {
//!     let _ = contacts::Contacts::sort_by().age(SortDirection::Asc);
//! }
//! ```

pub use rowbind_core::*;
pub use rowbind_impl::schema;
