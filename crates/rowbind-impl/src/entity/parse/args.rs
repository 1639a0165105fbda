// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Arguments of `#[rowbind::schema(...)]`.
//!
//! | Argument | Default | Description |
//! |----------|---------|-------------|
//! | `crate` | `::rowbind` | Path of the runtime crate used by generated code |

use darling::{FromMeta, ast::NestedMeta};
use proc_macro2::TokenStream;

/// Parsed schema macro arguments.
#[derive(Debug, FromMeta)]
pub struct SchemaArgs {
    /// Runtime crate path.
    #[darling(rename = "crate", default = "default_crate_path")]
    pub krate: syn::Path
}

/// Default runtime crate path.
pub fn default_crate_path() -> syn::Path {
    syn::parse_quote!(::rowbind)
}

impl Default for SchemaArgs {
    fn default() -> Self {
        Self {
            krate: default_crate_path()
        }
    }
}

impl SchemaArgs {
    /// Parse the attribute argument tokens.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown arguments or a malformed path.
    pub fn parse(args: TokenStream) -> darling::Result<Self> {
        if args.is_empty() {
            return Ok(Self::default());
        }
        let items = NestedMeta::parse_meta_list(args)?;
        Self::from_list(&items)
    }
}
