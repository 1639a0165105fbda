// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Column mapping parsed from `#[column]`.
//!
//! # Supported Forms
//!
//! | Attribute | Column |
//! |-----------|--------|
//! | `#[column]` | field name |
//! | `#[column("display_name")]` | `display_name` |
//! | `#[column(name = "display_name")]` | `display_name` |
//! | `#[column = "display_name"]` | `display_name` |

use syn::{Attribute, Ident, LitStr, Meta, ext::IdentExt};

/// Column a field is mapped to.
#[derive(Debug, Clone)]
pub struct ColumnConfig {
    /// Column name in the row store.
    pub name: String
}

impl ColumnConfig {
    /// Parse column config from a `#[column]` attribute.
    ///
    /// The field identifier is used when no explicit name is given.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown options and empty names.
    pub fn from_attr(attr: &Attribute, field: &Ident) -> darling::Result<Self> {
        let name = match &attr.meta {
            Meta::Path(_) => field.unraw().to_string(),
            Meta::NameValue(nv) => match &nv.value {
                syn::Expr::Lit(syn::ExprLit {
                    lit: syn::Lit::Str(lit),
                    ..
                }) => lit.value(),
                other => {
                    return Err(
                        darling::Error::custom("expected a string literal column name")
                            .with_span(other)
                    );
                }
            },
            Meta::List(list) => {
                if let Ok(lit) = list.parse_args::<LitStr>() {
                    lit.value()
                } else {
                    let mut name = None;
                    list.parse_nested_meta(|meta| {
                        if meta.path.is_ident("name") {
                            let value: LitStr = meta.value()?.parse()?;
                            name = Some(value.value());
                            Ok(())
                        } else {
                            Err(meta.error("unknown column option, expected `name`"))
                        }
                    })
                    .map_err(darling::Error::from)?;
                    name.unwrap_or_else(|| field.unraw().to_string())
                }
            }
        };

        if name.trim().is_empty() {
            return Err(darling::Error::custom("column name must not be empty").with_span(attr));
        }

        Ok(Self {
            name
        })
    }
}
