// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Module rewriting.
//!
//! The schema markers are inert attributes only the macro understands, so
//! they are removed before the module reaches the compiler. Subtypes also
//! receive the fields they inherit, placed before their own fields:
//!
//! ```text
//! #[entity(collection = "Employees",     pub struct Employee {
//!          extends = "Person")]              pub id: i64,        ◀─ from Person
//! pub struct Employee {            ──▶       pub name: String,   ◀─ from Person
//!     #[column] #[sort]                      pub salary: f64,
//!     pub salary: f64,                   }
//! }
//! ```

use std::collections::HashMap;

use syn::{Fields, ImplItem, Item, punctuated::Punctuated};

use super::parse::{is_field_marker, strip_locator_marker};

/// Strip every schema marker and inject inherited fields.
///
/// `inherited` maps an entity name to the fields to prepend.
pub fn apply(items: &mut [Item], inherited: &HashMap<String, Vec<syn::Field>>) {
    for item in items {
        match item {
            Item::Struct(s) if s.attrs.iter().any(|a| a.path().is_ident("entity")) => {
                s.attrs.retain(|a| !a.path().is_ident("entity"));
                for field in s.fields.iter_mut() {
                    field.attrs.retain(|a| !is_field_marker(a));
                }
                if let (Some(extra), Fields::Named(named)) =
                    (inherited.get(&s.ident.to_string()), &mut s.fields)
                {
                    let own = std::mem::take(&mut named.named);
                    let mut merged: Punctuated<syn::Field, syn::Token![,]> =
                        extra.iter().cloned().collect();
                    merged.extend(own);
                    named.named = merged;
                }
            }
            Item::Impl(imp) => {
                for impl_item in &mut imp.items {
                    match impl_item {
                        ImplItem::Const(c) => strip_locator_marker(&mut c.attrs),
                        ImplItem::Fn(f) => strip_locator_marker(&mut f.attrs),
                        ImplItem::Type(t) => strip_locator_marker(&mut t.attrs),
                        ImplItem::Macro(m) => strip_locator_marker(&mut m.attrs),
                        _ => {}
                    }
                }
            }
            Item::Const(c) => strip_locator_marker(&mut c.attrs),
            Item::Static(s) => strip_locator_marker(&mut s.attrs),
            Item::Fn(f) => strip_locator_marker(&mut f.attrs),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use quote::ToTokens;
    use syn::{ItemMod, parse_quote};

    use super::*;

    fn rewrite(module: ItemMod, inherited: HashMap<String, Vec<syn::Field>>) -> String {
        let (_, mut items) = module.content.unwrap();
        apply(&mut items, &inherited);
        items
            .iter()
            .map(|i| i.to_token_stream().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn strips_markers() {
        let out = rewrite(
            parse_quote! {
                mod s {
                    #[entity(collection = "Contacts")]
                    #[derive(Default)]
                    pub struct Contact {
                        #[column("_id")] #[id] #[filter] #[sort]
                        pub id: i64
                    }
                    impl Contact {
                        #[locator]
                        pub const URI: &'static str = "R";
                    }
                    #[locator(Contact)]
                    pub fn other() -> String { String::new() }
                }
            },
            HashMap::new()
        );
        for marker in ["entity", "column", "# [id]", "filter", "sort", "locator"] {
            assert!(!out.contains(marker), "{marker} left in {out}");
        }
        assert!(out.contains("# [derive (Default)]"));
    }

    #[test]
    fn injects_inherited_fields_first() {
        let inherited = HashMap::from([(
            "Employee".to_owned(),
            vec![parse_quote!(pub id: i64), parse_quote!(pub name: String)]
        )]);
        let out = rewrite(
            parse_quote! {
                mod s {
                    #[entity(collection = "Employees", extends = "Person")]
                    pub struct Employee {
                        #[column] pub salary: f64
                    }
                }
            },
            inherited
        );
        assert!(out.contains("pub struct Employee { pub id : i64 , pub name : String , pub salary : f64 }"));
    }

    #[test]
    fn plain_structs_untouched() {
        let out = rewrite(
            parse_quote! {
                mod s {
                    pub struct Plain { #[serde(skip)] pub x: i64 }
                }
            },
            HashMap::new()
        );
        assert!(out.contains("# [serde (skip)]"));
    }
}
