// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Locator declarations parsed from `#[locator]`.
//!
//! A locator identifies the resource an entity's collection queries. It is
//! declared either as an associated item of the entity, or as a module item
//! naming the entity it belongs to:
//!
//! ```rust,ignore
//! impl Contact {
//!     #[locator]
//!     pub const URI: &'static str = "content://contacts";
//! }
//!
//! #[locator(Message)]
//! pub fn thread_messages(thread_id: i64) -> Locator {
//!     Locator::new(format!("content://threads/{thread_id}/messages"))
//! }
//! ```
//!
//! Parsing only records what was marked. Shape validation happens when the
//! locator is resolved into a [`Uri`](crate::entity::model::Uri).

use proc_macro2::Span;
use syn::{Attribute, Ident, ImplItem, Item, Signature, Type, Visibility, spanned::Spanned};

/// Attribute name marking a locator.
pub const LOCATOR_MARKER: &str = "locator";

/// Find the `#[locator]` attribute, if any.
pub fn find_locator_marker(attrs: &[Attribute]) -> Option<&Attribute> {
    attrs.iter().find(|attr| attr.path().is_ident(LOCATOR_MARKER))
}

/// Removes every `#[locator]` from the attribute list.
pub fn strip_locator_marker(attrs: &mut Vec<Attribute>) {
    attrs.retain(|attr| !attr.path().is_ident(LOCATOR_MARKER));
}

/// Where a locator is declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocatorScope {
    /// Inside `impl Entity { .. }`, referenced as `Entity::NAME`.
    Associated,

    /// In the schema module, referenced as `NAME`.
    Module
}

/// Shape of the marked item.
#[derive(Debug, Clone)]
pub enum LocatorKind {
    /// `const NAME: Ty = ...;`
    Const {
        /// Item identifier.
        ident: Ident,
        /// Declared visibility.
        vis:   Visibility,
        /// Declared type.
        ty:    Type
    },

    /// `static NAME: Ty = ...;`
    Static {
        /// Item identifier.
        ident:   Ident,
        /// Declared visibility.
        vis:     Visibility,
        /// Declared type.
        ty:      Type,
        /// `static mut`.
        mutable: bool
    },

    /// `fn name(..) -> Ty`
    Fn {
        /// Declared visibility.
        vis: Visibility,
        /// Full signature.
        sig: Signature
    },

    /// Any other kind of item.
    Other {
        /// Span of the marked item.
        span: Span
    }
}

/// Item marked `#[locator]`.
#[derive(Debug, Clone)]
pub struct LocatorDef {
    /// Declaration site.
    pub scope: LocatorScope,

    /// Item shape.
    pub kind: LocatorKind
}

impl LocatorDef {
    /// Record a marked associated item.
    pub fn from_impl_item(item: &ImplItem) -> Self {
        let kind = match item {
            ImplItem::Const(c) => LocatorKind::Const {
                ident: c.ident.clone(),
                vis:   c.vis.clone(),
                ty:    c.ty.clone()
            },
            ImplItem::Fn(f) => LocatorKind::Fn {
                vis: f.vis.clone(),
                sig: f.sig.clone()
            },
            other => LocatorKind::Other {
                span: other.span()
            }
        };
        Self {
            scope: LocatorScope::Associated,
            kind
        }
    }

    /// Record a marked module item.
    pub fn from_item(item: &Item) -> Self {
        let kind = match item {
            Item::Const(c) => LocatorKind::Const {
                ident: c.ident.clone(),
                vis:   c.vis.clone(),
                ty:    (*c.ty).clone()
            },
            Item::Static(s) => LocatorKind::Static {
                ident:   s.ident.clone(),
                vis:     s.vis.clone(),
                ty:      (*s.ty).clone(),
                mutable: matches!(s.mutability, syn::StaticMutability::Mut(_))
            },
            Item::Fn(f) => LocatorKind::Fn {
                vis: f.vis.clone(),
                sig: f.sig.clone()
            },
            other => LocatorKind::Other {
                span: other.span()
            }
        };
        Self {
            scope: LocatorScope::Module,
            kind
        }
    }

    /// Entity named by a module-level `#[locator(Entity)]`.
    ///
    /// # Errors
    ///
    /// Returns an error if the attribute has no argument or the argument is
    /// not a single identifier.
    pub fn target(attr: &Attribute) -> darling::Result<Ident> {
        attr.parse_args::<Ident>().map_err(|_| {
            darling::Error::custom(
                "module-level #[locator] must name its entity, e.g. #[locator(Contact)]"
            )
            .with_span(attr)
        })
    }

    /// Span for diagnostics.
    #[must_use]
    pub fn span(&self) -> Span {
        match &self.kind {
            LocatorKind::Const {
                ident, ..
            }
            | LocatorKind::Static {
                ident, ..
            } => ident.span(),
            LocatorKind::Fn {
                sig, ..
            } => sig.ident.span(),
            LocatorKind::Other {
                span
            } => *span
        }
    }
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::*;

    #[test]
    fn records_associated_const() {
        let item: ImplItem = parse_quote! {
            #[locator]
            pub const URI: &'static str = "content://contacts";
        };
        let def = LocatorDef::from_impl_item(&item);
        assert_eq!(def.scope, LocatorScope::Associated);
        assert!(matches!(def.kind, LocatorKind::Const { ident, .. } if ident == "URI"));
    }

    #[test]
    fn records_associated_fn() {
        let item: ImplItem = parse_quote! {
            #[locator]
            pub fn thread(id: i64) -> Locator { todo!() }
        };
        let LocatorKind::Fn {
            sig, ..
        } = LocatorDef::from_impl_item(&item).kind
        else {
            panic!("expected fn");
        };
        assert_eq!(sig.inputs.len(), 1);
    }

    #[test]
    fn records_other() {
        let item: ImplItem = parse_quote! {
            #[locator]
            type Uri = String;
        };
        assert!(matches!(
            LocatorDef::from_impl_item(&item).kind,
            LocatorKind::Other { .. }
        ));
    }

    #[test]
    fn records_module_static() {
        let item: Item = parse_quote! {
            #[locator(Contact)]
            pub static mut URI: &str = "content://x";
        };
        let def = LocatorDef::from_item(&item);
        assert_eq!(def.scope, LocatorScope::Module);
        assert!(matches!(def.kind, LocatorKind::Static { mutable: true, .. }));
    }

    #[test]
    fn target_requires_entity() {
        let attr: Attribute = parse_quote!(#[locator(Contact)]);
        assert_eq!(LocatorDef::target(&attr).unwrap(), "Contact");

        let attr: Attribute = parse_quote!(#[locator]);
        assert!(LocatorDef::target(&attr).is_err());
    }

    #[test]
    fn marker_helpers() {
        let mut attrs: Vec<Attribute> = vec![parse_quote!(#[locator]), parse_quote!(#[inline])];
        assert!(find_locator_marker(&attrs).is_some());
        strip_locator_marker(&mut attrs);
        assert!(find_locator_marker(&attrs).is_none());
        assert_eq!(attrs.len(), 1);
    }
}
