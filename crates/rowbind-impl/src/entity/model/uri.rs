// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Locator resolution.
//!
//! An entity needs exactly one `#[locator]`. The accepted shapes are:
//!
//! | Declaration | Uri |
//! |-------------|-----|
//! | `pub const URI: &str` / `String` / `Locator` | constant |
//! | `pub static URI: ...` (module level) | constant |
//! | `pub fn uri() -> ...` | constant (called each time) |
//! | `pub fn uri(a: A, b: B) -> ...` | parameterized, entry point `with_locator(a, b)` |
//!
//! A missing or ambiguous locator is a schema error: the collection is still
//! generated, without entry points. A marked item of the wrong shape is a
//! structural error and aborts generation for the entity.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{FnArg, Ident, Pat, ReturnType, Type, Visibility};

use crate::entity::{
    diagnostics::{Diagnostics, error_at},
    parse::{LocatorDef, LocatorKind, LocatorScope}
};

/// Type produced by the locator item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocatorType {
    /// `&str`
    Str,
    /// `String`
    String,
    /// `Locator`
    Locator
}

/// Parameter of a parameterized locator.
#[derive(Debug, Clone)]
pub struct UriParam {
    /// Parameter name.
    pub ident: Ident,
    /// Parameter type.
    pub ty:    Type
}

/// Resolved locator of an entity.
#[derive(Debug, Clone)]
pub struct Uri {
    accessor: Ident,
    scope:    LocatorScope,
    ty:       LocatorType,
    call:     bool,
    params:   Vec<UriParam>
}

impl Uri {
    /// Resolve the locator declarations of an entity.
    ///
    /// Returns `Ok(None)` after reporting a schema error when the entity has
    /// no locator or more than one.
    ///
    /// # Errors
    ///
    /// Returns a structural error when the single locator has an illegal
    /// shape.
    pub fn resolve(
        entity: &Ident,
        defs: &[LocatorDef],
        diagnostics: &mut Diagnostics
    ) -> darling::Result<Option<Self>> {
        let def = match defs {
            [def] => def,
            [] => {
                diagnostics.report(
                    darling::Error::custom(format!(
                        "entity `{entity}` has no #[locator]; mark a `pub const` or `pub fn` in `impl {entity}`"
                    ))
                    .with_span(entity)
                );
                return Ok(None);
            }
            many => {
                diagnostics.report(
                    darling::Error::custom(format!(
                        "entity `{entity}` has {} items marked #[locator]; exactly one is allowed",
                        many.len()
                    ))
                    .with_span(entity)
                );
                return Ok(None);
            }
        };

        let span = def.span();
        match &def.kind {
            LocatorKind::Const {
                ident,
                vis,
                ty
            } => {
                require_public(vis, span)?;
                Ok(Some(Self::constant(ident, def.scope, locator_type(ty, span)?)))
            }
            LocatorKind::Static {
                ident,
                vis,
                ty,
                mutable
            } => {
                require_public(vis, span)?;
                let ty = locator_type(ty, span)?;
                if *mutable {
                    diagnostics.report(
                        darling::Error::custom(format!(
                            "locator `{ident}` of `{entity}` must not be `static mut`"
                        ))
                        .with_span(ident)
                    );
                }
                Ok(Some(Self::constant(ident, def.scope, ty)))
            }
            LocatorKind::Fn {
                vis,
                sig
            } => {
                require_public(vis, span)?;
                if sig.receiver().is_some() {
                    return Err(darling::Error::custom(
                        "locator function must be an associated function without `self`"
                    )
                    .with_span(&sig.ident));
                }
                if !sig.generics.params.is_empty() || sig.asyncness.is_some() {
                    return Err(darling::Error::custom(
                        "locator function must not be generic or async"
                    )
                    .with_span(&sig.ident));
                }
                let ReturnType::Type(_, ret) = &sig.output else {
                    return Err(darling::Error::custom(
                        "locator function must return `Locator`, `String` or `&str`"
                    )
                    .with_span(&sig.ident));
                };
                let ty = locator_type(ret, span)?;
                let params = sig
                    .inputs
                    .iter()
                    .map(uri_param)
                    .collect::<darling::Result<Vec<_>>>()?;
                Ok(Some(Self {
                    accessor: sig.ident.clone(),
                    scope: def.scope,
                    ty,
                    call: true,
                    params
                }))
            }
            LocatorKind::Other {
                span
            } => Err(error_at(*span, "#[locator] must mark a `const`, `static` or `fn`"))
        }
    }

    fn constant(ident: &Ident, scope: LocatorScope, ty: LocatorType) -> Self {
        Self {
            accessor: ident.clone(),
            scope,
            ty,
            call: false,
            params: Vec::new()
        }
    }

    /// `true` when entry points must take the locator parameters.
    #[must_use]
    pub fn needs_parameters(&self) -> bool {
        !self.params.is_empty()
    }

    /// Parameters of a parameterized locator.
    #[must_use]
    pub fn params(&self) -> &[UriParam] {
        &self.params
    }

    /// Expression producing a `Locator` from the declared item.
    ///
    /// Parameter names are forwarded as-is, so the expression must be
    /// placed where they are in scope.
    #[must_use]
    pub fn expression(&self, owner: &Ident, krate: &syn::Path) -> TokenStream {
        let accessor = &self.accessor;
        let path = match self.scope {
            LocatorScope::Associated => quote! { #owner::#accessor },
            LocatorScope::Module => quote! { #accessor }
        };
        if self.call {
            let args = self.params.iter().map(|p| &p.ident);
            return quote! { #krate::Locator::from(#path(#(#args),*)) };
        }
        match self.ty {
            LocatorType::Str => quote! { #krate::Locator::from(#path) },
            LocatorType::String | LocatorType::Locator => {
                quote! { #krate::Locator::from(&#path) }
            }
        }
    }
}

fn require_public(vis: &Visibility, span: proc_macro2::Span) -> darling::Result<()> {
    if matches!(vis, Visibility::Public(_)) {
        Ok(())
    } else {
        Err(error_at(span, "locator must be declared `pub`"))
    }
}

/// Accept `&str`, `String` and `Locator`.
fn locator_type(ty: &Type, span: proc_macro2::Span) -> darling::Result<LocatorType> {
    let found = match ty {
        Type::Reference(r) if r.mutability.is_none() => match &*r.elem {
            Type::Path(p) if p.path.is_ident("str") => Some(LocatorType::Str),
            _ => None
        },
        Type::Path(p) if p.qself.is_none() => {
            p.path
                .segments
                .last()
                .filter(|s| s.arguments.is_none())
                .and_then(|s| match s.ident.to_string().as_str() {
                    "String" => Some(LocatorType::String),
                    "Locator" => Some(LocatorType::Locator),
                    _ => None
                })
        }
        _ => None
    };
    found.ok_or_else(|| error_at(span, "locator must have type `Locator`, `String` or `&str`"))
}

fn uri_param(arg: &FnArg) -> darling::Result<UriParam> {
    let FnArg::Typed(typed) = arg else {
        return Err(darling::Error::custom("unexpected receiver"));
    };
    match &*typed.pat {
        Pat::Ident(pat) if pat.by_ref.is_none() && pat.subpat.is_none() => Ok(UriParam {
            ident: pat.ident.clone(),
            ty:    (*typed.ty).clone()
        }),
        other => Err(darling::Error::custom(
            "locator parameters must be plain identifiers"
        )
        .with_span(other))
    }
}
