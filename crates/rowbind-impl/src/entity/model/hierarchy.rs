// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Supertype chain resolution.
//!
//! `#[entity(extends = "Base")]` makes an entity inherit the mapped fields of
//! `Base`. The chain is followed while supertypes are themselves `#[entity]`
//! structs and stops at the first plain struct:
//!
//! ```text
//! Manager ──extends──▶ Employee ──extends──▶ Person ──extends──▶ Timestamps
//!  #[entity]            #[entity]            #[entity]           plain struct
//!                                                                (chain ends)
//! ```
//!
//! A supertype that does not exist in the module, a malformed one, or a
//! cycle is a structural error.

use std::collections::HashSet;

use crate::entity::parse::{Declared, EntityDef, SchemaModule};

/// Resolved supertype chain, most general first.
#[derive(Debug, Clone)]
pub struct Hierarchy<'a> {
    chain: Vec<&'a EntityDef>
}

impl<'a> Hierarchy<'a> {
    /// Resolve the chain of an entity.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown or malformed supertypes and cycles.
    pub fn resolve(entity: &'a EntityDef, module: &'a SchemaModule) -> darling::Result<Self> {
        let mut chain = vec![entity];
        let mut visited = HashSet::from([entity.name_str()]);
        let mut current = entity;

        while let Some(base) = &current.extends {
            if !visited.insert(base.to_string()) {
                return Err(darling::Error::custom(format!(
                    "cyclic supertype chain: `{}` extends `{base}`",
                    current.ident
                ))
                .with_span(base));
            }
            match module.declared(base) {
                Declared::Entity(def) => {
                    chain.push(def);
                    current = def;
                }
                Declared::Plain => break,
                Declared::Invalid => {
                    return Err(darling::Error::custom(format!(
                        "supertype `{base}` of `{}` has an invalid #[entity] declaration",
                        current.ident
                    ))
                    .with_span(base));
                }
                Declared::Missing => {
                    return Err(darling::Error::custom(format!(
                        "supertype `{base}` of `{}` is not declared in this schema module",
                        current.ident
                    ))
                    .with_span(base));
                }
            }
        }

        chain.reverse();
        Ok(Self {
            chain
        })
    }

    /// Declarations from the most general to the entity itself.
    #[must_use]
    pub fn chain(&self) -> &[&'a EntityDef] {
        &self.chain
    }

    /// The entity itself.
    #[must_use]
    pub fn entity(&self) -> &'a EntityDef {
        self.chain[self.chain.len() - 1]
    }

    /// Fields to inject into the entity struct.
    ///
    /// Ancestor fields in order, most general first, skipping any name that
    /// a more specific declaration already has.
    #[must_use]
    pub fn inherited_fields(&self) -> Vec<syn::Field> {
        let mut taken: HashSet<String> = HashSet::new();
        let mut inherited = Vec::new();

        for def in self.chain.iter().rev() {
            let is_self = std::ptr::eq(*def, self.entity());
            let mut own = Vec::new();
            for field in &def.raw_fields {
                let Some(ident) = &field.ident else {
                    continue;
                };
                if taken.insert(ident.to_string()) && !is_self {
                    own.push(field.clone());
                }
            }
            inherited.splice(0..0, own);
        }

        inherited
    }
}
