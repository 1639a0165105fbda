// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Discovery of schema declarations inside a `#[rowbind::schema]` module.
//!
//! One pass over the module items collects:
//!
//! - every `#[entity]` struct, parsed into an [`EntityDef`]
//! - the names of plain structs, which end a supertype chain
//! - every `#[locator]`, keyed by the entity it belongs to
//!
//! Parse failures are kept per entity, so one malformed declaration does not
//! hide the others.

use std::collections::{HashMap, HashSet};

use syn::{Ident, ImplItem, Item, ItemImpl, Type};

use super::{
    entity::EntityDef,
    locator::{LocatorDef, find_locator_marker}
};

/// Lookup result for a type named in `extends`.
#[derive(Debug, Clone, Copy)]
pub enum Declared<'a> {
    /// A well-formed `#[entity]` struct.
    Entity(&'a EntityDef),

    /// An `#[entity]` struct that failed to parse.
    Invalid,

    /// A struct without `#[entity]`.
    Plain,

    /// Nothing with that name in the module.
    Missing
}

/// Schema declarations found in one module.
#[derive(Debug, Default)]
pub struct SchemaModule {
    entities: Vec<EntityDef>,
    invalid:  HashSet<String>,
    plain:    HashSet<String>,
    locators: HashMap<String, Vec<LocatorDef>>,
    errors:   Vec<darling::Error>
}

impl SchemaModule {
    /// Collect declarations from the module items.
    pub fn collect(items: &[Item]) -> Self {
        let mut module = Self::default();
        let mut pending: Vec<(Ident, LocatorDef)> = Vec::new();

        for item in items {
            match item {
                Item::Struct(s) if s.attrs.iter().any(|a| a.path().is_ident("entity")) => {
                    match EntityDef::from_item(s) {
                        Ok(def) => module.entities.push(def),
                        Err(err) => {
                            module.invalid.insert(s.ident.to_string());
                            module.errors.push(err);
                        }
                    }
                }
                Item::Struct(s) => {
                    module.plain.insert(s.ident.to_string());
                }
                Item::Impl(imp) => {
                    let owner = impl_owner(imp);
                    for impl_item in &imp.items {
                        if find_locator_marker(impl_item_attrs(impl_item)).is_none() {
                            continue;
                        }
                        match &owner {
                            Some(owner) => {
                                pending.push((owner.clone(), LocatorDef::from_impl_item(impl_item)));
                            }
                            None => module.errors.push(
                                darling::Error::custom(
                                    "#[locator] must be declared in `impl Entity` of an #[entity] struct"
                                )
                                .with_span(&imp.self_ty)
                            )
                        }
                    }
                }
                other => {
                    if let Some(attr) = item_attrs(other).and_then(find_locator_marker) {
                        match LocatorDef::target(attr) {
                            Ok(owner) => pending.push((owner, LocatorDef::from_item(other))),
                            Err(err) => module.errors.push(err)
                        }
                    }
                }
            }
        }

        for (owner, def) in pending {
            let name = owner.to_string();
            if module.entities.iter().any(|e| e.ident == owner) || module.invalid.contains(&name) {
                module.locators.entry(name).or_default().push(def);
            } else {
                module.errors.push(
                    darling::Error::custom(format!(
                        "#[locator] refers to `{owner}`, which is not an #[entity] struct of this module"
                    ))
                    .with_span(&owner)
                );
            }
        }

        module
    }

    /// Well-formed entity declarations in module order.
    #[must_use]
    pub fn entities(&self) -> &[EntityDef] {
        &self.entities
    }

    /// Look up a type named in `extends`.
    #[must_use]
    pub fn declared(&self, name: &Ident) -> Declared<'_> {
        let key = name.to_string();
        if let Some(def) = self.entities.iter().find(|e| e.ident == key) {
            Declared::Entity(def)
        } else if self.invalid.contains(&key) {
            Declared::Invalid
        } else if self.plain.contains(&key) {
            Declared::Plain
        } else {
            Declared::Missing
        }
    }

    /// Locators declared for an entity.
    #[must_use]
    pub fn locators_for(&self, entity: &Ident) -> &[LocatorDef] {
        self.locators
            .get(&entity.to_string())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Take the errors found while collecting.
    pub fn take_errors(&mut self) -> Vec<darling::Error> {
        std::mem::take(&mut self.errors)
    }
}

/// Entity a plain `impl Name { .. }` block belongs to.
fn impl_owner(imp: &ItemImpl) -> Option<Ident> {
    if !imp.generics.params.is_empty() {
        return None;
    }
    let Type::Path(path) = &*imp.self_ty else {
        return None;
    };
    if path.qself.is_some() {
        return None;
    }
    let segment = path.path.segments.last()?;
    if !segment.arguments.is_none() {
        return None;
    }
    Some(segment.ident.clone())
}

fn impl_item_attrs(item: &ImplItem) -> &[syn::Attribute] {
    match item {
        ImplItem::Const(c) => &c.attrs,
        ImplItem::Fn(f) => &f.attrs,
        ImplItem::Type(t) => &t.attrs,
        ImplItem::Macro(m) => &m.attrs,
        _ => &[]
    }
}

fn item_attrs(item: &Item) -> Option<&[syn::Attribute]> {
    match item {
        Item::Const(c) => Some(&c.attrs),
        Item::Static(s) => Some(&s.attrs),
        Item::Fn(f) => Some(&f.attrs),
        Item::Enum(e) => Some(&e.attrs),
        Item::Type(t) => Some(&t.attrs),
        Item::Use(u) => Some(&u.attrs),
        Item::Mod(m) => Some(&m.attrs),
        Item::Trait(t) => Some(&t.attrs),
        Item::Union(u) => Some(&u.attrs),
        Item::Macro(m) => Some(&m.attrs),
        _ => None
    }
}
