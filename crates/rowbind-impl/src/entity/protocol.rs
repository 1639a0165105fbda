// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Query protocol table.
//!
//! The protocol is a small state machine over the builder states defined in
//! `rowbind_core::state`. Which states exist and which methods each offers
//! depends on the entity's capabilities:
//!
//! | State | Exists when | Methods |
//! |-------|-------------|---------|
//! | `Root` | always | `filter`¹, `sort_by`², `get`, `count`, `get_by_id`³ |
//! | `Constrainable` | ¹ | `<field>(op, v)` per constrainable field, `<field>_is_null(bool)` per nullable field |
//! | `Constrained` | ¹ | `and`, `or`, `sort_by`², `get`, `count` |
//! | `Sortable` | ² | per sortable field: `<field>(direction)` |
//! | `Sorted` | ² | `then_by`, `get`, `count` |
//!
//! ¹ at least one constrainable field, ² at least one sortable field,
//! ³ exactly one identifier field.
//!
//! The builder generator renders this table; nothing else decides which
//! method goes where.

use syn::ext::IdentExt;

use crate::entity::model::{Entity, Field};

/// Builder protocol state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProtocolState {
    /// Chain start.
    Root,
    /// Expecting a constraint.
    Constrainable,
    /// Constraint accumulated.
    Constrained,
    /// Expecting a sort criterion.
    Sortable,
    /// Sort criterion accumulated.
    Sorted
}

impl ProtocolState {
    /// Marker type name in `rowbind_core::state`.
    #[must_use]
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Root => "Root",
            Self::Constrainable => "Constrainable",
            Self::Constrained => "Constrained",
            Self::Sortable => "Sortable",
            Self::Sorted => "Sorted"
        }
    }
}

/// One method of a protocol state.
#[derive(Debug, Clone, Copy)]
pub enum Method<'a> {
    /// `filter()`: Root → Constrainable.
    Filter,
    /// `sort_by()`: Root/Constrained → Sortable.
    SortBy,
    /// `get(backend)`: terminal.
    Get,
    /// `count(backend)`: terminal.
    Count,
    /// `get_by_id(backend, id)`: terminal.
    GetById(&'a Field),
    /// `<field>(op, value)`: Constrainable → Constrained.
    Constrain(&'a Field),
    /// `<field>_is_null(bool)`: Constrainable → Constrained.
    IsNull(&'a Field),
    /// `and()`: Constrained → Constrainable.
    And,
    /// `or()`: Constrained → Constrainable.
    Or,
    /// `<field>(direction)`: Sortable → Sorted.
    Order(&'a Field),
    /// `then_by()`: Sorted → Sortable.
    ThenBy
}

impl Method<'_> {
    /// Generated method name.
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::Filter => "filter".to_owned(),
            Self::SortBy => "sort_by".to_owned(),
            Self::Get => "get".to_owned(),
            Self::Count => "count".to_owned(),
            Self::GetById(_) => "get_by_id".to_owned(),
            Self::Constrain(f) | Self::Order(f) => f.ident.to_string(),
            Self::IsNull(f) => format!("{}_is_null", f.ident.unraw()),
            Self::And => "and".to_owned(),
            Self::Or => "or".to_owned(),
            Self::ThenBy => "then_by".to_owned()
        }
    }

    /// State reached by the method. `None` for terminal methods.
    #[must_use]
    pub fn target(&self) -> Option<ProtocolState> {
        match self {
            Self::Filter | Self::And | Self::Or => Some(ProtocolState::Constrainable),
            Self::SortBy | Self::ThenBy => Some(ProtocolState::Sortable),
            Self::Constrain(_) | Self::IsNull(_) => Some(ProtocolState::Constrained),
            Self::Order(_) => Some(ProtocolState::Sorted),
            Self::Get | Self::Count | Self::GetById(_) => None
        }
    }
}

/// Methods available in one state.
#[derive(Debug, Clone)]
pub struct Interface<'a> {
    /// State.
    pub state:   ProtocolState,
    /// Methods in declaration order.
    pub methods: Vec<Method<'a>>
}

/// Synthesized protocol of one entity.
#[derive(Debug, Clone)]
pub struct Protocol<'a> {
    interfaces: Vec<Interface<'a>>
}

impl<'a> Protocol<'a> {
    /// Build the protocol table for an entity.
    #[must_use]
    pub fn synthesize(entity: &'a Entity) -> Self {
        let constrainable: Vec<&Field> = entity.constrainable_fields().collect();
        let sortable: Vec<&Field> = entity.sortable_fields().collect();
        let can_filter = !constrainable.is_empty();
        let can_sort = !sortable.is_empty();

        let mut interfaces = Vec::new();

        let mut root = Vec::new();
        if can_filter {
            root.push(Method::Filter);
        }
        if can_sort {
            root.push(Method::SortBy);
        }
        root.extend([Method::Get, Method::Count]);
        if let Some(id) = entity.identifier() {
            root.push(Method::GetById(id));
        }
        interfaces.push(Interface {
            state:   ProtocolState::Root,
            methods: root
        });

        if can_filter {
            let mut methods: Vec<Method<'a>> =
                constrainable.iter().map(|&f| Method::Constrain(f)).collect();
            methods.extend(entity.nullable_fields().map(Method::IsNull));
            interfaces.push(Interface {
                state: ProtocolState::Constrainable,
                methods
            });

            let mut methods = vec![Method::And, Method::Or];
            if can_sort {
                methods.push(Method::SortBy);
            }
            methods.extend([Method::Get, Method::Count]);
            interfaces.push(Interface {
                state: ProtocolState::Constrained,
                methods
            });
        }

        if can_sort {
            interfaces.push(Interface {
                state:   ProtocolState::Sortable,
                methods: sortable.iter().map(|&f| Method::Order(f)).collect()
            });
            interfaces.push(Interface {
                state:   ProtocolState::Sorted,
                methods: vec![Method::ThenBy, Method::Get, Method::Count]
            });
        }

        Self {
            interfaces
        }
    }

    /// Interfaces in state order.
    #[must_use]
    pub fn interfaces(&self) -> &[Interface<'a>] {
        &self.interfaces
    }

    /// Interface of a state, if the state exists.
    #[must_use]
    pub fn interface(&self, state: ProtocolState) -> Option<&Interface<'a>> {
        self.interfaces.iter().find(|i| i.state == state)
    }
}

#[cfg(test)]
mod tests {
    use syn::{ItemMod, parse_quote};

    use super::*;
    use crate::entity::{
        diagnostics::Diagnostics,
        model::Hierarchy,
        parse::SchemaModule
    };

    fn entity(item: ItemMod) -> Entity {
        let (_, items) = item.content.unwrap();
        let m = SchemaModule::collect(&items);
        let decl = &m.entities()[0];
        let h = Hierarchy::resolve(decl, &m).unwrap();
        let mut diags = Diagnostics::new();
        Entity::extract(&h, m.locators_for(&decl.ident), &mut diags).unwrap()
    }

    fn names(protocol: &Protocol<'_>, state: ProtocolState) -> Vec<String> {
        protocol
            .interface(state)
            .map(|i| i.methods.iter().map(Method::name).collect())
            .unwrap_or_default()
    }

    fn contact() -> Entity {
        entity(parse_quote! {
            mod s {
                #[entity(collection = "Contacts")]
                pub struct Contact {
                    #[column("_id")] #[id] pub id: i64,
                    #[column("name")] #[filter] #[sort] pub name: String,
                    #[column("age")] #[sort] pub age: i32,
                    #[column("nick")] pub nick: Option<String>
                }
                impl Contact {
                    #[locator]
                    pub const URI: &'static str = "content://contacts";
                }
            }
        })
    }

    #[test]
    fn full_protocol() {
        let contact = contact();
        let p = Protocol::synthesize(&contact);
        assert_eq!(p.interfaces().len(), 5);
        assert_eq!(
            names(&p, ProtocolState::Root),
            ["filter", "sort_by", "get", "count", "get_by_id"]
        );
        assert_eq!(
            names(&p, ProtocolState::Constrainable),
            ["id", "name", "nick_is_null"]
        );
        assert_eq!(
            names(&p, ProtocolState::Constrained),
            ["and", "or", "sort_by", "get", "count"]
        );
        assert_eq!(names(&p, ProtocolState::Sortable), ["name", "age"]);
        assert_eq!(names(&p, ProtocolState::Sorted), ["then_by", "get", "count"]);
    }

    #[test]
    fn every_transition_targets_existing_state() {
        let contact = contact();
        let p = Protocol::synthesize(&contact);
        for iface in p.interfaces() {
            for method in &iface.methods {
                if let Some(target) = method.target() {
                    assert!(p.interface(target).is_some(), "{} targets missing {target:?}", method.name());
                }
            }
        }
    }

    #[test]
    fn no_capabilities_only_root() {
        let plain = entity(parse_quote! {
            mod s {
                #[entity(collection = "Notes")]
                pub struct Note {
                    #[column] pub body: String
                }
                impl Note {
                    #[locator]
                    pub const URI: &'static str = "content://notes";
                }
            }
        });
        let p = Protocol::synthesize(&plain);
        assert_eq!(p.interfaces().len(), 1);
        assert_eq!(names(&p, ProtocolState::Root), ["get", "count"]);
    }

    #[test]
    fn filter_only_has_no_sort_states() {
        let filtered = entity(parse_quote! {
            mod s {
                #[entity(collection = "Notes")]
                pub struct Note {
                    #[column] #[filter] pub body: String
                }
                impl Note {
                    #[locator]
                    pub const URI: &'static str = "content://notes";
                }
            }
        });
        let p = Protocol::synthesize(&filtered);
        assert!(p.interface(ProtocolState::Sortable).is_none());
        assert!(p.interface(ProtocolState::Sorted).is_none());
        assert_eq!(names(&p, ProtocolState::Constrained), ["and", "or", "get", "count"]);
        assert_eq!(names(&p, ProtocolState::Root), ["filter", "get", "count"]);
    }

    #[test]
    fn sort_only_has_no_constraint_states() {
        let sorted = entity(parse_quote! {
            mod s {
                #[entity(collection = "Notes")]
                pub struct Note {
                    #[column] #[sort] pub body: String
                }
                impl Note {
                    #[locator]
                    pub const URI: &'static str = "content://notes";
                }
            }
        });
        let p = Protocol::synthesize(&sorted);
        assert!(p.interface(ProtocolState::Constrainable).is_none());
        assert!(p.interface(ProtocolState::Constrained).is_none());
        assert_eq!(names(&p, ProtocolState::Root), ["sort_by", "get", "count"]);
    }
}
