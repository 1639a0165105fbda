// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Shared fixtures for generator tests.

use syn::{ItemMod, parse_quote};

use super::{
    diagnostics::Diagnostics,
    model::{Entity, Hierarchy},
    parse::SchemaModule
};

/// Extract the first entity of a schema module.
pub fn entity_from(item: ItemMod) -> Entity {
    let (_, items) = item.content.expect("inline module");
    let module = SchemaModule::collect(&items);
    let decl = &module.entities()[0];
    let hierarchy = Hierarchy::resolve(decl, &module).expect("valid hierarchy");
    let mut diagnostics = Diagnostics::new();
    Entity::extract(&hierarchy, module.locators_for(&decl.ident), &mut diagnostics)
        .expect("valid entity")
}

/// `Contact` with an identifier, a filterable and sortable text field and a
/// nullable field.
pub fn contact() -> Entity {
    entity_from(parse_quote! {
        mod schema {
            #[entity(collection = "Contacts")]
            pub struct Contact {
                #[column("id")]
                #[id]
                pub id: i64,

                #[column("name")]
                #[filter]
                #[sort]
                pub name: String,

                #[column("nickname")]
                pub nickname: Option<String>
            }

            impl Contact {
                #[locator]
                pub const URI: &'static str = "R";
            }
        }
    })
}

/// `Message` whose locator takes a thread id.
pub fn message() -> Entity {
    entity_from(parse_quote! {
        mod schema {
            #[entity(collection = "Messages")]
            pub struct Message {
                #[column("body")]
                #[sort]
                pub body: String
            }

            impl Message {
                #[locator]
                pub fn thread(thread_id: i64) -> String {
                    format!("content://threads/{thread_id}")
                }
            }
        }
    })
}
