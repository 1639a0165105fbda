// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use rowbind::{Backend, Operator, Result, SortDirection};

#[rowbind::schema]
mod contacts {
    #[entity(collection = "Contacts")]
    #[derive(Debug, Default)]
    pub struct Contact {
        #[column("_id")]
        #[id]
        #[sort]
        pub id: i64,

        #[column("display_name")]
        #[filter]
        #[sort]
        pub name: String,

        #[column]
        pub nickname: Option<String>,

        pub scratch: Vec<u8>
    }

    impl Contact {
        #[locator]
        pub const URI: &'static str = "content://contacts";
    }
}

use contacts::{Contact, Contacts};

fn queries<B: Backend>(backend: &B) -> Result<Option<Contact>> {
    let _ = Contacts::count(backend)?;
    let _ = Contacts::get(backend)?;
    let _ = Contacts::filter()
        .name(Operator::Like, "A%")
        .or()
        .nickname_is_null(true)
        .and()
        .id(Operator::Gt, 10)
        .sort_by()
        .name(SortDirection::Asc)
        .then_by()
        .id(SortDirection::Desc)
        .count(backend)?;
    Contacts::get_by_id(backend, 1)
}

fn main() {}
