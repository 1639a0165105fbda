// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![allow(dead_code)]

#[rowbind::schema]
mod contacts {
    #[entity(collection = "Contacts")]
    #[derive(Default)]
    pub struct Contact {
        #[column("_id")]
        #[id]
        pub id: i64,

        #[column("lookup_key")]
        #[id]
        pub lookup: i64
    }

    impl Contact {
        #[locator]
        pub const URI: &'static str = "content://contacts";
    }
}

fn main() {}
