// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![allow(dead_code)]

#[rowbind::schema]
mod contacts {
    #[entity(collection = "Contacts")]
    #[derive(Default)]
    pub struct Contact {
        #[column]
        #[filter]
        pub name: String,

        #[column]
        pub nick: Option<String>,

        #[column]
        #[filter]
        pub nick_is_null: i32
    }

    impl Contact {
        #[locator]
        pub const URI: &'static str = "content://contacts";
    }
}

fn main() {}
