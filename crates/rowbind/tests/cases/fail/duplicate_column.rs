// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![allow(dead_code)]

#[rowbind::schema]
mod contacts {
    #[entity(collection = "Contacts")]
    #[derive(Default)]
    pub struct Contact {
        #[column("name")]
        pub name: String,

        #[column("name")]
        pub display_name: String
    }

    impl Contact {
        #[locator]
        pub const URI: &'static str = "content://contacts";
    }
}

fn main() {}
