// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![allow(dead_code)]

#[rowbind::schema]
mod contacts {
    #[entity(collection = "Contacts")]
    #[derive(Default)]
    pub struct Contact {
        #[column]
        pub name: String
    }

    impl Contact {
        #[locator]
        pub fn uri(&self) -> String {
            String::from("content://contacts")
        }
    }
}

fn main() {}
