// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

mod runtime {
    pub use rowbind::*;
}

#[rowbind::schema(crate = "crate::runtime")]
mod notes {
    #[entity(collection = "notes")]
    #[derive(Debug, Default)]
    pub struct Note {
        #[column]
        #[filter]
        pub title: String,

        #[column]
        pub pinned: i16
    }

    #[locator(Note)]
    pub static NOTES: &str = "content://notes";
}

fn queries<B: runtime::Backend>(backend: &B) -> runtime::Result<i64> {
    notes::Notes::filter()
        .title(runtime::Operator::Eq, "todo")
        .count(backend)
}

fn main() {}
