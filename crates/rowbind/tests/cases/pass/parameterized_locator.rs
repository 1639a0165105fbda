// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use rowbind::{Backend, Result, SortDirection};

#[rowbind::schema]
mod messages {
    use rowbind::Locator;

    #[entity(collection = "Messages")]
    #[derive(Debug, Default)]
    pub struct Message {
        #[column]
        #[filter]
        #[sort]
        pub body: String,

        #[column]
        pub read: Option<i32>
    }

    #[locator(Message)]
    pub fn thread(account: &str, thread_id: i64) -> Locator {
        Locator::new(format!("content://{account}/threads/{thread_id}"))
    }
}

use messages::Messages;

fn queries<B: Backend>(backend: &B) -> Result<Vec<String>> {
    let _ = Messages::with_locator("me", 1).count(backend)?;
    let mut list = Messages::with_locator("me", 1)
        .filter()
        .read_is_null(false)
        .sort_by()
        .body(SortDirection::Asc)
        .get(backend)?;
    list.iter().map(|m| m.map(|m| m.body)).collect()
}

fn main() {}
