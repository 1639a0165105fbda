// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use rowbind::{Backend, Result};

#[rowbind::schema]
mod accounts {
    #[entity(collection = "Accounts")]
    #[derive(Debug, Default)]
    pub struct Account {
        #[column("_id")]
        #[id]
        pub id: i64,

        #[column("name")]
        #[filter]
        pub name: String
    }

    impl Account {
        #[locator]
        pub const URI: &'static str = "content://accounts";
    }

    #[entity(collection = "Mailboxes", extends = "Account")]
    #[derive(Debug, Default)]
    pub struct Mailbox {
        pub name: i32,

        #[column("unread")]
        #[sort]
        pub unread: i64
    }

    impl Mailbox {
        #[locator]
        pub const URI: &'static str = "content://mailboxes";
    }
}

fn first_mailbox<B: Backend>(backend: &B) -> Result<Option<accounts::Mailbox>> {
    let mut list = accounts::Mailboxes::get(backend)?;
    if list.is_empty() {
        return Ok(None);
    }
    let mut mailbox = accounts::Mailbox {
        name: 3,
        ..Default::default()
    };
    list.get_into(0, &mut mailbox)?;
    Ok(Some(mailbox))
}

fn main() {}
