// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use rowbind::{Backend, Operator, Result};

#[rowbind::schema]
mod people {
    #[entity(collection = "People")]
    #[derive(Debug, Default)]
    pub struct Person {
        #[column("_id")]
        #[id]
        pub id: i64,

        #[column]
        #[filter]
        pub name: String
    }

    impl Person {
        #[locator]
        pub const URI: &'static str = "content://people";
    }

    #[entity(collection = "Employees", extends = "Person")]
    #[derive(Debug, Default)]
    pub struct Employee {
        #[column]
        #[filter]
        pub salary: f64,

        #[column("employee_name")]
        #[sort]
        pub name: String
    }

    impl Employee {
        #[locator]
        pub fn uri() -> String {
            String::from("content://employees")
        }
    }
}

use people::{Employee, Employees};

fn queries<B: Backend>(backend: &B) -> Result<Option<Employee>> {
    let mut list = Employees::filter()
        .salary(Operator::Ge, 1000.0)
        .and()
        .id(Operator::Ne, 3)
        .get(backend)?;
    let mut employee = Employee::default();
    if !list.is_empty() {
        list.get_into(0, &mut employee)?;
    }
    let _ = employee.id;
    Employees::get_by_id(backend, 1)
}

fn main() {}
