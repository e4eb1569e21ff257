//! Demo data set used when seeding is enabled.

use crate::model::employee::{Address, Employee, Gender, MaritalStatus};
use chrono::NaiveDate;
use uuid::Uuid;

struct SeedRow {
    id: u128,
    surname: &'static str,
    email: &'static str,
    has_newsletter: bool,
    born: (i32, u32, u32),
    gender: Gender,
    marital_status: MaritalStatus,
    postal_code: &'static str,
    city: &'static str,
}

const SEED_ROWS: [SeedRow; 7] = [
    SeedRow {
        id: 0x00,
        surname: "Admin",
        email: "admin@acme.com",
        has_newsletter: true,
        born: (2022, 1, 31),
        gender: Gender::Female,
        marital_status: MaritalStatus::Married,
        postal_code: "00000",
        city: "Aachen",
    },
    SeedRow {
        id: 0x01,
        surname: "Alpha",
        email: "alpha@acme.de",
        has_newsletter: false,
        born: (2022, 1, 1),
        gender: Gender::Male,
        marital_status: MaritalStatus::Single,
        postal_code: "11111",
        city: "Augsburg",
    },
    SeedRow {
        id: 0x02,
        surname: "Alpha",
        email: "alpha@acme.edu",
        has_newsletter: false,
        born: (2022, 1, 2),
        gender: Gender::Female,
        marital_status: MaritalStatus::Divorced,
        postal_code: "22222",
        city: "Aalen",
    },
    SeedRow {
        id: 0x30,
        surname: "Alpha",
        email: "alpha@acme.ch",
        has_newsletter: false,
        born: (2022, 1, 3),
        gender: Gender::Male,
        marital_status: MaritalStatus::Widowed,
        postal_code: "33333",
        city: "Ahlen",
    },
    SeedRow {
        id: 0x40,
        surname: "Delta",
        email: "delta@acme.uk",
        has_newsletter: false,
        born: (2022, 1, 4),
        gender: Gender::Female,
        marital_status: MaritalStatus::Married,
        postal_code: "44444",
        city: "Dortmund",
    },
    SeedRow {
        id: 0x50,
        surname: "Epsilon",
        email: "epsilon@acme.jp",
        has_newsletter: true,
        born: (2022, 1, 5),
        gender: Gender::Male,
        marital_status: MaritalStatus::Single,
        postal_code: "55555",
        city: "Essen",
    },
    SeedRow {
        id: 0x60,
        surname: "Phi",
        email: "phi@acme.cn",
        has_newsletter: false,
        born: (2022, 1, 6),
        gender: Gender::Diverse,
        marital_status: MaritalStatus::Single,
        postal_code: "66666",
        city: "Freiburg",
    },
];

/// Returns the demo employees with their fixed identifiers.
pub fn demo_employees() -> Vec<Employee> {
    SEED_ROWS
        .iter()
        .map(|row| {
            let (year, month, day) = row.born;
            Employee {
                birth_date: NaiveDate::from_ymd_opt(year, month, day),
                gender: Some(row.gender),
                marital_status: Some(row.marital_status),
                address: Some(Address::new(row.postal_code, row.city)),
                ..Employee::with_id(Uuid::from_u128(row.id), row.surname, row.email)
                    .subscribed(row.has_newsletter)
            }
        })
        .collect()
}
