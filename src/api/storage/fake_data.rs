//! Fake roles and employees seeded into empty repositories at startup.

use uuid::{Uuid, uuid};

use crate::models::{Employee, Role};

const ADMIN_ROLE_ID: Uuid = uuid!("53729686-a368-4eeb-8bfa-cc69b6050d02");
const PARTNER_MANAGER_ROLE_ID: Uuid = uuid!("b0ae7aac-5493-45cd-ad16-87426a5e7665");

pub fn roles() -> Vec<Role> {
    vec![
        Role {
            id: ADMIN_ROLE_ID,
            name: "Admin".to_string(),
            description: "Administrator".to_string(),
        },
        Role {
            id: PARTNER_MANAGER_ROLE_ID,
            name: "PartnerManager".to_string(),
            description: "Partner manager".to_string(),
        },
    ]
}

pub fn employees() -> Vec<Employee> {
    let roles = roles();
    let role = |id: Uuid| roles.iter().filter(|r| r.id == id).cloned().collect::<Vec<_>>();

    vec![
        Employee {
            id: uuid!("451533d5-d8d5-4a11-9c7b-eb9f14e1a32f"),
            first_name: "Ivan".to_string(),
            last_name: "Sergeev".to_string(),
            email: "owner@somemail.ru".to_string(),
            roles: role(ADMIN_ROLE_ID),
            applied_promocodes_count: 5,
        },
        Employee {
            id: uuid!("f766e2bf-340a-46ea-bff3-f1700b435895"),
            first_name: "Petr".to_string(),
            last_name: "Andreev".to_string(),
            email: "andreev@somemail.ru".to_string(),
            roles: role(PARTNER_MANAGER_ROLE_ID),
            applied_promocodes_count: 10,
        },
    ]
}
