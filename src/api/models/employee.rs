use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::Role;
use crate::storage::Entity;

/// Employee of the promo code factory.
///
/// This is the stored shape. List and detail endpoints project it onto
/// [`EmployeeShortResponse`](super::EmployeeShortResponse) and
/// [`EmployeeResponse`](super::EmployeeResponse); the update endpoint returns it as is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub roles: Vec<Role>,
    /// Maintained by promo code issuing, never written by the employee endpoints
    #[serde(default)]
    pub applied_promocodes_count: i32,
}

impl Employee {
    /// Create an employee with a freshly generated id and no roles.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            roles: Vec::new(),
            applied_promocodes_count: 0,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Entity for Employee {
    const KIND: &'static str = "employee";

    fn id(&self) -> Uuid {
        self.id
    }
}
