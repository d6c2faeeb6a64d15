//! Wire shapes of the employee and role endpoints.
//!
//! Responses are projections of the stored entities; `EmployeeModel` is the
//! payload accepted by create and update.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::{Employee, Role};

/// Employee as shown in lists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeShortResponse {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
}

impl From<&Employee> for EmployeeShortResponse {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id,
            email: employee.email.clone(),
            full_name: employee.full_name(),
        }
    }
}

/// Role as embedded in an employee's details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoleItemResponse {
    pub name: String,
    pub description: String,
}

impl From<&Role> for RoleItemResponse {
    fn from(role: &Role) -> Self {
        Self {
            name: role.name.clone(),
            description: role.description.clone(),
        }
    }
}

/// Employee details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    pub id: Uuid,
    pub email: String,
    pub roles: Vec<RoleItemResponse>,
    pub full_name: String,
    pub applied_promocodes_count: i32,
}

impl From<&Employee> for EmployeeResponse {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id,
            email: employee.email.clone(),
            roles: employee.roles.iter().map(RoleItemResponse::from).collect(),
            full_name: employee.full_name(),
            applied_promocodes_count: employee.applied_promocodes_count,
        }
    }
}

/// Role as listed by `GET /roles`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoleResponse {
    pub id: Uuid,
    pub name: String,
    pub description: String,
}

impl From<&Role> for RoleResponse {
    fn from(role: &Role) -> Self {
        Self {
            id: role.id,
            name: role.name.clone(),
            description: role.description.clone(),
        }
    }
}

/// Role as supplied in a create or update payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoleItemModel {
    #[serde(default, alias = "Id")]
    pub id: Option<Uuid>,
    #[serde(default, alias = "Name")]
    pub name: Option<String>,
    #[serde(default, alias = "Description")]
    pub description: Option<String>,
}

/// Create/update payload for an employee.
///
/// Every field may be missing or null. Missing text becomes an empty string
/// and missing roles become an empty list. Keys are camelCase; PascalCase
/// keys are accepted as well.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeModel {
    /// Ignored: ids are assigned by the server
    #[serde(default, alias = "Id")]
    pub id: Option<Uuid>,
    #[serde(default, alias = "FirstName")]
    pub first_name: Option<String>,
    #[serde(default, alias = "LastName")]
    pub last_name: Option<String>,
    #[serde(default, alias = "Email")]
    pub email: Option<String>,
    #[serde(default, alias = "Roles")]
    pub roles: Option<Vec<RoleItemModel>>,
}

impl EmployeeModel {
    /// Build a new employee under a fresh id.
    ///
    /// Roles are new records: any role id in the payload is discarded.
    pub fn into_new_employee(self) -> Employee {
        let roles = self
            .roles
            .unwrap_or_default()
            .into_iter()
            .map(|role| {
                Role::new(
                    role.name.unwrap_or_default(),
                    role.description.unwrap_or_default(),
                )
            })
            .collect();

        Employee {
            id: Uuid::new_v4(),
            first_name: self.first_name.unwrap_or_default(),
            last_name: self.last_name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            roles,
            applied_promocodes_count: 0,
        }
    }

    /// Overwrite the mutable fields of `employee`.
    ///
    /// The employee id and promo code counter are untouched. Role ids from the
    /// payload are kept; roles without one get a fresh id.
    pub fn apply_to(self, employee: &mut Employee) {
        employee.email = self.email.unwrap_or_default();
        employee.roles = self
            .roles
            .unwrap_or_default()
            .into_iter()
            .map(|role| Role {
                id: role.id.unwrap_or_else(Uuid::new_v4),
                name: role.name.unwrap_or_default(),
                description: role.description.unwrap_or_default(),
            })
            .collect();
        employee.last_name = self.last_name.unwrap_or_default();
        employee.first_name = self.first_name.unwrap_or_default();
    }
}
