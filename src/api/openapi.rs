//! OpenAPI specification definition.
//!
//! Aggregates all route handlers and schemas for OpenAPI documentation generation.

use utoipa::{Modify, OpenApi};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Employees
        crate::routes::employees::get_employees,
        crate::routes::employees::get_employee_by_id,
        crate::routes::employees::create_employee,
        crate::routes::employees::delete_employee,
        crate::routes::employees::update_employee,
        // Roles
        crate::routes::roles::get_roles,
        // Health
        crate::routes::health::health_check,
        // OpenAPI
        crate::routes::openapi::serve_openapi_json,
    ),
    components(schemas(
        crate::models::Employee,
        crate::models::Role,
        crate::models::EmployeeShortResponse,
        crate::models::EmployeeResponse,
        crate::models::RoleItemResponse,
        crate::models::RoleResponse,
        crate::models::EmployeeModel,
        crate::models::RoleItemModel,
    )),
    modifiers(&VersionAddon),
    tags(
        (name = "Employees", description = "Employee CRUD operations"),
        (name = "Roles", description = "Role listing"),
        (name = "Health", description = "Liveness probe"),
        (name = "OpenAPI", description = "OpenAPI specification"),
    ),
    info(
        title = "PromoCode Factory API",
        description = "REST API for employee administration of the promo code factory",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "http://localhost:8081/api/v1", description = "Local development server")
    )
)]
pub struct ApiDoc;

struct VersionAddon;

impl Modify for VersionAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        // Update version to match Cargo.toml version
        openapi.info.version = env!("CARGO_PKG_VERSION").to_string();
    }
}
