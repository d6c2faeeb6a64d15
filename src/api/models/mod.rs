// Models module - contains the Employee and Role entities and their wire shapes

pub mod employee;
pub mod employee_model;
pub mod role;

pub use employee::Employee;
pub use employee_model::{
    EmployeeModel, EmployeeResponse, EmployeeShortResponse, RoleItemModel, RoleItemResponse,
    RoleResponse,
};
pub use role::Role;
