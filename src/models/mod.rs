//! Data models for employee role assignments.

pub mod employee_role;

pub use employee_role::{
    CreateEmployeeRole, EmployeeRole, PageMeta, RoleDraft, RolePage, UpdateEmployeeRole,
};
