//! Employee records.
//!
//! A closed tagged variant over seven role kinds replaces the open
//! inheritance hierarchy such a domain is usually modeled with: no new
//! roles appear at runtime and each kind's attribute set is fixed, so
//! [`Role`] carries qualification and technology inline and salary
//! dispatch is a single `match` in the policy module.
//!
//! [`Employee`] is immutable after construction. Its salary is computed
//! once from [`crate::policy`] and exposed read-only.

mod record;
mod types;

pub use record::Employee;
pub use types::{
    BackendTechnology, EmployeeId, FrontendTechnology, QualificationLevel, Role,
};
