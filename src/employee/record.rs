//! Validated employee records.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, RosterError};
use crate::policy;

use super::types::{EmployeeId, Role};

/// A single employee with a salary fixed at construction time.
///
/// The salary is a pure function of the role, qualification, technology,
/// and experience. It is computed once in [`Employee::new`] and never
/// recomputed; the field is private so queue ordering cannot be broken by
/// external mutation while a record is queue-owned.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Employee {
    name: String,
    id: EmployeeId,
    role: Role,
    experience_months: u32,
    salary: f64,
}

impl Employee {
    /// Builds a record, validating the common fields and computing the
    /// salary from the policy tables.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` when the name is empty or the id is zero.
    /// Negative experience is unrepresentable: the month count is `u32`.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_rank::{Employee, Role};
    ///
    /// let cio = Employee::new("John Smith", 1001, Role::ChiefInfoOfficer, 60)?;
    /// assert!((cio.salary() - 22_500.0).abs() < 1e-6);
    /// # Ok::<(), roster_rank::RosterError>(())
    /// ```
    pub fn new(
        name: impl Into<String>,
        id: EmployeeId,
        role: Role,
        experience_months: u32,
    ) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(RosterError::InvalidArgument {
                reason: "employee name cannot be empty".into(),
            });
        }
        if id == 0 {
            return Err(RosterError::InvalidArgument {
                reason: "employee id must be positive".into(),
            });
        }
        let salary = policy::salary_for(&role, experience_months);
        Ok(Self {
            name,
            id,
            role,
            experience_months,
            salary,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> EmployeeId {
        self.id
    }

    pub fn role(&self) -> &Role {
        &self.role
    }

    pub fn experience_months(&self) -> u32 {
        self.experience_months
    }

    /// Monthly salary, computed at construction. Non-negative and finite.
    pub fn salary(&self) -> f64 {
        self.salary
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} ({}): {:.2}, {} months",
            self.id, self.name, self.role, self.salary, self.experience_months
        )
    }
}
