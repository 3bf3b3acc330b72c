//! Salary policy.
//!
//! Pure, stateless computation mapping (role, qualification, experience,
//! technology) to a monthly salary. Consumed exactly once, at `Employee`
//! construction; nothing here holds state or performs I/O.
//!
//! The policy is fixed: base rates, qualification multipliers, and
//! technology bonuses are compile-time constants, not configuration.

mod formulas;

pub use formulas::{experience_bonus, qualification_multiplier, salary_for};
