//! In-memory employee roster ranked by salary.
//!
//! Three components, leaves first:
//!
//! - [`policy`]: pure salary formulas: per-role base rates scaled by
//!   qualification multipliers, experience bonus, and technology bonuses.
//! - [`employee`]: a closed tagged variant over seven role kinds and the
//!   validated [`Employee`] record, whose salary is computed once at
//!   construction.
//! - [`queue`]: [`SalaryQueue`], an array-backed binary max-heap keyed on
//!   salary, with duplicate-id rejection and removal by id.
//!
//! Everything is single-threaded and synchronous. The library emits
//! `tracing` debug events at queue mutation points but installs no
//! subscriber.
//!
//! # Example
//!
//! ```
//! use roster_rank::{Employee, Role, SalaryQueue};
//!
//! let mut queue = SalaryQueue::new();
//! queue.insert(Employee::new("John Smith", 1001, Role::ChiefInfoOfficer, 60)?)?;
//! queue.insert(Employee::new("Jane Doe", 1002, Role::ProjectManager, 48)?)?;
//!
//! // 22500.00 beats 14000.00
//! assert_eq!(queue.peek().map(|e| e.id()), Some(1001));
//!
//! let top = queue.extract_max().unwrap();
//! assert!((top.salary() - 22_500.0).abs() < 1e-6);
//! assert_eq!(queue.len(), 1);
//! # Ok::<(), roster_rank::RosterError>(())
//! ```

pub mod employee;
pub mod error;
pub mod policy;
pub mod queue;

pub use employee::{
    BackendTechnology, Employee, EmployeeId, FrontendTechnology, QualificationLevel, Role,
};
pub use error::{Result, RosterError};
pub use queue::SalaryQueue;
