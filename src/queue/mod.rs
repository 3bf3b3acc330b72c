//! Salary-keyed priority queue.
//!
//! [`SalaryQueue`] maintains employee records as an array-backed binary
//! max-heap ordered by computed salary, with two auxiliary behaviors on
//! top of the classic heap operations:
//!
//! - **Duplicate-id rejection**: `insert` scans current members and
//!   refuses a record whose id is already present.
//! - **Removal by id**: `remove` drops an arbitrary member and rebuilds
//!   the heap from the remaining elements.
//!
//! All operations are synchronous and non-reentrant; a failing operation
//! returns its error before mutating anything.

mod heap;

pub use heap::SalaryQueue;
