//! Array-backed binary max-heap keyed on salary.

use tracing::debug;

use crate::employee::{Employee, EmployeeId};
use crate::error::{Result, RosterError};

/// Priority queue of employees, highest salary first.
///
/// Backed by a `Vec<Employee>` in binary heap order. The queue owns every
/// record it holds; ownership transfers back to the caller only through
/// [`extract_max`](SalaryQueue::extract_max). Records removed by id are
/// dropped.
///
/// Salaries produced by the policy are finite and non-negative, so `f64`
/// ordering here is total. When two members have equal salaries their
/// relative order is unspecified and may change between operations; no
/// insertion-order stability is promised.
///
/// The type is deliberately not `Clone`: duplicating a roster wholesale
/// has no meaning in this domain. Callers needing shared access wrap the
/// queue in a lock, since every mutating operation is a multi-step,
/// non-atomic sequence.
#[derive(Debug, Default)]
pub struct SalaryQueue {
    heap: Vec<Employee>,
}

impl SalaryQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self { heap: Vec::new() }
    }

    /// Creates an empty queue with room for `capacity` members.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
        }
    }

    /// Number of employees currently held.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Inserts a record, rejecting duplicate ids.
    ///
    /// The duplicate scan is a linear pass over current members and runs
    /// before any mutation, so a rejected insert leaves the queue
    /// untouched. O(n) scan plus O(log n) sift-up.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` when a member already carries this id.
    pub fn insert(&mut self, employee: Employee) -> Result<()> {
        if self.position_of(employee.id()).is_some() {
            return Err(RosterError::InvalidArgument {
                reason: format!("employee with id {} already exists", employee.id()),
            });
        }
        debug!(id = employee.id(), salary = employee.salary(), "insert");
        self.heap.push(employee);
        self.sift_up(self.heap.len() - 1);
        Ok(())
    }

    /// Borrows the highest-paid member without removing it.
    ///
    /// Returns `None` on an empty queue. O(1).
    pub fn peek(&self) -> Option<&Employee> {
        self.heap.first()
    }

    /// Removes and returns the highest-paid member.
    ///
    /// Returns `None` on an empty queue. Swaps the root with the last
    /// element, shrinks, and sifts down; O(log n). Ownership of the
    /// returned record transfers to the caller.
    pub fn extract_max(&mut self) -> Option<Employee> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let max = self.heap.pop()?;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        debug!(id = max.id(), salary = max.salary(), "extract_max");
        Some(max)
    }

    /// Removes the member with the given id and drops the record.
    ///
    /// Locates the member by linear scan, then rebuilds the whole heap
    /// bottom-up. The full O(n) rebuild instead of a targeted sift is a
    /// deliberate simplicity tradeoff for a rare operation on a small
    /// roster; an id-to-position index would bring this to O(log n).
    ///
    /// # Errors
    ///
    /// `NotFound` when no member carries this id; the queue is unchanged.
    pub fn remove(&mut self, id: EmployeeId) -> Result<()> {
        let position = self
            .position_of(id)
            .ok_or(RosterError::NotFound { id })?;
        let removed = self.heap.swap_remove(position);
        debug!(id = removed.id(), salary = removed.salary(), "remove");
        self.rebuild();
        Ok(())
    }

    /// Cloned snapshot of the current members, highest salary first.
    ///
    /// Copies and sorts; internal heap array order is never exposed and
    /// the queue is not mutated. Members with equal salaries appear in
    /// unspecified relative order.
    pub fn ranked(&self) -> Vec<Employee> {
        let mut members = self.heap.clone();
        members.sort_by(|a, b| b.salary().total_cmp(&a.salary()));
        members
    }

    /// Iterates over current members in unspecified (heap-internal) order.
    pub fn iter(&self) -> impl Iterator<Item = &Employee> {
        self.heap.iter()
    }

    fn position_of(&self, id: EmployeeId) -> Option<usize> {
        self.heap.iter().position(|e| e.id() == id)
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.heap[index].salary() <= self.heap[parent].salary() {
                break;
            }
            self.heap.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut largest = index;
            if left < len && self.heap[left].salary() > self.heap[largest].salary() {
                largest = left;
            }
            if right < len && self.heap[right].salary() > self.heap[largest].salary() {
                largest = right;
            }
            if largest == index {
                break;
            }
            self.heap.swap(index, largest);
            index = largest;
        }
    }

    /// Floyd's bottom-up heap construction over the whole array.
    fn rebuild(&mut self) {
        for index in (0..self.heap.len() / 2).rev() {
            self.sift_down(index);
        }
    }
}

impl<'a> IntoIterator for &'a SalaryQueue {
    type Item = &'a Employee;
    type IntoIter = std::slice::Iter<'a, Employee>;

    fn into_iter(self) -> Self::IntoIter {
        self.heap.iter()
    }
}
