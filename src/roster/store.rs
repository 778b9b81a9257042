//! The in-memory record store.
//!
//! `RecordStore` owns an ordered collection of [`Employee`] records.
//! Insertion order is preserved, names are unique (case-sensitive), and
//! the uniqueness invariant is enforced here at insertion time. Every
//! operation is a linear scan; record counts are expected to stay small.

use crate::error::{Result, RosterError};
use crate::model::Employee;

#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<Employee>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record at the end, rejecting a name that is already
    /// present. Field-range validation is the caller's responsibility;
    /// only the name-uniqueness invariant is checked here.
    pub fn add(&mut self, employee: Employee) -> Result<()> {
        if self.find(&employee.name).is_some() {
            return Err(RosterError::DuplicateName(employee.name));
        }
        self.records.push(employee);
        Ok(())
    }

    /// Removes and returns the first record (in insertion order) whose
    /// name matches exactly.
    pub fn remove(&mut self, name: &str) -> Result<Employee> {
        match self.records.iter().position(|e| e.name == name) {
            Some(pos) => Ok(self.records.remove(pos)),
            None => Err(RosterError::NotFound(name.to_string())),
        }
    }

    /// The first record (in insertion order) whose name matches exactly.
    pub fn find(&self, name: &str) -> Option<&Employee> {
        self.records.iter().find(|e| e.name == name)
    }

    /// All records, in insertion order.
    pub fn records(&self) -> &[Employee] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
