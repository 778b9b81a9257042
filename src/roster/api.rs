//! # API Facade
//!
//! The single entry point for all roster operations, regardless of the UI
//! in front of it. The facade dispatches to the command layer and returns
//! structured `Result<CmdResult>` values; it contains no business logic
//! and performs no I/O.

use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::model::Employee;
use crate::store::RecordStore;

/// Owns the record store for the lifetime of a run.
#[derive(Debug, Default)]
pub struct RosterApi {
    store: RecordStore,
}

impl RosterApi {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }

    pub fn add_employee(&mut self, employee: Employee) -> Result<CmdResult> {
        commands::add::run(&mut self.store, employee)
    }

    pub fn delete_employee(&mut self, name: &str) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, name)
    }

    pub fn search_employee(&self, name: &str) -> Result<CmdResult> {
        commands::search::run(&self.store, name)
    }

    pub fn list_employees(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }
}
