use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RosterError};
use crate::model::Employee;
use crate::store::RecordStore;

pub fn run(store: &mut RecordStore, employee: Employee) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match store.add(employee.clone()) {
        Ok(()) => {
            result.add_message(CmdMessage::success(format!(
                "Employee '{}' added.",
                employee.name
            )));
            result.affected.push(employee);
        }
        Err(RosterError::DuplicateName(_)) => {
            result.add_message(CmdMessage::error(
                "Employee with the same name already exists. Cannot add duplicate employee.",
            ));
        }
        Err(e) => return Err(e),
    }
    Ok(result)
}
