use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RosterError};
use crate::store::RecordStore;

pub fn run(store: &mut RecordStore, name: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match store.remove(name) {
        Ok(employee) => {
            result.add_message(CmdMessage::success(format!(
                "Employee '{}' deleted successfully.",
                name
            )));
            result.affected.push(employee);
        }
        Err(RosterError::NotFound(_)) => {
            result.add_message(CmdMessage::error(format!(
                "Employee '{}' not found. Deletion failed.",
                name
            )));
        }
        Err(e) => return Err(e),
    }
    Ok(result)
}
