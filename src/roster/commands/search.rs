use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::RecordStore;

pub fn run(store: &RecordStore, name: &str) -> Result<CmdResult> {
    match store.find(name) {
        Some(employee) => Ok(CmdResult::default().with_listed(vec![employee.clone()])),
        None => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::error(format!(
                "Employee '{}' not found.",
                name
            )));
            Ok(result)
        }
    }
}
