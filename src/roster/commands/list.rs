use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::RecordStore;

pub fn run(store: &RecordStore) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed(store.records().to_vec()))
}
