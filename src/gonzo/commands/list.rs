use crate::commands::CmdResult;
use crate::error::Result;
use crate::listing::{list_all, Selection};
use crate::store::NoteStore;

pub fn run<S: NoteStore>(store: &S, selection: &Selection) -> Result<CmdResult> {
    let ids = selection.apply(list_all(store)?);
    Ok(CmdResult::default().with_listed_ids(ids))
}
