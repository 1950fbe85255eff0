use crate::commands::CmdResult;
use crate::error::Result;
use crate::listing::{list_all, Selection};
use crate::model::Note;
use crate::store::NoteStore;

/// Loads every selected note. Any unreadable note aborts the read.
pub fn run<S: NoteStore>(store: &S, selection: &Selection) -> Result<CmdResult> {
    let ids = selection.apply(list_all(store)?);
    let notes = ids
        .into_iter()
        .map(|id| {
            let content = store.load(&id)?;
            Ok(Note::new(id, content))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CmdResult::default().with_notes(notes))
}
