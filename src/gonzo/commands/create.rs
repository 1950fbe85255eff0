use crate::commands::{CmdMessage, CmdResult};
use crate::error::{GonzoError, Result};
use crate::model::NoteId;
use crate::store::NoteStore;

pub fn run<S: NoteStore>(store: &mut S, id: NoteId, content: String) -> Result<CmdResult> {
    if content.trim().is_empty() {
        return Err(GonzoError::EmptyNote);
    }

    let mut result = CmdResult::default();
    let path = store.note_path(&id);

    // Two notes in the same minute share an identity
    match store.load(&id) {
        Ok(_) => result.add_message(CmdMessage::warning(format!(
            "A note for {} already exists, overwriting it",
            id
        ))),
        Err(e) if e.is_not_found() => {}
        Err(e) => return Err(e),
    }

    result.add_message(CmdMessage::info(format!("saving to {}", path.display())));
    store.save(&id, &content)?;

    result.affected_ids.push(id);
    Ok(result)
}
