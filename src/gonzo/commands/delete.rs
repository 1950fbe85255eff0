use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NoteId;
use crate::store::NoteStore;
use log::debug;

/// Removes every requested note.
///
/// A failure does not stop the batch: each id is parsed and attempted on its
/// own, each outcome gets a message, and the last error is kept in
/// [`CmdResult::failure`].
pub fn run<S: NoteStore, I: AsRef<str>>(store: &mut S, ids: &[I]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for raw in ids {
        let outcome = raw
            .as_ref()
            .parse::<NoteId>()
            .and_then(|id| store.remove(&id).map(|()| id));
        match outcome {
            Ok(id) => {
                result.add_message(CmdMessage::success(format!("Note deleted: {}", id)));
                result.affected_ids.push(id);
            }
            Err(e) => {
                debug!("delete {:?} failed: {}", raw.as_ref(), e);
                result.add_message(CmdMessage::error(e.to_string()));
                result.failure = Some(e);
            }
        }
    }

    Ok(result)
}
