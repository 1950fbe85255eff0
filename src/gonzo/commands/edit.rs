use crate::commands::{CmdMessage, CmdResult};
use crate::error::{GonzoError, Result};
use crate::listing::list_all;
use crate::model::NoteId;
use crate::store::NoteStore;

/// Rewrites a note through `edit`, which receives the current content and
/// returns the replacement. Without an id the most recent note is edited.
///
/// Unchanged content is not written back. Emptying a note is refused; use
/// delete for that.
pub fn run<S, F>(store: &mut S, id: Option<NoteId>, edit: F) -> Result<CmdResult>
where
    S: NoteStore,
    F: FnOnce(&str) -> Result<String>,
{
    let id = match id {
        Some(id) => id,
        None => list_all(store)?.pop().ok_or(GonzoError::NoNotes)?,
    };

    let current = store.load(&id)?;
    let replacement = edit(&current)?;

    let mut result = CmdResult::default();
    if replacement == current {
        result.add_message(CmdMessage::info(format!("No changes to {}", id)));
        return Ok(result);
    }
    if replacement.trim().is_empty() {
        return Err(GonzoError::EmptyNote);
    }

    let path = store.note_path(&id);
    result.add_message(CmdMessage::info(format!("saving to {}", path.display())));
    store.save(&id, &replacement)?;

    result.affected_ids.push(id);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn replaces_content() {
        let mut store = StoreFixture::new().with_note("a", "old").store;
        let result = run(&mut store, Some(NoteId::new("a")), |cur| {
            Ok(format!("{} and new", cur))
        })
        .unwrap();

        assert_eq!(result.affected_ids, vec![NoteId::new("a")]);
        assert_eq!(store.load(&NoteId::new("a")).unwrap(), "old and new");
    }

    #[test]
    fn defaults_to_latest_note() {
        let mut store = StoreFixture::new()
            .with_note("2024-01-01_08:00_Monday", "older")
            .with_note("2024-02-01_08:00_Thursday", "newer")
            .store;
        let mut seen = String::new();
        run(&mut store, None, |cur| {
            seen = cur.to_string();
            Ok("edited".into())
        })
        .unwrap();

        assert_eq!(seen, "newer");
        assert_eq!(
            store.load(&NoteId::new("2024-02-01_08:00_Thursday")).unwrap(),
            "edited"
        );
    }

    #[test]
    fn unknown_id_is_not_found_and_editor_is_not_run() {
        let mut store = StoreFixture::new().with_note("a", "x").store;
        let err = run(&mut store, Some(NoteId::new("nope")), |_| {
            panic!("editor must not run")
        })
        .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn empty_store_without_id() {
        let mut store = StoreFixture::new().store;
        let err = run(&mut store, None, |c| Ok(c.to_string())).unwrap_err();
        assert!(matches!(err, GonzoError::NoNotes));
    }

    #[test]
    fn unchanged_content_is_not_saved() {
        let mut store = StoreFixture::new().with_note("a", "same").store;
        let result = run(&mut store, Some(NoteId::new("a")), |c| Ok(c.to_string())).unwrap();
        assert!(result.affected_ids.is_empty());
    }

    #[test]
    fn emptied_note_is_refused() {
        let mut store = StoreFixture::new().with_note("a", "keep me").store;
        let err = run(&mut store, Some(NoteId::new("a")), |_| Ok("\n".into())).unwrap_err();
        assert!(matches!(err, GonzoError::EmptyNote));
        assert_eq!(store.load(&NoteId::new("a")).unwrap(), "keep me");
    }

    #[test]
    fn editor_failure_propagates() {
        let mut store = StoreFixture::new().with_note("a", "x").store;
        let err = run(&mut store, Some(NoteId::new("a")), |_| {
            Err(GonzoError::Process("editor crashed".into()))
        })
        .unwrap_err();
        assert!(matches!(err, GonzoError::Process(_)));
    }
}
