//! Identity <-> path mapping.
//!
//! A note lives at `<root>/<id>.gonzo.txt`. The extension doubles as the
//! marker that tells note files apart from anything else in the directory.
//! Ids are not escaped: a `/` in an id addresses a subdirectory.

use crate::model::NoteId;
use std::path::{Path, PathBuf};

pub const NOTE_EXT: &str = ".gonzo.txt";

pub fn note_filename(id: &NoteId) -> String {
    format!("{}{}", id, NOTE_EXT)
}

pub fn id_to_path(root: &Path, id: &NoteId) -> PathBuf {
    root.join(note_filename(id))
}

/// Returns `None` for anything that is not a note file.
pub fn path_to_id(path: &Path) -> Option<NoteId> {
    let name = path.file_name()?.to_str()?;
    let stem = name.strip_suffix(NOTE_EXT)?;
    if stem.is_empty() {
        return None;
    }
    Some(NoteId::new(stem))
}
