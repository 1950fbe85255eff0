//! # Listing & Filtering
//!
//! Pure transforms over an ordered sequence of [`NoteId`]s. The sequence
//! always starts from [`list_all`], ascending; everything else reorders or
//! trims it. Because ids sort chronologically as plain strings, "before"
//! and "after" an anchor are simple string comparisons.
//!
//! The steps compose in a fixed order (see [`Selection::apply`]):
//!
//! 1. [`reverse`] the whole sequence, if asked
//! 2. [`filter_from`] an anchor, on the side the direction implies
//! 3. [`window`] with head first, then tail on what head left

use crate::error::Result;
use crate::model::NoteId;
use crate::store::NoteStore;

/// Every note id in the store, oldest first.
pub fn list_all<S: NoteStore>(store: &S) -> Result<Vec<NoteId>> {
    let mut ids = store.list_ids()?;
    ids.sort();
    Ok(ids)
}

/// Most recent first.
pub fn reverse(mut ids: Vec<NoteId>) -> Vec<NoteId> {
    ids.reverse();
    ids
}

/// Keeps ids on the "from here onward" side of `anchor`.
///
/// Forward keeps `id >= anchor`, reverse keeps `id <= anchor`. The anchor
/// does not have to be an existing id: any prefix such as `2024-03` works.
pub fn filter_from(ids: Vec<NoteId>, anchor: Option<&str>, reverse: bool) -> Vec<NoteId> {
    let Some(anchor) = anchor else {
        return ids;
    };
    ids.into_iter()
        .filter(|id| {
            if reverse {
                id.as_str() <= anchor
            } else {
                id.as_str() >= anchor
            }
        })
        .collect()
}

/// Head, then tail of the result. Both counts are clamped to the length.
pub fn window(mut ids: Vec<NoteId>, head: Option<usize>, tail: Option<usize>) -> Vec<NoteId> {
    if let Some(head) = head {
        ids.truncate(head.min(ids.len()));
    }
    if let Some(tail) = tail {
        let tail = tail.min(ids.len());
        ids.drain(..ids.len() - tail);
    }
    ids
}

/// How `read` and `list` narrow the full listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub reverse: bool,
    pub from: Option<String>,
    pub head: Option<usize>,
    pub tail: Option<usize>,
}

impl Selection {
    pub fn apply(&self, ids: Vec<NoteId>) -> Vec<NoteId> {
        let ids = if self.reverse { reverse(ids) } else { ids };
        let ids = filter_from(ids, self.from.as_deref(), self.reverse);
        window(ids, self.head, self.tail)
    }
}
