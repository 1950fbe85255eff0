//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for UI
//! clients. It parses user-supplied identities, stamps new notes with the
//! current time, and dispatches; the logic itself lives in `commands/*.rs`.
//!
//! `GonzoApi<S: NoteStore>` is generic over storage:
//! - Production: `GonzoApi<FileStore>`
//! - Testing: `GonzoApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::listing::Selection;
use crate::model::NoteId;
use crate::store::NoteStore;

pub struct GonzoApi<S: NoteStore> {
    store: S,
}

impl<S: NoteStore> GonzoApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Saves `content` as a new note stamped with the current local time.
    pub fn create_note(&mut self, content: String) -> Result<commands::CmdResult> {
        self.create_note_at(NoteId::now(), content)
    }

    pub fn create_note_at(&mut self, id: NoteId, content: String) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, id, content)
    }

    pub fn delete_notes<I: AsRef<str>>(&mut self, ids: &[I]) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, ids)
    }

    pub fn read_notes(&self, selection: &Selection) -> Result<commands::CmdResult> {
        commands::read::run(&self.store, selection)
    }

    pub fn list_notes(&self, selection: &Selection) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, selection)
    }

    pub fn edit_note<F>(&mut self, id: Option<&str>, edit: F) -> Result<commands::CmdResult>
    where
        F: FnOnce(&str) -> Result<String>,
    {
        let id = id.map(str::parse::<NoteId>).transpose()?;
        commands::edit::run(&mut self.store, id, edit)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
