//! # Storage Layer
//!
//! The [`NoteStore`] trait is the seam between the command layer and the
//! filesystem. The directory is the database: there is no index file, every
//! listing is a fresh scan, and a note's identity *is* its file name.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage under `~/.gonzo`
//!   - One file per note: `<id>.gonzo.txt`
//!   - Atomic writes (tmp file + rename)
//!   - Recursive scan, anything without the note extension is ignored
//!
//! - [`memory::InMemoryStore`]: in-memory storage for testing
//!   - No persistence
//!   - Same not-found semantics as the file store
//!
//! ## Storage Format
//!
//! ```text
//! ~/.gonzo/
//! ├── 2024-03-05_08:15_Tuesday.gonzo.txt
//! ├── 2024-03-06_21:40_Wednesday.gonzo.txt
//! └── config.json            # optional, see config.rs
//! ```

use crate::error::Result;
use crate::model::NoteId;
use std::path::PathBuf;

pub mod addressing;
pub mod fs;
pub mod memory;

/// Abstract interface for note storage.
pub trait NoteStore {
    /// Write a note, creating or overwriting it.
    fn save(&mut self, id: &NoteId, content: &str) -> Result<()>;

    /// Read a note's full content.
    fn load(&self, id: &NoteId) -> Result<String>;

    /// Remove a note. Missing notes are `NoteNotFound`.
    fn remove(&mut self, id: &NoteId) -> Result<()>;

    /// All note ids, ascending.
    fn list_ids(&self) -> Result<Vec<NoteId>>;

    /// Where a note lives (or would live).
    fn note_path(&self, id: &NoteId) -> PathBuf;
}
