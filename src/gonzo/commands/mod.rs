//! # Command Layer
//!
//! The business logic of gonzo, one submodule per verb. Commands operate on a
//! [`NoteStore`](crate::store::NoteStore) and return a structured
//! [`CmdResult`]; they never print, prompt, or exit.
//!
//! Anything interactive (reading stdin, running the editor) happens before or
//! around a command and is passed in as plain values or a closure, so every
//! command can be tested against `InMemoryStore`.
//!
//! - [`create`]: save a new note under a fresh identity
//! - [`read`]: load the selected notes with their content
//! - [`edit`]: rewrite an existing note in place
//! - [`list`]: the selected identities only
//! - [`delete`]: batch removal with partial-failure semantics

use crate::error::GonzoError;
use crate::model::{Note, NoteId};

pub mod create;
pub mod delete;
pub mod edit;
pub mod list;
pub mod read;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Notes written or removed
    pub affected_ids: Vec<NoteId>,
    /// Identities to show, in display order
    pub listed_ids: Vec<NoteId>,
    /// Notes to show with their content, in display order
    pub notes: Vec<Note>,
    pub messages: Vec<CmdMessage>,
    /// Set when a batch ran to completion but some items failed.
    /// Holds the last failure.
    pub failure: Option<GonzoError>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_ids(mut self, ids: Vec<NoteId>) -> Self {
        self.listed_ids = ids;
        self
    }

    pub fn with_notes(mut self, notes: Vec<Note>) -> Self {
        self.notes = notes;
        self
    }

    /// Turns a recorded batch failure into an `Err`, after the caller has
    /// had a chance to show the messages.
    pub fn into_result(mut self) -> crate::error::Result<Self> {
        match self.failure.take() {
            Some(err) => Err(err),
            None => Ok(self),
        }
    }
}
