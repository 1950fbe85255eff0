//! Core data types: the note identity and the note record.
//!
//! A [`NoteId`] is the note's primary key *and* its file name stem. It is
//! rendered from the creation time with [`ID_FORMAT`], whose fields are all
//! zero-padded and fixed width, so comparing two ids as strings compares
//! them chronologically. The weekday suffix only ever follows the minute
//! field, it never takes part in an ordering decision between two different
//! minutes.

use crate::error::{GonzoError, Result};
use chrono::{DateTime, Local, TimeZone};
use std::fmt;
use std::str::FromStr;

/// chrono format for note identities, e.g. `2006-01-02_15:04_Monday`.
pub const ID_FORMAT: &str = "%Y-%m-%d_%H:%M_%A";

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NoteId(String);

impl NoteId {
    /// Wraps any string as an identity. No validation beyond what the caller did.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn from_timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> Self
    where
        Tz::Offset: fmt::Display,
    {
        Self(at.format(ID_FORMAT).to_string())
    }

    /// Identity for a note created right now, in local time.
    pub fn now() -> Self {
        Self::from_timestamp(&Local::now())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NoteId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for NoteId {
    type Err = GonzoError;

    /// Accepts any non-empty string verbatim; whitespace is part of the id.
    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(GonzoError::InvalidId(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub id: NoteId,
    pub content: String,
}

impl Note {
    pub fn new(id: NoteId, content: String) -> Self {
        Self { id, content }
    }
}
