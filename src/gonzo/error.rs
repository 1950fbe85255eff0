use crate::model::NoteId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GonzoError {
    #[error("Note not found: {0}")]
    NoteNotFound(NoteId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Process error: {0}")]
    Process(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Note is empty, nothing saved")]
    EmptyNote,

    #[error("No notes yet")]
    NoNotes,

    #[error("Invalid note id: {0:?}")]
    InvalidId(String),
}

impl GonzoError {
    /// True when the error means "this identity has no backing file".
    pub fn is_not_found(&self) -> bool {
        matches!(self, GonzoError::NoteNotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, GonzoError>;
