//! Where the text of a new note comes from.
//!
//! Priority:
//!
//! 1. A lone `-` as the text: read standard input (the editor flag is ignored)
//! 2. `--editor`: open the editor, pre-filled with any text given
//! 3. Otherwise the words given on the command line, joined by spaces

use crate::editor::{edit_content, EditorCommand};
use crate::error::{GonzoError, Result};
use std::io::Read;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteSource {
    Inline(String),
    Stdin,
    Editor { initial: String },
}

impl NoteSource {
    pub fn from_args<S: AsRef<str>>(words: &[S], use_editor: bool) -> Self {
        let text = words
            .iter()
            .map(|w| w.as_ref())
            .collect::<Vec<_>>()
            .join(" ");

        if text == "-" {
            NoteSource::Stdin
        } else if use_editor {
            NoteSource::Editor { initial: text }
        } else {
            NoteSource::Inline(text)
        }
    }

    /// Produces the raw note text. `stdin` is only touched for [`NoteSource::Stdin`].
    pub fn resolve<R: Read>(self, mut stdin: R, editor: &EditorCommand) -> Result<String> {
        match self {
            NoteSource::Inline(text) => Ok(text),
            NoteSource::Stdin => {
                let mut buf = String::new();
                stdin.read_to_string(&mut buf).map_err(GonzoError::Io)?;
                Ok(buf)
            }
            NoteSource::Editor { initial } => edit_content(&initial, editor),
        }
    }
}
