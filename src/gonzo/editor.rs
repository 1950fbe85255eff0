use crate::error::{GonzoError, Result};
use crate::store::addressing::NOTE_EXT;
use log::{debug, warn};
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::Command;

/// An editor invocation such as `vi` or `code --wait`.
///
/// The configured string is split on whitespace; the file to edit is
/// appended as the last argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorCommand {
    program: String,
    args: Vec<String>,
}

impl EditorCommand {
    pub fn parse(command: &str) -> Result<Self> {
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts
            .next()
            .ok_or_else(|| GonzoError::Process("no editor configured".to_string()))?;
        Ok(Self {
            program,
            args: parts.collect(),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Opens `path` and blocks until the editor exits.
    pub fn open(&self, path: &Path) -> Result<()> {
        debug!("launching editor {} {:?} {}", self.program, self.args, path.display());
        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .status()
            .map_err(|e| {
                GonzoError::Process(format!("Failed to launch editor '{}': {}", self.program, e))
            })?;

        if !status.success() {
            return Err(GonzoError::Process(format!(
                "Editor '{}' exited with {}",
                self.program, status
            )));
        }
        Ok(())
    }
}

/// Round-trips `initial` through the editor and returns what the user saved.
///
/// The scratch file is deleted when this returns, on success or failure.
pub fn edit_content(initial: &str, editor: &EditorCommand) -> Result<String> {
    let mut scratch = tempfile::Builder::new()
        .prefix("gonzo")
        .suffix(NOTE_EXT)
        .tempfile()
        .map_err(GonzoError::Io)?;
    scratch
        .write_all(initial.as_bytes())
        .and_then(|_| scratch.flush())
        .map_err(GonzoError::Io)?;

    editor.open(scratch.path())?;

    let edited = fs::read_to_string(scratch.path()).map_err(GonzoError::Io)?;
    if let Err(e) = scratch.close() {
        warn!("could not remove scratch file: {}", e);
    }
    Ok(edited)
}
