use super::addressing::{id_to_path, path_to_id};
use super::NoteStore;
use crate::error::{GonzoError, Result};
use crate::model::NoteId;
use log::debug;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;
use walkdir::WalkDir;

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            debug!("creating storage root {}", self.root.display());
            fs::create_dir_all(&self.root).map_err(GonzoError::Io)?;
        }
        Ok(())
    }

    fn not_found_as(id: &NoteId, err: std::io::Error) -> GonzoError {
        if err.kind() == ErrorKind::NotFound {
            GonzoError::NoteNotFound(id.clone())
        } else {
            GonzoError::Io(err)
        }
    }
}

impl NoteStore for FileStore {
    fn save(&mut self, id: &NoteId, content: &str) -> Result<()> {
        self.ensure_dir()?;
        let target = id_to_path(&self.root, id);

        // Atomic write: readers see the old note or the new one, never half of it
        let tmp = self.root.join(format!(".note-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp, content).map_err(GonzoError::Io)?;
        if let Err(e) = fs::rename(&tmp, &target) {
            let _ = fs::remove_file(&tmp);
            return Err(GonzoError::Io(e));
        }
        debug!("wrote {} ({} bytes)", target.display(), content.len());
        Ok(())
    }

    fn load(&self, id: &NoteId) -> Result<String> {
        let path = id_to_path(&self.root, id);
        let bytes = fs::read(&path).map_err(|e| Self::not_found_as(id, e))?;
        // Notes written by other tools need not be UTF-8
        Ok(String::from_utf8(bytes)
            .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned()))
    }

    fn remove(&mut self, id: &NoteId) -> Result<()> {
        let path = id_to_path(&self.root, id);
        fs::remove_file(&path).map_err(|e| Self::not_found_as(id, e))?;
        debug!("removed {}", path.display());
        Ok(())
    }

    fn list_ids(&self) -> Result<Vec<NoteId>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut ids = Vec::new();
        for entry in WalkDir::new(&self.root) {
            let entry = entry?;
            if entry.file_type().is_dir() {
                continue;
            }
            if let Some(id) = path_to_id(entry.path()) {
                ids.push(id);
            }
        }
        ids.sort();
        debug!("found {} notes under {}", ids.len(), self.root.display());
        Ok(ids)
    }

    fn note_path(&self, id: &NoteId) -> PathBuf {
        id_to_path(&self.root, id)
    }
}
