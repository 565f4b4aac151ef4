//! Backing-store adapters that supply a collection's records.

use crate::{Note, Record, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Supplies the full record set a collection is built on or reloaded from.
pub trait RecordSource<R: Record> {
    /// Loads every record.
    ///
    /// # Errors
    ///
    /// Implementation-specific; see the concrete source.
    fn load(&self) -> Result<Vec<R>>;
}

/// Reads notes from a JSON file holding an array of note objects.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource<Note> for JsonFileSource {
    /// # Errors
    ///
    /// Returns [`crate::NotedeckError::Io`] if the file cannot be read, or
    /// [`crate::NotedeckError::Json`] if it is not an array of notes.
    fn load(&self) -> Result<Vec<Note>> {
        let json = fs::read_to_string(&self.path)?;
        let notes: Vec<Note> = serde_json::from_str(&json)?;
        log::debug!("loaded {} notes from {}", notes.len(), self.path.display());
        Ok(notes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NotedeckError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_notes_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id":"1","title":"Shopping List","taskAll":3,"taskCompleted":1}},
                {{"id":"2","title":"Trip Plan","trash":1}}]"#
        )
        .unwrap();

        let notes = JsonFileSource::new(file.path()).load().unwrap();
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].title, "Shopping List");
        assert_eq!(notes[1].trash, 1);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonFileSource::new(dir.path().join("absent.json"));
        assert!(matches!(source.load(), Err(NotedeckError::Io(_))));
    }

    #[test]
    fn test_corrupt_file_is_json_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();
        let source = JsonFileSource::new(file.path());
        assert!(matches!(source.load(), Err(NotedeckError::Json(_))));
    }
}
