use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

/// Something that can be edited: it provides a path before the editor
/// starts and takes it back afterwards.
pub trait EditableFile {
    /// Prepares the file and returns the path to hand to the editor.
    fn setup(&self) -> io::Result<PathBuf>;

    /// Releases the path returned by [`EditableFile::setup`].
    ///
    /// Cleanup is best effort. Failures are not reported to the caller of
    /// the edit session.
    fn cleanup(&self, path: &Path);
}

/// An existing file chosen by the caller. It is removed after editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedPath(pub PathBuf);

impl FixedPath {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }
}

impl EditableFile for FixedPath {
    fn setup(&self) -> io::Result<PathBuf> {
        Ok(self.0.clone())
    }

    fn cleanup(&self, path: &Path) {
        remove_quietly(path);
    }
}

/// A fresh temporary file holding some initial content.
///
/// The file name follows `pattern`: the last `*` is replaced by random
/// characters, or they are appended when the pattern has no `*`.
#[derive(Debug, Clone, Default)]
pub struct TempFile {
    /// Directory for the file. The system temp directory when `None`.
    pub dir: Option<PathBuf>,
    pub pattern: String,
    pub content: Vec<u8>,
}

impl TempFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = Some(dir.into());
        self
    }

    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    pub fn content(mut self, content: impl Into<Vec<u8>>) -> Self {
        self.content = content.into();
        self
    }

    fn affixes(&self) -> (&str, &str) {
        match self.pattern.rfind('*') {
            Some(star) => (&self.pattern[..star], &self.pattern[star + 1..]),
            None => (&self.pattern, ""),
        }
    }
}

impl EditableFile for TempFile {
    fn setup(&self) -> io::Result<PathBuf> {
        let dir = self.dir.clone().unwrap_or_else(env::temp_dir);
        let (prefix, suffix) = self.affixes();

        // Until `keep` succeeds, dropping the handle deletes the file, so a
        // failed write leaves nothing behind.
        let mut file = tempfile::Builder::new()
            .prefix(prefix)
            .suffix(suffix)
            .tempfile_in(&dir)?;
        file.write_all(&self.content)?;
        file.flush()?;

        let (_, path) = file.keep()?;
        debug!(path = %path.display(), "created temp file");
        Ok(path)
    }

    fn cleanup(&self, path: &Path) {
        remove_quietly(path);
    }
}

fn remove_quietly(path: &Path) {
    match fs::remove_file(path) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "file already removed");
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "failed to remove edited file");
        }
    }
}
