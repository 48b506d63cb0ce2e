use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::EditError;
use crate::file::EditableFile;
use crate::resolve::Editor;

const SHELL: &str = "/bin/sh";

/// Hands the path back to its file when the session ends, however it ends.
struct Checkout<'a, F: EditableFile + ?Sized> {
    file: &'a F,
    path: PathBuf,
}

impl<F: EditableFile + ?Sized> Drop for Checkout<'_, F> {
    fn drop(&mut self) {
        self.file.cleanup(&self.path);
    }
}

impl Editor {
    /// Runs the editor on `file`, waits for it to exit and returns the
    /// resulting file content.
    ///
    /// The editor shares the caller's stdin, stdout and stderr. Once
    /// [`EditableFile::setup`] succeeds, [`EditableFile::cleanup`] runs
    /// exactly once before this returns.
    pub fn edit<F>(&self, file: &F) -> Result<Vec<u8>, EditError>
    where
        F: EditableFile + ?Sized,
    {
        if self.is_none() {
            return Err(EditError::NoEditor);
        }

        let path = file.setup().map_err(EditError::Setup)?;
        let checkout = Checkout { file, path };

        self.run(&checkout.path)?;

        let content = fs::read(&checkout.path).map_err(|source| EditError::Read {
            path: checkout.path.clone(),
            source,
        })?;
        debug!(
            path = %checkout.path.display(),
            bytes = content.len(),
            "edit session finished"
        );
        Ok(content)
    }

    fn run(&self, path: &Path) -> Result<(), EditError> {
        let command = self.as_str();
        debug!(editor = command, path = %path.display(), "launching editor");

        // $0 is the editor command, $1 the path, so the shell never
        // re-parses the file name.
        let status = Command::new(SHELL)
            .arg("-c")
            .arg(format!(r#"{command} "$1""#))
            .arg(command)
            .arg(path)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| EditError::Spawn {
                command: command.to_string(),
                source,
            })?;

        if !status.success() {
            return Err(EditError::Exit {
                command: command.to_string(),
                status,
            });
        }
        Ok(())
    }
}
