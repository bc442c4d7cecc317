//! Size-rotated line writer for trace output.
//!
//! Lines are appended to one file. Before a write would push the file past its
//! size limit, the file is shifted into numbered backups (`name.1` is the most
//! recent) and a fresh file is started. Backups beyond the retention count are
//! deleted.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

/// Rotation threshold (10 MB).
pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Backups kept after rotation.
pub const MAX_BACKUP_FILES: usize = 3;

#[derive(Debug, Default)]
struct OpenFile {
    file: Option<File>,
    len: u64,
}

/// Thread-safe rotating line writer.
pub struct FileWriter {
    file_path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    state: Mutex<OpenFile>,
}

impl FileWriter {
    /// Creates a writer with the default limits. Nothing is opened yet.
    #[must_use]
    pub fn new(file_path: PathBuf) -> Self {
        Self::with_limits(file_path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    /// Creates a writer with explicit limits.
    #[must_use]
    pub fn with_limits(file_path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            file_path,
            max_bytes,
            max_backups,
            state: Mutex::new(OpenFile::default()),
        }
    }

    /// Path of backup number `n` (1 is the most recent).
    #[must_use]
    pub fn backup_path(&self, n: usize) -> PathBuf {
        let mut name = self.file_path.clone().into_os_string();
        name.push(format!(".{n}"));
        PathBuf::from(name)
    }

    /// Appends one line, rotating first if it would not fit.
    ///
    /// A single line longer than the limit is still written, to a fresh file.
    ///
    /// # Errors
    ///
    /// Returns an error if rotating, opening or writing fails.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let needed = line.len() as u64 + 1;

        if state.file.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?;
            state.len = file.metadata()?.len();
            state.file = Some(file);
        }

        if state.len > 0 && state.len + needed > self.max_bytes {
            state.file = None;
            self.rotate()?;
            state.file = Some(File::create(&self.file_path)?);
            state.len = 0;
        }

        if let Some(file) = state.file.as_mut() {
            writeln!(file, "{line}")?;
            file.flush()?;
        }
        state.len += needed;
        Ok(())
    }

    fn rotate(&self) -> io::Result<()> {
        if self.max_backups == 0 {
            return fs::remove_file(&self.file_path).or_else(ignore_missing);
        }

        fs::remove_file(self.backup_path(self.max_backups)).or_else(ignore_missing)?;
        for n in (1..self.max_backups).rev() {
            fs::rename(self.backup_path(n), self.backup_path(n + 1)).or_else(ignore_missing)?;
        }
        fs::rename(&self.file_path, self.backup_path(1)).or_else(ignore_missing)
    }
}

fn ignore_missing(e: io::Error) -> io::Result<()> {
    if e.kind() == io::ErrorKind::NotFound {
        Ok(())
    } else {
        Err(e)
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .field("max_bytes", &self.max_bytes)
            .field("max_backups", &self.max_backups)
            .finish_non_exhaustive()
    }
}
