use super::LogSink;
use crate::error::{Result, RtbError};
use crate::model::Severity;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

struct FileState {
    path: PathBuf,
    file: Option<File>,
}

/// Writes lines to a single file.
///
/// Opening truncates the file. Every line is flushed as soon as it is written.
/// When the file cannot be opened the sink stays alive but drops lines until a
/// later [`open`](Self::open) or [`set_path`](Self::set_path) succeeds.
pub struct FileSink {
    state: Mutex<FileState>,
}

impl FileSink {
    /// A sink pointing at `path` that has not opened anything yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            state: Mutex::new(FileState {
                path: path.into(),
                file: None,
            }),
        }
    }

    /// Create a sink and open its file straight away.
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let sink = Self::new(path);
        sink.open()?;
        Ok(sink)
    }

    fn state(&self) -> MutexGuard<'_, FileState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn path(&self) -> PathBuf {
        self.state().path.clone()
    }

    pub fn is_open(&self) -> bool {
        self.state().file.is_some()
    }

    /// Close any open handle and open the configured path for writing.
    pub fn open(&self) -> Result<()> {
        let mut state = self.state();
        open_into(&mut state)
    }

    /// Point the sink at another file.
    ///
    /// Re-selecting the path that is already open keeps the current handle, so
    /// earlier lines are not truncated away.
    pub fn set_path(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut state = self.state();
        if state.path == path && state.file.is_some() {
            return Ok(());
        }
        state.path = path.to_path_buf();
        open_into(&mut state)
    }
}

fn open_into(state: &mut FileState) -> Result<()> {
    // Drop the previous handle before touching the new path.
    state.file = None;
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&state.path)
        .map_err(|source| RtbError::LogFileOpen {
            path: state.path.clone(),
            source,
        })?;
    state.file = Some(file);
    Ok(())
}

impl LogSink for FileSink {
    fn log(&self, _severity: Severity, line: &str) {
        let mut state = self.state();
        if let Some(file) = state.file.as_mut() {
            let mut text = String::with_capacity(line.len() + 1);
            text.push_str(line);
            text.push('\n');
            let _ = file.write_all(text.as_bytes()).and_then(|_| file.flush());
        }
    }
}

impl std::fmt::Debug for FileSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state();
        f.debug_struct("FileSink")
            .field("path", &state.path)
            .field("open", &state.file.is_some())
            .finish()
    }
}
