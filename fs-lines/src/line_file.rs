use std::fs::File;
use std::path::{Path, PathBuf};

use seq_core::{LastStatus, Sequence, Status, StatusTracker, Step};
use seq_error::Result;

use crate::collection::nth_line;
use crate::lines::LineSeq;

/// A rewindable line sequence over a file.
///
/// The file is opened on the first pull and stays open until the
/// `LineFile` is dropped or rewound. Failing to open it is reported by
/// that pull and by every later one, until a successful [`rewind`].
///
/// [`rewind`]: LineFile::rewind
pub struct LineFile {
    path: PathBuf,
    lines: Option<LineSeq<File>>,
    tracker: StatusTracker,
}

impl LineFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        LineFile {
            path: path.as_ref().to_path_buf(),
            lines: None,
            tracker: StatusTracker::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reopen the file and start again from its first line.
    pub fn rewind(&mut self) -> Result<()> {
        log::trace!("Rewinding {}", self.path.display());
        self.lines = None;
        self.tracker = StatusTracker::new();
        let lines = self.open()?;
        self.lines = Some(lines);
        Ok(())
    }

    /// Rewind and return the line at `index`, leaving the sequence
    /// positioned right after it.
    pub fn get(&mut self, index: usize) -> Result<String> {
        self.rewind()?;
        nth_line(self, index)
    }

    /// Byte offset where the next line starts, 0 before the first pull.
    pub fn position(&self) -> usize {
        self.lines.as_ref().map_or(0, LineSeq::position)
    }

    fn open(&mut self) -> Result<LineSeq<File>> {
        let file = File::open(&self.path)
            .map_err(|e| self.tracker.fail(e.into()))?;
        Ok(LineSeq::new(file))
    }
}

impl Sequence for LineFile {
    type Item = String;

    fn pull(&mut self) -> Result<Step<String>> {
        if let Some(done) = self.tracker.replay() {
            return done;
        }
        let lines = match self.lines.take() {
            Some(lines) => lines,
            None => self.open()?,
        };
        self.lines.insert(lines).pull()
    }
}

impl LastStatus for LineFile {
    fn last_status(&self) -> &Status {
        match &self.lines {
            Some(lines) => lines.last_status(),
            None => self.tracker.status(),
        }
    }
}
