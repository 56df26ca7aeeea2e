use seq_error::{Result, SeqError};

use crate::sequence::{Status, Step};

/// Remembers the status of the last pull of the sequence that owns it.
///
/// Producers call [`StatusTracker::replay`] before touching their source
/// and pass every outcome through [`StatusTracker::record`]. Together the
/// two make exhaustion and errors sticky.
#[derive(Debug, Clone, Default)]
pub struct StatusTracker {
    status: Status,
}

impl StatusTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    /// The terminal outcome to hand back again, if the sequence is
    /// already finished.
    pub fn replay<T>(&self) -> Option<Result<Step<T>>> {
        match &self.status {
            Status::Ok => None,
            Status::End => Some(Ok(Step::End)),
            Status::Failed(e) => Some(Err(e.clone())),
        }
    }

    /// Store the status matching `outcome` and return the outcome.
    pub fn record<T>(&mut self, outcome: Result<Step<T>>) -> Result<Step<T>> {
        self.status = match &outcome {
            Ok(Step::Item(_)) => Status::Ok,
            Ok(Step::Last(_)) | Ok(Step::End) => Status::End,
            Err(e) => Status::Failed(e.clone()),
        };
        outcome
    }

    /// Store a failure that did not come out of a pull, such as a source
    /// that could not be opened, and return it.
    pub fn fail(&mut self, err: SeqError) -> SeqError {
        self.status = Status::Failed(err.clone());
        err
    }
}

/// Byte offsets around the most recent pull of a reader-backed sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Position {
    last: usize,
    current: usize,
}

impl Position {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offset where the most recent pull started.
    pub fn last(&self) -> usize {
        self.last
    }

    /// Offset where the next pull will start.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Rotate the current offset into `last`, move forward by `n` bytes
    /// and return the new current offset.
    pub fn advance(&mut self, n: usize) -> usize {
        self.last = self.current;
        self.current += n;
        self.current
    }
}
