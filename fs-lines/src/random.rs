use std::collections::HashSet;

use seq_core::{LastStatus, Sequence, Status, StatusTracker, Step};
use seq_error::Result;

use crate::collection::LineCollection;

/// Draws random lines from a collection without repeating a value.
///
/// `shoe` lines are held back: the sequence ends as soon as
/// `shoe + drawn >= count`, so at most `count - shoe` lines are ever
/// returned. The rule is conservative. Drawing is plain rejection
/// sampling, and the sequence does not guarantee that every line it could
/// still return is actually reached.
///
/// Lines are deduplicated by value. When a collection repeats a line, the
/// sequence also ends once every index has been drawn at least once.
pub struct RandomLines<C> {
    collection: C,
    drawn: HashSet<String>,
    tried: HashSet<usize>,
    shoe: usize,
    rng: fastrand::Rng,
    tracker: StatusTracker,
}

impl<C: LineCollection> RandomLines<C> {
    pub fn new(collection: C, shoe: usize) -> Self {
        Self::with_rng(collection, shoe, fastrand::Rng::new())
    }

    /// Same as [`RandomLines::new`] with a caller-provided generator, for
    /// reproducible draws.
    pub fn with_rng(collection: C, shoe: usize, rng: fastrand::Rng) -> Self {
        RandomLines {
            collection,
            drawn: HashSet::new(),
            tried: HashSet::new(),
            shoe,
            rng,
            tracker: StatusTracker::new(),
        }
    }

    /// Number of lines returned so far.
    pub fn drawn(&self) -> usize {
        self.drawn.len()
    }

    pub fn shoe(&self) -> usize {
        self.shoe
    }

    pub fn collection(&self) -> &C {
        &self.collection
    }

    fn advance(&mut self) -> Result<Step<String>> {
        let n = self.collection.count()?;
        loop {
            if self.shoe + self.drawn.len() >= n {
                log::debug!(
                    "Sampling done: {} drawn, {} in the shoe, {} lines",
                    self.drawn.len(),
                    self.shoe,
                    n
                );
                return Ok(Step::End);
            }
            if self.tried.len() >= n {
                log::debug!("Sampling done: all {} lines tried", n);
                return Ok(Step::End);
            }

            let index = self.rng.usize(..n);
            let line = self.collection.line(index)?;
            self.tried.insert(index);
            if !self.drawn.contains(&line) {
                self.drawn.insert(line.clone());
                return Ok(Step::Item(line));
            }
        }
    }
}

impl<C: LineCollection> Sequence for RandomLines<C> {
    type Item = String;

    fn pull(&mut self) -> Result<Step<String>> {
        if let Some(done) = self.tracker.replay() {
            return done;
        }
        let outcome = self.advance();
        self.tracker.record(outcome)
    }
}

impl<C> LastStatus for RandomLines<C> {
    fn last_status(&self) -> &Status {
        self.tracker.status()
    }
}
