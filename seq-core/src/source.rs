use std::iter::Fuse;

use seq_error::Result;

use crate::sequence::{LastStatus, Sequence, Status, Step};
use crate::tracking::StatusTracker;

/// A sequence backed by a `std` iterator.
///
/// Useful for in-memory data (`IterSeq::new(vec![..])`) and for endless
/// producers such as `IterSeq::new(std::iter::repeat(x))`.
pub struct IterSeq<I: Iterator> {
    iter: Fuse<I>,
    tracker: StatusTracker,
}

impl<I: Iterator> IterSeq<I> {
    pub fn new<T>(items: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        IterSeq {
            iter: items.into_iter().fuse(),
            tracker: StatusTracker::new(),
        }
    }
}

impl<I: Iterator> Sequence for IterSeq<I> {
    type Item = I::Item;

    fn pull(&mut self) -> Result<Step<I::Item>> {
        if let Some(done) = self.tracker.replay() {
            return done;
        }
        let step = match self.iter.next() {
            Some(v) => Step::Item(v),
            None => Step::End,
        };
        self.tracker.record(Ok(step))
    }
}

impl<I: Iterator> LastStatus for IterSeq<I> {
    fn last_status(&self) -> &Status {
        self.tracker.status()
    }
}
