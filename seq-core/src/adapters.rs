//! Sequences that wrap another sequence and reshape its element stream.
//!
//! Every adapter owns exactly one inner sequence and only relies on the
//! [`Sequence`] protocol, so adapters nest freely:
//!
//! ```
//! use seq_core::{IterSeq, Sequence, SequenceExt, Step};
//!
//! let names = IterSeq::new(vec!["AJ", "Abbey", "Abbie", "Abel", "Zeta"]);
//! let mut seq = names.skip(1).filter(|n| n.starts_with("Ab")).limit(2);
//!
//! assert_eq!(seq.pull().unwrap(), Step::Item("Abbey"));
//! assert_eq!(seq.pull().unwrap(), Step::Last("Abbie"));
//! assert_eq!(seq.pull().unwrap(), Step::End);
//! ```
//!
//! Adapters keep their own [`StatusTracker`]: once they report a terminal
//! outcome they replay it without pulling the inner sequence again.

use seq_error::Result;

use crate::sequence::{LastStatus, Sequence, Status, Step};
use crate::tracking::StatusTracker;

/// Yields at most `limit` elements of the inner sequence.
///
/// The element that reaches the limit is returned as [`Step::Last`], so
/// the caller learns about the end together with the final element.
pub struct Limit<S> {
    inner: S,
    taken: usize,
    limit: usize,
    tracker: StatusTracker,
}

impl<S: Sequence> Limit<S> {
    pub fn new(inner: S, limit: usize) -> Self {
        Limit {
            inner,
            taken: 0,
            limit,
            tracker: StatusTracker::new(),
        }
    }

    /// Number of pulls delegated to the inner sequence so far.
    pub fn taken(&self) -> usize {
        self.taken
    }

    pub fn into_inner(self) -> S {
        self.inner
    }

    fn advance(&mut self) -> Result<Step<S::Item>> {
        if self.taken >= self.limit {
            log::trace!("limit of {} reached", self.limit);
            return Ok(Step::End);
        }
        self.taken += 1;
        match self.inner.pull()? {
            Step::Item(v) if self.taken == self.limit => Ok(Step::Last(v)),
            step => Ok(step),
        }
    }
}

impl<S: Sequence> Sequence for Limit<S> {
    type Item = S::Item;

    fn pull(&mut self) -> Result<Step<S::Item>> {
        if let Some(done) = self.tracker.replay() {
            return done;
        }
        let outcome = self.advance();
        self.tracker.record(outcome)
    }
}

impl<S> LastStatus for Limit<S> {
    fn last_status(&self) -> &Status {
        self.tracker.status()
    }
}

/// Yields the elements of the inner sequence that satisfy a predicate.
pub struct Filter<S, P> {
    inner: S,
    predicate: P,
    tracker: StatusTracker,
}

impl<S, P> Filter<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    pub fn new(inner: S, predicate: P) -> Self {
        Filter {
            inner,
            predicate,
            tracker: StatusTracker::new(),
        }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }

    fn advance(&mut self) -> Result<Step<S::Item>> {
        loop {
            match self.inner.pull()? {
                Step::Item(v) => {
                    if (self.predicate)(&v) {
                        return Ok(Step::Item(v));
                    }
                }
                Step::Last(v) if (self.predicate)(&v) => {
                    return Ok(Step::Last(v))
                }
                Step::Last(_) | Step::End => return Ok(Step::End),
            }
        }
    }
}

impl<S, P> Sequence for Filter<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn pull(&mut self) -> Result<Step<S::Item>> {
        if let Some(done) = self.tracker.replay() {
            return done;
        }
        let outcome = self.advance();
        self.tracker.record(outcome)
    }
}

impl<S, P> LastStatus for Filter<S, P> {
    fn last_status(&self) -> &Status {
        self.tracker.status()
    }
}

/// Discards the first `to_skip` elements of the inner sequence.
///
/// The discarding happens lazily, on the first pull. If the inner sequence
/// fails or runs out while discarding, that first pull reports it and no
/// element is read for it.
pub struct Skip<S> {
    inner: S,
    to_skip: usize,
    skipped: bool,
    tracker: StatusTracker,
}

impl<S: Sequence> Skip<S> {
    pub fn new(inner: S, to_skip: usize) -> Self {
        Skip {
            inner,
            to_skip,
            skipped: false,
            tracker: StatusTracker::new(),
        }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }

    fn advance(&mut self) -> Result<Step<S::Item>> {
        if !self.skipped {
            self.skipped = true;
            for n in 0..self.to_skip {
                match self.inner.pull()? {
                    Step::Item(_) => {}
                    Step::Last(_) | Step::End => {
                        log::trace!("skip ran dry after {} elements", n);
                        return Ok(Step::End);
                    }
                }
            }
        }
        self.inner.pull()
    }
}

impl<S: Sequence> Sequence for Skip<S> {
    type Item = S::Item;

    fn pull(&mut self) -> Result<Step<S::Item>> {
        if let Some(done) = self.tracker.replay() {
            return done;
        }
        let outcome = self.advance();
        self.tracker.record(outcome)
    }
}

impl<S> LastStatus for Skip<S> {
    fn last_status(&self) -> &Status {
        self.tracker.status()
    }
}

#[cfg(test)]
mod tests {
    use std::io::ErrorKind;

    use quickcheck_macros::quickcheck;
    use rstest::rstest;

    use super::*;
    use crate::sequence::test_utils::Failing;
    use crate::{count, IterSeq, SequenceExt};

    const NAMES: [&str; 8] = [
        "AJ", "Abbey", "Abbie", "Abel", "Abigail", "Ace", "Zeta", "Abner",
    ];

    fn drain<S: Sequence>(seq: S) -> Vec<S::Item> {
        seq.iter().collect::<Result<_>>().unwrap()
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 1)]
    #[case(5, 5)]
    #[case(8, 8)]
    #[case(20, 8)]
    fn limit_yields_at_most_n(#[case] n: usize, #[case] expected: usize) {
        let seq = IterSeq::new(NAMES).limit(n);
        assert_eq!(drain(seq), NAMES[..expected].to_vec());
    }

    #[test]
    fn limit_reports_end_with_final_element() {
        let mut seq = IterSeq::new(NAMES).limit(5);
        for name in &NAMES[..4] {
            assert_eq!(seq.pull().unwrap(), Step::Item(*name));
            assert!(seq.last_status().is_ok());
        }
        assert_eq!(seq.pull().unwrap(), Step::Last("Abigail"));
        assert!(seq.last_status().is_end());
        assert_eq!(seq.pull().unwrap(), Step::End);
        assert_eq!(seq.taken(), 5);
    }

    #[test]
    fn limit_over_short_sequence_ends_separately() {
        let mut seq = IterSeq::new(vec![1, 2]).limit(3);
        assert_eq!(seq.pull().unwrap(), Step::Item(1));
        assert_eq!(seq.pull().unwrap(), Step::Item(2));
        assert_eq!(seq.pull().unwrap(), Step::End);
        assert_eq!(seq.pull().unwrap(), Step::End);
    }

    #[test]
    fn limit_does_not_touch_inner_after_limit() {
        let mut inner = Failing::after(10);
        let mut seq = inner.by_ref().limit(2);
        assert_eq!(count(&mut seq).unwrap(), 2);
        assert_eq!(seq.pull().unwrap(), Step::End);
        assert_eq!(inner.pulls, 2);
    }

    #[test]
    fn limit_zero_never_pulls() {
        let mut inner = Failing::after(0);
        let mut seq = inner.by_ref().limit(0);
        assert_eq!(seq.pull().unwrap(), Step::End);
        assert_eq!(inner.pulls, 0);
    }

    #[quickcheck]
    fn prop_limit_takes_min(data: Vec<u8>, n: u8) -> bool {
        let n = n as usize;
        let taken = drain(IterSeq::new(data.clone()).limit(n));
        taken.len() == n.min(data.len()) && data.starts_with(&taken)
    }

    #[test]
    fn filter_keeps_matching_elements() {
        let seq = IterSeq::new(vec!["Abbey", "Abbie", "Abel", "Zeta"])
            .filter(|name| name.starts_with("Ab"));
        assert_eq!(drain(seq), vec!["Abbey", "Abbie", "Abel"]);
    }

    #[test]
    fn filter_turns_rejected_last_into_end() {
        let mut seq = IterSeq::new(vec![1, 2, 3])
            .limit(3)
            .filter(|v| v % 2 == 1);
        assert_eq!(seq.pull().unwrap(), Step::Item(1));
        assert_eq!(seq.pull().unwrap(), Step::Last(3));
        assert_eq!(seq.pull().unwrap(), Step::End);

        let mut seq = IterSeq::new(vec![1, 2]).limit(2).filter(|v| *v == 1);
        assert_eq!(seq.pull().unwrap(), Step::Item(1));
        assert_eq!(seq.pull().unwrap(), Step::End);
        assert!(seq.last_status().is_end());
    }

    #[test]
    fn filter_propagates_errors() {
        let mut seq = Failing::after(3).filter(|v| *v > 5);
        let err = seq.pull().unwrap_err();
        assert_eq!(err.io_kind(), Some(ErrorKind::BrokenPipe));
        assert!(seq.pull().is_err());
        assert!(seq.last_status().error().is_some());
        assert_eq!(seq.into_inner().pulls, 4);
    }

    #[test]
    fn skip_discards_first_elements() {
        let mut seq = IterSeq::new(vec!['a', 'b', 'c']).skip(1);
        assert_eq!(seq.pull().unwrap(), Step::Item('b'));
        assert_eq!(seq.pull().unwrap(), Step::Item('c'));
        assert_eq!(seq.pull().unwrap(), Step::End);
        assert_eq!(seq.pull().unwrap(), Step::End);
    }

    #[test]
    fn skip_past_the_end() {
        let mut seq = IterSeq::new(vec![1, 2]).skip(5);
        assert_eq!(seq.pull().unwrap(), Step::End);
        assert!(seq.last_status().is_end());
    }

    #[test]
    fn skip_reports_errors_while_discarding() {
        let mut seq = Failing::after(2).skip(3);
        assert!(seq.pull().is_err());
        assert!(seq.pull().is_err());
        assert_eq!(seq.into_inner().pulls, 3);
    }

    #[test]
    fn composition_matches_manual_pipeline() {
        let predicate = |name: &&str| name.starts_with("Ab");

        let composed = IterSeq::new(NAMES).skip(3).filter(predicate).limit(1);

        let mut manual = IterSeq::new(NAMES);
        for _ in 0..3 {
            manual.pull().unwrap();
        }
        let expected = loop {
            match manual.pull().unwrap() {
                Step::Item(v) if predicate(&v) => break v,
                Step::Item(_) => continue,
                step => panic!("unexpected {:?}", step),
            }
        };

        assert_eq!(drain(composed), vec![expected]);
        assert_eq!(expected, "Abel");
    }

    #[rstest]
    #[case(vec![])]
    #[case(vec![1])]
    #[case(vec![1, 2, 3, 4])]
    fn adapters_stay_exhausted(#[case] data: Vec<i32>) {
        let mut limited = IterSeq::new(data.clone()).limit(2);
        let mut filtered = IterSeq::new(data.clone()).filter(|_| true);
        let mut skipped = IterSeq::new(data).skip(1);

        count(&mut limited).unwrap();
        count(&mut filtered).unwrap();
        count(&mut skipped).unwrap();
        for _ in 0..3 {
            assert_eq!(limited.pull().unwrap(), Step::End);
            assert_eq!(filtered.pull().unwrap(), Step::End);
            assert_eq!(skipped.pull().unwrap(), Step::End);
        }
    }
}
