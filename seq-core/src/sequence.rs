use std::iter::FusedIterator;

use seq_error::{Result, SeqError};

use crate::adapters::{Filter, Limit, Skip};

/// Outcome of a successful [`Sequence::pull`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step<T> {
    /// An element. More elements may follow.
    Item(T),
    /// The final element. The sequence is exhausted after it.
    Last(T),
    /// No element. The sequence is exhausted.
    End,
}

impl<T> Step<T> {
    /// The element carried by this step, if any.
    pub fn value(self) -> Option<T> {
        match self {
            Step::Item(v) | Step::Last(v) => Some(v),
            Step::End => None,
        }
    }

    pub fn as_value(&self) -> Option<&T> {
        match self {
            Step::Item(v) | Step::Last(v) => Some(v),
            Step::End => None,
        }
    }

    /// True when no further element will follow this step.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Step::Item(_))
    }

    pub fn is_end(&self) -> bool {
        matches!(self, Step::End)
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Step<U> {
        match self {
            Step::Item(v) => Step::Item(f(v)),
            Step::Last(v) => Step::Last(f(v)),
            Step::End => Step::End,
        }
    }
}

/// Status of the most recent pull of a sequence.
#[derive(Debug, Clone, Default)]
pub enum Status {
    /// The last pull produced an element that is not the final one,
    /// or the sequence has not been pulled yet.
    #[default]
    Ok,
    /// The sequence is exhausted.
    End,
    /// The sequence failed. The error is returned by every later pull.
    Failed(SeqError),
}

impl Status {
    pub fn is_ok(&self) -> bool {
        matches!(self, Status::Ok)
    }

    pub fn is_end(&self) -> bool {
        matches!(self, Status::End)
    }

    pub fn error(&self) -> Option<&SeqError> {
        match self {
            Status::Failed(e) => Some(e),
            _ => None,
        }
    }
}

/// A stateful, single-consumer source of elements.
///
/// Each call to `pull` advances the sequence by one element. Once a pull
/// has returned [`Step::End`], [`Step::Last`] or an error, the sequence is
/// finished: later pulls return `Step::End` (or the same error again) and
/// never resume producing elements.
pub trait Sequence {
    type Item;

    fn pull(&mut self) -> Result<Step<Self::Item>>;
}

/// Sequences that can report the status of their most recent pull.
pub trait LastStatus {
    fn last_status(&self) -> &Status;
}

impl<S: Sequence + ?Sized> Sequence for &mut S {
    type Item = S::Item;

    fn pull(&mut self) -> Result<Step<S::Item>> {
        (**self).pull()
    }
}

impl<S: Sequence + ?Sized> Sequence for Box<S> {
    type Item = S::Item;

    fn pull(&mut self) -> Result<Step<S::Item>> {
        (**self).pull()
    }
}

impl<S: LastStatus + ?Sized> LastStatus for &mut S {
    fn last_status(&self) -> &Status {
        (**self).last_status()
    }
}

impl<S: LastStatus + ?Sized> LastStatus for Box<S> {
    fn last_status(&self) -> &Status {
        (**self).last_status()
    }
}

/// Drain `seq` and return the number of elements it produced.
///
/// Exhaustion counts as success; any other error is returned as soon as
/// it is seen. The sequence is left exhausted.
pub fn count<S: Sequence + ?Sized>(seq: &mut S) -> Result<usize> {
    let mut n = 0;
    loop {
        match seq.pull()? {
            Step::Item(_) => n += 1,
            Step::Last(_) => return Ok(n + 1),
            Step::End => return Ok(n),
        }
    }
}

/// Adapter methods available on every [`Sequence`].
pub trait SequenceExt: Sequence {
    /// Stop after `n` elements. The n-th element comes back as
    /// [`Step::Last`].
    fn limit(self, n: usize) -> Limit<Self>
    where
        Self: Sized,
    {
        Limit::new(self, n)
    }

    /// Only yield elements for which `predicate` returns true.
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// Discard the first `n` elements.
    fn skip(self, n: usize) -> Skip<Self>
    where
        Self: Sized,
    {
        Skip::new(self, n)
    }

    /// Borrow the sequence so an adapter can wrap it without taking it.
    fn by_ref(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self
    }

    /// Turn the sequence into a `std` iterator of `Result`s.
    fn iter(self) -> Iter<Self>
    where
        Self: Sized,
    {
        Iter::new(self)
    }

    /// See [`count`].
    fn count(&mut self) -> Result<usize> {
        count(self)
    }
}

impl<S: Sequence + ?Sized> SequenceExt for S {}

/// Iterator over the elements of a sequence.
///
/// Yields `Ok` for every element, then stops. An error is yielded once
/// and ends the iteration.
pub struct Iter<S> {
    seq: S,
    done: bool,
}

impl<S> Iter<S> {
    pub fn new(seq: S) -> Self {
        Iter { seq, done: false }
    }

    pub fn into_inner(self) -> S {
        self.seq
    }
}

impl<S: Sequence> Iterator for Iter<S> {
    type Item = Result<S::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.seq.pull() {
            Ok(Step::Item(v)) => Some(Ok(v)),
            Ok(Step::Last(v)) => {
                self.done = true;
                Some(Ok(v))
            }
            Ok(Step::End) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl<S: Sequence> FusedIterator for Iter<S> {}
