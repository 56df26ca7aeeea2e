use std::collections::HashSet;
use std::hash::Hash;

use seq_error::{Result, SeqError};

use crate::sequence::{Sequence, Step};

/// A fixed-capacity set of values already drawn ("burned") from sequences.
///
/// [`BurnMap::add_from`] keeps pulling until it sees a value that is not
/// burned yet. Once `max_size` values have been burned, every further
/// attempt fails with [`SeqError::CapacityExhausted`].
#[derive(Debug, Clone)]
pub struct BurnMap<T> {
    burned: HashSet<T>,
    max_size: usize,
}

impl<T> BurnMap<T>
where
    T: Eq + Hash + Clone,
{
    pub fn new(max_size: usize) -> Self {
        BurnMap {
            burned: HashSet::new(),
            max_size,
        }
    }

    /// Draw the next unburned value from `seq`.
    ///
    /// The call that burns the last free slot still succeeds with its
    /// value; only the calls after it fail with
    /// [`SeqError::CapacityExhausted`].
    ///
    /// Duplicates are skipped. When `seq` runs out first its terminal
    /// outcome is relayed: `Step::End`, its error, or `Step::Last` when
    /// its final element was new.
    pub fn add_from<S>(&mut self, seq: &mut S) -> Result<Step<T>>
    where
        S: Sequence<Item = T> + ?Sized,
    {
        if self.is_full() {
            return Err(SeqError::CapacityExhausted {
                capacity: self.max_size,
            });
        }
        loop {
            match seq.pull()? {
                Step::Item(v) => {
                    if self.burn(&v) {
                        return Ok(Step::Item(v));
                    }
                }
                Step::Last(v) => {
                    return if self.burn(&v) {
                        Ok(Step::Last(v))
                    } else {
                        Ok(Step::End)
                    };
                }
                Step::End => return Ok(Step::End),
            }
        }
    }

    fn burn(&mut self, value: &T) -> bool {
        if self.burned.contains(value) {
            return false;
        }
        self.burned.insert(value.clone());
        if self.is_full() {
            log::debug!("burn map filled all {} slots", self.max_size);
        }
        true
    }

    /// Number of values that can still be burned.
    pub fn capacity(&self) -> usize {
        self.max_size.saturating_sub(self.burned.len())
    }

    pub fn is_full(&self) -> bool {
        self.capacity() == 0
    }

    pub fn contains(&self, value: &T) -> bool {
        self.burned.contains(value)
    }

    pub fn len(&self) -> usize {
        self.burned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.burned.is_empty()
    }
}
