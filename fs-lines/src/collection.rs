use std::fs::File;
use std::path::{Path, PathBuf};

use seq_core::{count, Sequence};
use seq_error::{Result, SeqError};

use crate::lines::LineSeq;

/// A bounded, randomly indexable set of lines.
///
/// `count` and `line` must agree on size and ordering for a given state of
/// the backing store.
pub trait LineCollection {
    /// Number of lines in the collection.
    fn count(&self) -> Result<usize>;

    /// The line at `index`, or [`SeqError::IndexOutOfRange`].
    fn line(&self, index: usize) -> Result<String>;
}

impl<C: LineCollection + ?Sized> LineCollection for &C {
    fn count(&self) -> Result<usize> {
        (**self).count()
    }

    fn line(&self, index: usize) -> Result<String> {
        (**self).line(index)
    }
}

impl<C: LineCollection + ?Sized> LineCollection for Box<C> {
    fn count(&self) -> Result<usize> {
        (**self).count()
    }

    fn line(&self, index: usize) -> Result<String> {
        (**self).line(index)
    }
}

/// Pick a line uniformly at random.
pub fn random_line<C: LineCollection + ?Sized>(
    collection: &C,
    rng: &mut fastrand::Rng,
) -> Result<String> {
    let n = collection.count()?;
    if n == 0 {
        return Err(SeqError::EmptyCollection);
    }
    collection.line(rng.usize(..n))
}

/// Pull from `seq` until the line at `index` shows up.
pub(crate) fn nth_line<S>(seq: &mut S, index: usize) -> Result<String>
where
    S: Sequence<Item = String> + ?Sized,
{
    let mut seen = 0;
    loop {
        let step = seq.pull()?;
        let terminal = step.is_terminal();
        if let Some(line) = step.value() {
            if seen == index {
                return Ok(line);
            }
            seen += 1;
        }
        if terminal {
            return Err(SeqError::IndexOutOfRange { index, count: seen });
        }
    }
}

/// In-memory collection of lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VecLines {
    lines: Vec<String>,
}

impl VecLines {
    pub fn new(lines: Vec<String>) -> Self {
        VecLines { lines }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.lines
    }
}

impl From<Vec<String>> for VecLines {
    fn from(lines: Vec<String>) -> Self {
        VecLines::new(lines)
    }
}

impl<S: Into<String>> FromIterator<S> for VecLines {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        VecLines::new(iter.into_iter().map(Into::into).collect())
    }
}

impl LineCollection for VecLines {
    fn count(&self) -> Result<usize> {
        Ok(self.lines.len())
    }

    fn line(&self, index: usize) -> Result<String> {
        self.lines
            .get(index)
            .cloned()
            .ok_or(SeqError::IndexOutOfRange {
                index,
                count: self.lines.len(),
            })
    }
}

/// Lines of a text file, re-read on every call.
///
/// Nothing is cached and no handle is kept between calls: each `count` or
/// `line` opens the file, decodes it through its own [`LineSeq`] and
/// closes it again, whichever way the call returns. A `FileLines` can
/// therefore be shared freely between independent readers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLines {
    path: PathBuf,
}

impl FileLines {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        FileLines {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open(&self) -> Result<LineSeq<File>> {
        log::trace!("Opening {}", self.path.display());
        let file = File::open(&self.path)?;
        Ok(LineSeq::new(file))
    }
}

impl LineCollection for FileLines {
    fn count(&self) -> Result<usize> {
        let mut lines = self.open()?;
        count(&mut lines)
    }

    fn line(&self, index: usize) -> Result<String> {
        log::trace!("Looking up line {} of {}", index, self.path.display());
        let mut lines = self.open()?;
        nth_line(&mut lines, index)
    }
}
