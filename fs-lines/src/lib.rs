//! # FS Lines
//!
//! Text sources expressed as [`seq_core::Sequence`]s.
//!
//! - [`CharSeq`] decodes a byte stream into UTF-8 characters.
//! - [`LineSeq`] assembles those characters into `'\n'` delimited lines.
//! - [`LineFile`] is a rewindable [`LineSeq`] over a path.
//! - [`LineCollection`] is a random-access view over a bounded set of
//!   lines, either in memory ([`VecLines`]) or re-read from a file on every
//!   call ([`FileLines`]).
//! - [`RandomLines`] draws unique random lines from a collection.

pub mod chars;
pub mod collection;
pub mod line_file;
pub mod lines;
pub mod random;

pub use chars::CharSeq;
pub use collection::{random_line, FileLines, LineCollection, VecLines};
pub use line_file::LineFile;
pub use lines::LineSeq;
pub use random::RandomLines;

/// The only line delimiter understood by [`LineSeq`].
pub const DELIMITER: char = '\n';
