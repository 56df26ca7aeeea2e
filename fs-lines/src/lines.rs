use std::io::Read;

use seq_core::{LastStatus, Position, Sequence, Status, Step};
use seq_error::Result;

use crate::chars::CharSeq;
use crate::DELIMITER;

/// Reads a byte stream line by line.
///
/// Lines are assembled from the characters of an inner [`CharSeq`], which
/// `LineSeq` owns. A line ends at `'\n'` (stripped from the returned
/// value) or at the end of the stream. A final line without a trailing
/// delimiter is returned as [`Step::Last`].
///
/// Positions are byte offsets and advance by the full length of each
/// line, delimiter included.
pub struct LineSeq<R> {
    chars: CharSeq<R>,
    position: Position,
}

impl<R: Read> LineSeq<R> {
    pub fn new(source: R) -> Self {
        LineSeq {
            chars: CharSeq::new(source),
            position: Position::new(),
        }
    }

    /// Offset of the first byte of the last line returned.
    pub fn last_position(&self) -> usize {
        self.position.last()
    }

    /// Offset where the next line starts.
    pub fn position(&self) -> usize {
        self.position.current()
    }

    pub fn chars(&self) -> &CharSeq<R> {
        &self.chars
    }
}

impl<R: Read> Sequence for LineSeq<R> {
    type Item = String;

    fn pull(&mut self) -> Result<Step<String>> {
        let mut line = String::new();
        let mut consumed = 0;
        let delimited = loop {
            // An error drops the partial line and leaves the position as is.
            match self.chars.pull()? {
                Step::Item(ch) | Step::Last(ch) => {
                    let size = self.chars.last_size();
                    if size > 0 {
                        line.push(ch);
                        consumed += size;
                    }
                    if ch == DELIMITER {
                        break true;
                    }
                }
                Step::End => break false,
            }
        };
        self.position.advance(consumed);

        let trimmed = line.trim_end_matches(DELIMITER).len();
        line.truncate(trimmed);

        Ok(if delimited {
            Step::Item(line)
        } else if consumed > 0 {
            Step::Last(line)
        } else {
            Step::End
        })
    }
}

/// The inner [`CharSeq`] is the single owner of the status.
impl<R> LastStatus for LineSeq<R> {
    fn last_status(&self) -> &Status {
        self.chars.last_status()
    }
}

#[cfg(test)]
mod tests {
    use std::fs::File;
    use std::io::ErrorKind;

    use quickcheck_macros::quickcheck;
    use rstest::rstest;
    use seq_core::{count, SequenceExt};

    use super::*;
    use crate::chars::tests::FlakyReader;

    const PETNAMES: &str =
        concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/petnames.txt");

    fn petnames() -> LineSeq<File> {
        LineSeq::new(File::open(PETNAMES).unwrap())
    }

    #[test]
    fn first_line() {
        let mut seq = petnames();
        assert_eq!(seq.pull().unwrap(), Step::Item("AJ".to_owned()));
        assert!(seq.last_status().is_ok());
    }

    #[rstest]
    #[case(5, "Abigail")]
    #[case(13, "Alf")]
    #[case(50, "Zorro")]
    fn nth_line(#[case] pulls: usize, #[case] expected: &str) {
        let mut seq = petnames();
        let mut line = Step::End;
        for _ in 0..pulls {
            line = seq.pull().unwrap();
        }
        assert_eq!(line, Step::Item(expected.to_owned()));
    }

    #[test]
    fn thorough() {
        let mut seq = LineSeq::new("one\ntwo\nthree\n".as_bytes());

        assert_eq!(seq.pull().unwrap(), Step::Item("one".to_owned()));
        assert!(seq.last_status().is_ok());
        assert_eq!((seq.last_position(), seq.position()), (0, 4));

        assert_eq!(seq.pull().unwrap(), Step::Item("two".to_owned()));
        assert!(seq.last_status().is_ok());
        assert_eq!((seq.last_position(), seq.position()), (4, 8));

        assert_eq!(seq.pull().unwrap(), Step::Item("three".to_owned()));
        assert!(seq.last_status().is_ok());
        assert_eq!((seq.last_position(), seq.position()), (8, 14));

        assert_eq!(seq.pull().unwrap(), Step::End);
        assert!(seq.last_status().is_end());
        assert_eq!((seq.last_position(), seq.position()), (14, 14));

        for _ in 0..3 {
            assert_eq!(seq.pull().unwrap(), Step::End);
            assert!(seq.last_status().is_end());
        }
    }

    #[test]
    fn final_line_without_delimiter() {
        let mut seq = LineSeq::new("one\ntwo".as_bytes());
        assert_eq!(seq.pull().unwrap(), Step::Item("one".to_owned()));
        assert_eq!(seq.pull().unwrap(), Step::Last("two".to_owned()));
        assert_eq!((seq.last_position(), seq.position()), (4, 7));
        assert_eq!(seq.pull().unwrap(), Step::End);
    }

    #[test]
    fn empty_lines_are_elements() {
        let mut seq = LineSeq::new("\n\nx\n".as_bytes());
        assert_eq!(seq.pull().unwrap(), Step::Item(String::new()));
        assert_eq!(seq.pull().unwrap(), Step::Item(String::new()));
        assert_eq!(seq.pull().unwrap(), Step::Item("x".to_owned()));
        assert_eq!(seq.pull().unwrap(), Step::End);
    }

    #[test]
    fn empty_source() {
        let mut seq = LineSeq::new(&b""[..]);
        assert_eq!(seq.pull().unwrap(), Step::End);
        assert_eq!(seq.position(), 0);
    }

    #[test]
    fn positions_count_bytes() {
        let mut seq = LineSeq::new("héllo\n✓\n".as_bytes());
        assert_eq!(seq.pull().unwrap(), Step::Item("héllo".to_owned()));
        assert_eq!(seq.position(), 7);
        assert_eq!(seq.pull().unwrap(), Step::Item("✓".to_owned()));
        assert_eq!((seq.last_position(), seq.position()), (7, 11));
        // the delimiter was the last character decoded
        assert_eq!(seq.chars().last_size(), 1);
        assert_eq!(seq.chars().position(), seq.position());
    }

    #[test]
    fn carriage_returns_are_kept() {
        let mut seq = LineSeq::new("a\r\nb".as_bytes());
        assert_eq!(seq.pull().unwrap(), Step::Item("a\r".to_owned()));
        assert_eq!(seq.pull().unwrap(), Step::Last("b".to_owned()));
    }

    #[test]
    fn errors_discard_partial_line() {
        let mut seq = LineSeq::new(FlakyReader::new(b"first\nsecond"));
        assert_eq!(seq.pull().unwrap(), Step::Item("first".to_owned()));

        let err = seq.pull().unwrap_err();
        assert_eq!(err.io_kind(), Some(ErrorKind::Other));
        assert!(seq.last_status().error().is_some());
        assert_eq!((seq.last_position(), seq.position()), (0, 6));

        assert!(seq.pull().is_err());
    }

    #[test]
    fn count_petnames() {
        let mut seq = petnames();
        assert_eq!(count(&mut seq).unwrap(), 50);
        assert_eq!(seq.pull().unwrap(), Step::End);
    }

    #[test]
    fn limit_petnames() {
        let mut seq = petnames().limit(5);
        for name in ["AJ", "Abbey", "Abbie", "Abel"] {
            assert_eq!(seq.pull().unwrap(), Step::Item(name.to_owned()));
        }
        assert_eq!(seq.pull().unwrap(), Step::Last("Abigail".to_owned()));
        assert_eq!(seq.pull().unwrap(), Step::End);
    }

    #[quickcheck]
    fn prop_counts_lines(lines: Vec<String>, trailing: bool) -> bool {
        let lines: Vec<String> =
            lines.into_iter().map(|l| l.replace('\n', "")).collect();
        let mut text = lines.join("\n");
        if trailing && !lines.is_empty() {
            text.push('\n');
        }
        let expected = match lines.last() {
            // an empty final line without delimiter adds no bytes
            Some(last) if last.is_empty() && !trailing => lines.len() - 1,
            _ => lines.len(),
        };
        count(&mut LineSeq::new(text.as_bytes())).unwrap() == expected
    }
}
