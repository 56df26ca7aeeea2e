use std::io::{self, BufRead, BufReader, Read};

use seq_core::{LastStatus, Position, Sequence, Status, StatusTracker, Step};
use seq_error::Result;

// One character is at most 4 bytes, so a tiny buffer is enough.
const BUFFER_CAPACITY: usize = 16;

/// Decodes a byte stream into a sequence of UTF-8 characters.
///
/// Besides the characters themselves, `CharSeq` exposes what an iterator
/// would lose: the byte length of the last character ([`last_size`]) and
/// byte offsets around the last pull ([`last_position`], [`position`]).
///
/// Malformed input does not fail the sequence. Each maximal invalid byte
/// run decodes to U+FFFD, the same policy as `String::from_utf8_lossy`,
/// and `last_size` reports how many bytes it covered.
///
/// [`last_size`]: CharSeq::last_size
/// [`last_position`]: CharSeq::last_position
/// [`position`]: CharSeq::position
pub struct CharSeq<R> {
    reader: BufReader<R>,
    last_size: usize,
    tracker: StatusTracker,
    position: Position,
}

impl<R: Read> CharSeq<R> {
    pub fn new(source: R) -> Self {
        CharSeq {
            reader: BufReader::with_capacity(BUFFER_CAPACITY, source),
            last_size: 0,
            tracker: StatusTracker::new(),
            position: Position::new(),
        }
    }

    /// Byte length of the character returned by the last pull, 0 when the
    /// last pull returned no character.
    pub fn last_size(&self) -> usize {
        self.last_size
    }

    pub fn last_position(&self) -> usize {
        self.position.last()
    }

    pub fn position(&self) -> usize {
        self.position.current()
    }

    fn peek_byte(&mut self) -> io::Result<Option<u8>> {
        loop {
            match self.reader.fill_buf() {
                Ok(buf) => return Ok(buf.first().copied()),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    fn decode(&mut self) -> io::Result<Option<(char, usize)>> {
        let lead = match self.peek_byte()? {
            Some(byte) => byte,
            None => return Ok(None),
        };
        self.reader.consume(1);

        let width = utf8_width(lead);
        match width {
            0 => return Ok(Some((char::REPLACEMENT_CHARACTER, 1))),
            1 => return Ok(Some((char::from(lead), 1))),
            _ => {}
        }

        let mut bytes = [lead, 0, 0, 0];
        let mut len = 1;
        while len < width {
            match self.peek_byte()? {
                Some(byte) if continues(lead, len, byte) => {
                    self.reader.consume(1);
                    bytes[len] = byte;
                    len += 1;
                }
                _ => break,
            }
        }

        let ch = if len == width {
            std::str::from_utf8(&bytes[..len])
                .ok()
                .and_then(|s| s.chars().next())
                .unwrap_or(char::REPLACEMENT_CHARACTER)
        } else {
            char::REPLACEMENT_CHARACTER
        };
        Ok(Some((ch, len)))
    }
}

/// Encoded length announced by a leading byte, 0 if it cannot start a
/// character.
fn utf8_width(lead: u8) -> usize {
    match lead {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}

/// Whether `byte` is a valid continuation at `index` after `lead`.
/// Rejects overlong encodings, surrogates and values above U+10FFFF.
fn continues(lead: u8, index: usize, byte: u8) -> bool {
    let range = match (index, lead) {
        (1, 0xE0) => 0xA0..=0xBF,
        (1, 0xED) => 0x80..=0x9F,
        (1, 0xF0) => 0x90..=0xBF,
        (1, 0xF4) => 0x80..=0x8F,
        _ => 0x80..=0xBF,
    };
    range.contains(&byte)
}

impl<R: Read> Sequence for CharSeq<R> {
    type Item = char;

    fn pull(&mut self) -> Result<Step<char>> {
        if let Some(done) = self.tracker.replay() {
            self.last_size = 0;
            self.position.advance(0);
            return done;
        }

        let (outcome, size) = match self.decode() {
            Ok(Some((ch, size))) => (Ok(Step::Item(ch)), size),
            Ok(None) => {
                log::trace!("end of stream at byte {}", self.position());
                (Ok(Step::End), 0)
            }
            Err(e) => (Err(e.into()), 0),
        };
        self.last_size = size;
        self.position.advance(size);
        self.tracker.record(outcome)
    }
}

impl<R> LastStatus for CharSeq<R> {
    fn last_status(&self) -> &Status {
        self.tracker.status()
    }
}
